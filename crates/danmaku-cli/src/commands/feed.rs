use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use rand::{rngs::StdRng, SeedableRng};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use super::samples::random_comment;

/// Where comments come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentSource {
    /// Built-in samples, picked at random forever
    Samples,
    File(PathBuf),
    Stdin,
}

/// Spawn a task that sends comments into `tx` one per `period`
///
/// The task ends when the source runs dry or the receiver is dropped.
pub fn spawn_feeder(
    source: CommentSource,
    period: Duration,
    tx: mpsc::UnboundedSender<String>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = match source {
            CommentSource::Samples => feed_samples(period, tx).await,
            CommentSource::File(path) => match tokio::fs::File::open(&path).await {
                Ok(file) => feed_lines(file, period, tx).await,
                Err(e) => Err(e).with_context(|| format!("opening {}", path.display())),
            },
            CommentSource::Stdin => feed_lines(tokio::io::stdin(), period, tx).await,
        };
        match result {
            Ok(sent) => info!("Comment feed finished after {} comments", sent),
            Err(e) => warn!("Comment feed stopped: {:#}", e),
        }
    })
}

async fn feed_samples(period: Duration, tx: mpsc::UnboundedSender<String>) -> Result<usize> {
    let mut rng = StdRng::from_os_rng();
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut sent = 0;

    loop {
        ticker.tick().await;
        if tx.send(random_comment(&mut rng).to_string()).is_err() {
            return Ok(sent);
        }
        sent += 1;
    }
}

/// Send each non-empty line of `reader`, pacing them by `period`
pub async fn feed_lines<R>(
    reader: R,
    period: Duration,
    tx: mpsc::UnboundedSender<String>,
) -> Result<usize>
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut sent = 0;

    while let Some(line) = lines.next_line().await.context("reading comments")? {
        if line.trim().is_empty() {
            continue;
        }
        ticker.tick().await;
        if tx.send(line).is_err() {
            debug!("Comment receiver closed");
            break;
        }
        sent += 1;
    }

    Ok(sent)
}
