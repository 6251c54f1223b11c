use anyhow::Result;

use danmaku_core::AppConfig;

pub fn run(config: &AppConfig, init: bool) -> Result<()> {
    let path = AppConfig::config_path();

    if init {
        if path.exists() {
            println!("Config already exists at {}", path.display());
        } else {
            AppConfig::default().save()?;
            println!("Wrote default config to {}", path.display());
            return Ok(());
        }
    } else if !path.exists() {
        println!("# No config file at {}, using defaults", path.display());
    } else {
        println!("# {}", path.display());
    }

    print!("{}", config.to_toml()?);
    Ok(())
}
