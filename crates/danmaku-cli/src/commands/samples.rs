use rand::Rng;

/// Comments the `run` command cycles through
pub const SAMPLE_COMMENTS: &[&str] = &[
    "😂😂😂😂😂😂😂",
    "声音好听到不行",
    "哈哈哈哈哈哈哈哈哈哈哈哈哈哈",
    "胡小盼我爱你",
    "根本停不下来",
    "卧槽",
    "前方高能！！！",
    "弹幕护体",
    "[○･｀Д´･ ○]",
    "完结撒花",
    "再见",
    "啊啊啊太甜了",
    "啊啊啊啊啊啊啊啊啊啊啊啊啊啊啊啊啊啊啊啊啊啊啊啊啊啊啊啊啊啊",
    "哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈哈",
    "笑出猪叫声",
    "加油",
    "混入其中",
    "(*^▽^*)",
    "歌神",
    "前排围观",
    "日常打卡",
    "唱得太好听了，下次不要再唱了",
];

pub fn random_comment<R: Rng>(rng: &mut R) -> &'static str {
    SAMPLE_COMMENTS[rng.random_range(0..SAMPLE_COMMENTS.len())]
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_samples_are_not_blank() {
        assert!(SAMPLE_COMMENTS.iter().all(|c| !c.trim().is_empty()));
    }

    #[test]
    fn test_random_comment_covers_samples() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2_000 {
            seen.insert(random_comment(&mut rng));
        }
        assert_eq!(seen.len(), SAMPLE_COMMENTS.len());
    }
}
