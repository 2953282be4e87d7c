/// Abbreviate a follower/following count: `999`, `1.5K`, `500K`, `1.2M`, `3B`.
///
/// One decimal is kept and dropped when it is zero. Values that would round up
/// to the next unit are shown in that unit (`999_950` is `1M`, not `1000K`).
pub fn format_count(n: u64) -> String {
    if n < 1_000 {
        n.to_string()
    } else if n < 999_950 {
        abbreviate(n, 1_000, "K")
    } else if n < 999_950_000 {
        abbreviate(n, 1_000_000, "M")
    } else {
        abbreviate(n, 1_000_000_000, "B")
    }
}

fn abbreviate(n: u64, unit: u64, suffix: &str) -> String {
    let tenths = n.saturating_mul(10).saturating_add(unit / 2) / unit;
    if tenths % 10 == 0 {
        format!("{}{}", tenths / 10, suffix)
    } else {
        format!("{}.{}{}", tenths / 10, tenths % 10, suffix)
    }
}
