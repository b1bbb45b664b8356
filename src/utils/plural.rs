//! Count formatting for log lines.

fn suffix(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// `count` followed by `noun`, with an `s` unless the count is one:
/// `plural_count(3, "url")` -> `"3 urls"`.
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", suffix(count))
}
