//! Small UI helpers: percent formatting and name truncation.

pub fn pct(v: f64) -> String {
    format!("{v:.1}%")
}

pub fn truncate_middle(s: &str, max: usize) -> String {
    if s.len() <= max { return s.to_string(); }
    if max <= 3 { return "...".into(); }
    let keep = max - 3;
    let left = keep / 2;
    let right = keep - left;
    format!("{}...{}", &s[..left], &s[s.len()-right..])
}
