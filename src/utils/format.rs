//! Number and duration formatting for the front-end.

const SUFFIXES: &[&str] = &["", "K", "M", "B", "T", "Qa", "Qi", "Sx"];

/// Formats a number with abbreviated suffixes (K, M, B, T, Qa, Qi, Sx).
///
/// Values below 1000 print as whole numbers. Larger values keep three
/// significant digits, truncated so 999_999 reads "999K" and never "1000K".
pub fn format_number(n: f64) -> String {
    if n.is_nan() || n <= 0.0 {
        return "0".to_string();
    }
    if n < 1000.0 {
        return format!("{}", n.floor() as u64);
    }

    let mut value = n;
    let mut tier = 0;
    while value >= 1000.0 && tier < SUFFIXES.len() - 1 {
        value /= 1000.0;
        tier += 1;
    }

    let decimals: i32 = if value >= 100.0 {
        0
    } else if value >= 10.0 {
        1
    } else {
        2
    };
    let factor = 10f64.powi(decimals);
    let shown = (value * factor + 1e-9).floor() / factor;

    let mut text = format!("{:.*}", decimals as usize, shown);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    format!("{}{}", text, SUFFIXES[tier])
}

/// Formats whole seconds as "1h 2m 3s", skipping zero parts.
pub fn time_text(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{}s", seconds));
    }
    parts.join(" ")
}
