//! Formatting utilities for file sizes and counts.

/// SI unit prefixes used by [`format_size`].
const SI_UNITS: [&str; 8] = ["kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count with SI units (e.g., "512 B", "1.5 kB", "3.4 GB").
pub fn format_size(bytes: u64) -> String {
    const THRESHOLD: f64 = 1000.0;

    if bytes < 1000 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    loop {
        value /= THRESHOLD;
        // Compare the displayed (rounded) value so 999_950 B is "1.0 MB".
        let shown = (value * 10.0).round() / 10.0;
        if shown < THRESHOLD || unit == SI_UNITS.len() - 1 {
            break;
        }
        unit += 1;
    }
    format!("{:.1} {}", value, SI_UNITS[unit])
}

/// Heading of a listing ("1 file found", "12 files found").
pub fn format_found(count: u64) -> String {
    if count == 1 {
        "1 file found".to_string()
    } else {
        format!("{} files found", count)
    }
}
