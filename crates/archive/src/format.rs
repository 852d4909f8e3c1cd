//! Display formatting helpers.

/// Base-1024 units for [`human_readable_size`].
const SIZE_UNITS: &[&str] = &["Bytes", "KB", "MB", "GB"];

/// Formats a byte count with base-1024 units and at most two decimal
/// places, trailing zeros trimmed.
///
/// Sizes beyond the last unit stay in that unit (`2048 GB`, not `2 TB`).
pub fn human_readable_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}
