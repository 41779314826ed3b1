//! Formatting utilities for terminal output

/// Render letters as tiles, padding the empty slots of the board
///
/// # Examples
/// ```
/// use countdown_letters::output::formatters::letter_tiles;
///
/// assert_eq!(letter_tiles("TEN", 5), "[T][E][N][ ][ ]");
/// ```
#[must_use]
pub fn letter_tiles(letters: &str, slots: usize) -> String {
    let drawn = letters.chars().count();
    let mut result = String::with_capacity(slots.max(drawn) * 3);

    for ch in letters.chars() {
        result.push('[');
        result.push(ch.to_ascii_uppercase());
        result.push(']');
    }
    for _ in drawn..slots {
        result.push_str("[ ]");
    }

    result
}

/// Round marker such as "●●○○" for round 2 of 4
#[must_use]
pub fn round_track(round: u8, max_rounds: u8) -> String {
    let played = round.min(max_rounds) as usize;
    format!(
        "{}{}",
        "●".repeat(played),
        "○".repeat(max_rounds as usize - played)
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
