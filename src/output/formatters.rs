//! Formatting utilities for terminal output

/// Tries indicator: one filled dot per mistake, hollow dots for the rest
///
/// # Examples
/// ```
/// use word_scramble::output::formatters::tries_indicator;
///
/// assert_eq!(tries_indicator(2, 5), "●●○○○");
/// ```
#[must_use]
pub fn tries_indicator(mistakes: u32, limit: u32) -> String {
    let filled = mistakes.min(limit) as usize;
    format!(
        "{}{}",
        "●".repeat(filled),
        "○".repeat(limit as usize - filled)
    )
}

/// The "Tries (x/y)" label
#[must_use]
pub fn tries_label(mistakes: u32, limit: u32) -> String {
    format!("Tries ({mistakes}/{limit})")
}

/// Letters separated by spaces, for a roomier display
#[must_use]
pub fn spaced(word: &str) -> String {
    let mut result = String::with_capacity(word.len() * 2);
    for (i, ch) in word.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tries_indicator_empty_and_full() {
        assert_eq!(tries_indicator(0, 5), "○○○○○");
        assert_eq!(tries_indicator(5, 5), "●●●●●");
        assert_eq!(tries_indicator(9, 3), "●●●");
    }

    #[test]
    fn tries_label_format() {
        assert_eq!(tries_label(0, 5), "Tries (0/5)");
        assert_eq!(tries_label(3, 5), "Tries (3/5)");
    }

    #[test]
    fn spaced_letters() {
        assert_eq!(spaced("purple"), "p u r p l e");
        assert_eq!(spaced("a"), "a");
        assert_eq!(spaced(""), "");
        assert_eq!(spaced("..."), ". . .");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
