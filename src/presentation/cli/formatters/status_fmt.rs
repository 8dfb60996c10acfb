use colored::{ColoredString, Colorize};

use crate::domain::entities::summary::CategoryCounts;

/// Share of alert-worthy records in a region, in percent
#[must_use]
pub fn alert_share(counts: &CategoryCounts) -> f64 {
    if counts.total() == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let share = counts.alert_worthy() as f64 * 100.0 / counts.total() as f64;
    share
}

/// Bar filled in proportion to the alert share; red once the whole region
/// is alerting, yellow from half.
#[must_use]
pub fn health_bar(share_percent: f64, width: usize) -> String {
    let ratio = (share_percent / 100.0).clamp(0.0, 1.0);
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);

    let bar_filled = "█".repeat(filled);
    let bar_empty = "░".repeat(empty);

    let colored_bar = if share_percent >= 100.0 {
        bar_filled.red().bold()
    } else if share_percent >= 50.0 {
        bar_filled.yellow()
    } else {
        bar_filled.green()
    };

    format!("{colored_bar}{bar_empty}")
}

#[must_use]
pub fn colorize_share(share_percent: f64) -> ColoredString {
    let text = format!("{share_percent:.1}%");
    if share_percent >= 100.0 {
        text.red().bold()
    } else if share_percent >= 50.0 {
        text.yellow()
    } else {
        text.green()
    }
}

/// Strips ANSI/OSC escape sequences from a string to prevent terminal injection.
#[must_use]
pub fn sanitize_terminal(input: &str) -> String {
    input.chars().filter(|c| *c != '\x1b').collect()
}

pub fn print_section_header(title: &str) {
    println!("{}", title.bold().cyan());
    let display_width = title.chars().count();
    println!("{}", "─".repeat(display_width).cyan());
}

#[cfg(test)]
mod tests {
    use super::*;
    use colored::control;

    fn disable_colors() {
        control::set_override(false);
    }

    #[test]
    fn sanitize_strips_escape() {
        assert_eq!(sanitize_terminal("ab\x1b[31mc"), "ab[31mc");
    }

    #[test]
    fn share_of_empty_region_is_zero() {
        assert!(alert_share(&CategoryCounts::default()).abs() < f64::EPSILON);
    }

    #[test]
    fn share_counts_failed_and_long_running() {
        let counts = CategoryCounts {
            normal: 2,
            long_running: 1,
            failed: 1,
        };
        assert!((alert_share(&counts) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn health_bar_empty_when_all_normal() {
        disable_colors();
        assert_eq!(health_bar(0.0, 10), "░".repeat(10));
    }

    #[test]
    fn health_bar_full_when_region_down() {
        disable_colors();
        assert_eq!(health_bar(100.0, 10), "█".repeat(10));
    }

    #[test]
    fn health_bar_clamps_out_of_range() {
        disable_colors();
        assert_eq!(health_bar(250.0, 4), "████");
        assert_eq!(health_bar(-5.0, 4), "░░░░");
    }

    #[test]
    fn colorize_share_formats_one_decimal() {
        disable_colors();
        assert_eq!(colorize_share(33.333).to_string(), "33.3%");
    }
}
