//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output leads with the semantic identity of each entity, the seed and
//! its positional index, with file paths shown after a `→` as secondary
//! context:
//!
//! ```text
//! Rendering 3 icons
//!     001 alice → icons/001-alice.svg
//!     002 bob → icons/002-bob.svg
//!     003 carol → icons/003-carol.svg
//! Rendered 3 icons
//! ```
//!
//! # Architecture
//!
//! Each display has a `format_*` function (returns lines) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::batch::{BatchEvent, BatchOutcome};
use crate::color::Palette;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

// ============================================================================
// Palette output
// ============================================================================

/// Display labels for the 5 palette slots, in slot order.
const SLOT_LABELS: [&str; 5] = ["gray-dark", "mid", "gray-light", "light", "dark"];

/// Format a palette as one `label: #hex` line per slot.
pub fn format_palette(palette: &Palette) -> Vec<String> {
    SLOT_LABELS
        .iter()
        .zip(palette.colors())
        .map(|(label, color)| format!("{}: {}", label, color))
        .collect()
}

/// Print palette lines to stdout.
pub fn print_palette(palette: &Palette) {
    for line in format_palette(palette) {
        println!("{}", line);
    }
}

// ============================================================================
// Batch output
// ============================================================================

/// Format a single batch progress event as display lines.
pub fn format_batch_event(event: &BatchEvent) -> Vec<String> {
    match event {
        BatchEvent::Started { total } => {
            vec![format!("Rendering {} icons", total)]
        }
        BatchEvent::Rendered { index, seed, path } => {
            vec![format!(
                "    {} {} \u{2192} {}",
                format_index(index + 1),
                seed,
                path.display()
            )]
        }
        BatchEvent::Failed { index, seed, message } => {
            vec![format!(
                "    {} {} FAILED: {}",
                format_index(index + 1),
                seed,
                message
            )]
        }
    }
}

/// Print a batch event to stdout.
pub fn print_batch_event(event: &BatchEvent) {
    for line in format_batch_event(event) {
        println!("{}", line);
    }
}

/// Format the final batch summary line.
pub fn format_batch_summary(outcome: &BatchOutcome) -> String {
    if outcome.failed == 0 {
        format!("Rendered {} icons", outcome.rendered)
    } else {
        format!("Rendered {} icons, {} failed", outcome.rendered, outcome.failed)
    }
}

/// Print the batch summary to stdout.
pub fn print_batch_summary(outcome: &BatchOutcome) {
    println!("{}", format_batch_summary(outcome));
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn format_index_zero_pads_to_three_digits() {
        assert_eq!(format_index(7), "007");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(365), "365");
    }

    #[test]
    fn format_index_grows_past_three_digits() {
        assert_eq!(format_index(1000), "1000");
    }

    // =========================================================================
    // Palette formatting tests
    // =========================================================================

    #[test]
    fn palette_lines_are_labelled_in_slot_order() {
        let lines = format_palette(&Palette::derive(0.0, 0.5));
        assert_eq!(
            lines,
            vec![
                "gray-dark: #4c4c4c",
                "mid: #d17575",
                "gray-light: #e5e5e5",
                "light: #e8baba",
                "dark: #a83838",
            ]
        );
    }

    #[test]
    fn zero_saturation_palette_prints_grays() {
        let lines = format_palette(&Palette::derive(0.25, 0.0));
        for line in &lines {
            let hex = line.split(": ").nth(1).unwrap();
            let (r, g, b) = (&hex[1..3], &hex[3..5], &hex[5..7]);
            assert_eq!(r, g, "{line}");
            assert_eq!(g, b, "{line}");
        }
    }

    // =========================================================================
    // Batch event formatting tests
    // =========================================================================

    #[test]
    fn format_batch_started() {
        let event = BatchEvent::Started { total: 5 };
        assert_eq!(format_batch_event(&event), vec!["Rendering 5 icons"]);
    }

    #[test]
    fn format_batch_rendered() {
        let event = BatchEvent::Rendered {
            index: 0,
            seed: "alice".to_string(),
            path: PathBuf::from("icons/001-alice.svg"),
        };
        assert_eq!(
            format_batch_event(&event),
            vec!["    001 alice \u{2192} icons/001-alice.svg"]
        );
    }

    #[test]
    fn format_batch_failed() {
        let event = BatchEvent::Failed {
            index: 11,
            seed: "bob".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            format_batch_event(&event),
            vec!["    012 bob FAILED: permission denied"]
        );
    }

    #[test]
    fn summary_without_failures() {
        let outcome = BatchOutcome {
            rendered: 3,
            failed: 0,
        };
        assert_eq!(format_batch_summary(&outcome), "Rendered 3 icons");
    }

    #[test]
    fn summary_with_failures() {
        let outcome = BatchOutcome {
            rendered: 2,
            failed: 1,
        };
        assert_eq!(format_batch_summary(&outcome), "Rendered 2 icons, 1 failed");
    }
}
