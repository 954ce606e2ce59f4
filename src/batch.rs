//! Batch rendering of seed lists.
//!
//! Takes a text file with one seed per line and renders every seed to
//! an SVG file in an output directory. Rendering is parallelized with
//! [rayon](https://docs.rs/rayon); progress is reported through an
//! optional event channel so the caller owns all printing.
//!
//! ## Seed File Format
//!
//! ```text
//! # team avatars
//! alice
//! bob@example.com
//!
//! carol
//! ```
//!
//! Lines are trimmed. Blank lines and lines starting with `#` are
//! skipped.
//!
//! ## Output Naming
//!
//! Files are named `NNN-slug.svg`: a 1-based zero-padded position
//! followed by a filesystem-safe slug of the seed. The position prefix
//! keeps names unique even when two seeds slug identically.
//!
//! ```text
//! icons/
//! ├── 001-alice.svg
//! ├── 002-bob-example.com.svg
//! └── 003-carol.svg
//! ```

use crate::icon::{IconError, IconStyle};
use crate::svg;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid style: {0}")]
    Icon(#[from] IconError),
}

/// Progress events emitted during a batch run.
///
/// `Rendered` and `Failed` arrive in completion order, not seed order,
/// because workers run in parallel.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchEvent {
    Started { total: usize },
    Rendered { index: usize, seed: String, path: PathBuf },
    Failed { index: usize, seed: String, message: String },
}

/// Final tally of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BatchOutcome {
    pub rendered: usize,
    pub failed: usize,
}

/// Extract seeds from the text of a seed file.
///
/// Lines are trimmed; blank lines and `#` comment lines are dropped.
/// A `#` later in a line is part of the seed, not a comment.
pub fn parse_seed_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Reduce a seed to a filesystem-safe file name fragment.
///
/// ASCII alphanumerics and `.`, `_`, `-` pass through; every other
/// character becomes `-`. The result is capped at 64 characters. An
/// empty seed slugs to `"seed"` so the file name never collapses to
/// the bare position prefix.
pub fn seed_slug(seed: &str) -> String {
    let slug: String = seed
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '-'
            }
        })
        .take(64)
        .collect();
    if slug.is_empty() {
        "seed".to_string()
    } else {
        slug
    }
}

/// Output file name for the seed at 0-based position `index`.
pub fn output_file_name(index: usize, seed: &str) -> String {
    format!("{:0>3}-{}.svg", index + 1, seed_slug(seed))
}

/// Render every seed in `seed_file` to an SVG under `out_dir`.
///
/// The style is validated once up front; after that a failing seed
/// (an I/O error writing its file) is reported through the channel and
/// counted, and the rest of the batch keeps going.
pub fn run(
    seed_file: &Path,
    out_dir: &Path,
    style: &IconStyle,
    events: Option<Sender<BatchEvent>>,
) -> Result<BatchOutcome, BatchError> {
    style.validate()?;

    let content = fs::read_to_string(seed_file)?;
    let seeds = parse_seed_lines(&content);
    fs::create_dir_all(out_dir)?;

    if let Some(tx) = &events {
        let _ = tx.send(BatchEvent::Started { total: seeds.len() });
    }

    let failures: usize = seeds
        .par_iter()
        .enumerate()
        .map(|(index, seed)| {
            let path = out_dir.join(output_file_name(index, seed));
            match render_seed(seed, style, &path) {
                Ok(()) => {
                    if let Some(tx) = &events {
                        let _ = tx.send(BatchEvent::Rendered {
                            index,
                            seed: seed.clone(),
                            path,
                        });
                    }
                    0
                }
                Err(err) => {
                    if let Some(tx) = &events {
                        let _ = tx.send(BatchEvent::Failed {
                            index,
                            seed: seed.clone(),
                            message: err.to_string(),
                        });
                    }
                    1
                }
            }
        })
        .sum();

    Ok(BatchOutcome {
        rendered: seeds.len() - failures,
        failed: failures,
    })
}

// Style is pre-validated, so the only failure left is the write.
fn render_seed(seed: &str, style: &IconStyle, path: &Path) -> Result<(), std::io::Error> {
    let document = svg::to_svg_styled(seed, style)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    fs::write(path, document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use tempfile::TempDir;

    fn default_style() -> IconStyle {
        IconStyle {
            size: 100,
            padding: 0.08,
            saturation: 0.5,
        }
    }

    // =========================================================================
    // Seed file parsing
    // =========================================================================

    #[test]
    fn parse_skips_blanks_and_comments() {
        let content = "# team avatars\nalice\n\n  bob  \n# trailing comment\ncarol\n";
        assert_eq!(parse_seed_lines(content), vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn parse_keeps_inner_hash() {
        assert_eq!(parse_seed_lines("issue#42\n"), vec!["issue#42"]);
    }

    #[test]
    fn parse_empty_file_yields_no_seeds() {
        assert!(parse_seed_lines("").is_empty());
        assert!(parse_seed_lines("\n\n# only comments\n").is_empty());
    }

    // =========================================================================
    // Slugs and file names
    // =========================================================================

    #[test]
    fn slug_passes_safe_characters_through() {
        assert_eq!(seed_slug("alice"), "alice");
        assert_eq!(seed_slug("v1.2_rc-3"), "v1.2_rc-3");
    }

    #[test]
    fn slug_replaces_unsafe_characters() {
        assert_eq!(seed_slug("bob@example.com"), "bob-example.com");
        assert_eq!(seed_slug("two words"), "two-words");
        assert_eq!(seed_slug("päivä"), "p-iv-");
    }

    #[test]
    fn slug_is_capped_at_64_characters() {
        let long = "x".repeat(200);
        assert_eq!(seed_slug(&long).len(), 64);
    }

    #[test]
    fn slug_of_empty_seed_is_placeholder() {
        assert_eq!(seed_slug(""), "seed");
    }

    #[test]
    fn file_names_are_position_prefixed() {
        assert_eq!(output_file_name(0, "alice"), "001-alice.svg");
        assert_eq!(output_file_name(11, "bob"), "012-bob.svg");
        assert_eq!(output_file_name(999, "carol"), "1000-carol.svg");
    }

    // =========================================================================
    // Batch runs
    // =========================================================================

    #[test]
    fn run_renders_every_seed() {
        let tmp = TempDir::new().unwrap();
        let seed_file = tmp.path().join("seeds.txt");
        let out_dir = tmp.path().join("icons");
        fs::write(&seed_file, "alice\nbob\n# skip me\ncarol\n").unwrap();

        let outcome = run(&seed_file, &out_dir, &default_style(), None).unwrap();

        assert_eq!(outcome, BatchOutcome { rendered: 3, failed: 0 });
        for name in ["001-alice.svg", "002-bob.svg", "003-carol.svg"] {
            assert!(out_dir.join(name).exists(), "missing {name}");
        }
    }

    #[test]
    fn run_writes_the_same_bytes_as_direct_rendering() {
        let tmp = TempDir::new().unwrap();
        let seed_file = tmp.path().join("seeds.txt");
        let out_dir = tmp.path().join("icons");
        fs::write(&seed_file, "alice\n").unwrap();
        let style = default_style();

        run(&seed_file, &out_dir, &style, None).unwrap();

        let written = fs::read_to_string(out_dir.join("001-alice.svg")).unwrap();
        assert_eq!(written, svg::to_svg_styled("alice", &style).unwrap());
    }

    #[test]
    fn run_reports_progress_events() {
        let tmp = TempDir::new().unwrap();
        let seed_file = tmp.path().join("seeds.txt");
        let out_dir = tmp.path().join("icons");
        fs::write(&seed_file, "alice\nbob\n").unwrap();

        let (tx, rx) = mpsc::channel();
        run(&seed_file, &out_dir, &default_style(), Some(tx)).unwrap();

        let events: Vec<BatchEvent> = rx.iter().collect();
        assert_eq!(events[0], BatchEvent::Started { total: 2 });
        let mut rendered: Vec<usize> = events[1..]
            .iter()
            .map(|e| match e {
                BatchEvent::Rendered { index, .. } => *index,
                other => panic!("unexpected event {other:?}"),
            })
            .collect();
        rendered.sort_unstable();
        assert_eq!(rendered, vec![0, 1]);
    }

    #[test]
    fn run_allows_duplicate_seeds() {
        let tmp = TempDir::new().unwrap();
        let seed_file = tmp.path().join("seeds.txt");
        let out_dir = tmp.path().join("icons");
        fs::write(&seed_file, "alice\nalice\n").unwrap();

        let outcome = run(&seed_file, &out_dir, &default_style(), None).unwrap();

        assert_eq!(outcome.rendered, 2);
        let a = fs::read_to_string(out_dir.join("001-alice.svg")).unwrap();
        let b = fs::read_to_string(out_dir.join("002-alice.svg")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn run_with_missing_seed_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = run(
            &tmp.path().join("nope.txt"),
            &tmp.path().join("icons"),
            &default_style(),
            None,
        );
        assert!(matches!(result, Err(BatchError::Io(_))));
    }

    #[test]
    fn run_rejects_invalid_style_up_front() {
        let tmp = TempDir::new().unwrap();
        let seed_file = tmp.path().join("seeds.txt");
        fs::write(&seed_file, "alice\n").unwrap();
        let style = IconStyle {
            size: 0,
            padding: 0.0,
            saturation: 0.5,
        };

        let result = run(&seed_file, &tmp.path().join("icons"), &style, None);
        assert!(matches!(result, Err(BatchError::Icon(_))));
    }

    #[test]
    fn run_with_empty_seed_file_renders_nothing() {
        let tmp = TempDir::new().unwrap();
        let seed_file = tmp.path().join("seeds.txt");
        let out_dir = tmp.path().join("icons");
        fs::write(&seed_file, "# no seeds here\n").unwrap();

        let outcome = run(&seed_file, &out_dir, &default_style(), None).unwrap();

        assert_eq!(outcome, BatchOutcome::default());
        assert!(out_dir.exists());
        assert_eq!(fs::read_dir(&out_dir).unwrap().count(), 0);
    }
}
