use clap::{Parser, Subcommand};
use hexicon::color::Palette;
use hexicon::digest::Digest;
use hexicon::{batch, config, output, svg, trace};
use std::path::PathBuf;

/// Shared flags for commands that render icons.
#[derive(clap::Args, Clone, Copy)]
struct StyleArgs {
    /// Canvas edge in pixels
    #[arg(long)]
    size: Option<u32>,

    /// Blank fraction per edge, 0.0 (none) up to but not including 1.0
    #[arg(long)]
    padding: Option<f32>,

    /// Palette saturation, 0.0 (grayscale) to 1.0
    #[arg(long)]
    saturation: Option<f32>,
}

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "hexicon")]
#[command(about = "Deterministic identicon engine with byte-exact SVG output")]
#[command(long_about = "\
Deterministic identicon engine with byte-exact SVG output

A seed (any string) is normalized to a hex digest, and every visual
decision (colors, shapes, rotations) is read from fixed digit positions
of that digest. The same seed always renders the same bytes, on every
platform and in every release.

Icon anatomy (4x4 cell grid):

  ┌────┬────┬────┬────┐
  │ co │ si │ si │ co │     co  corner cells (one shape, 4 cells)
  ├────┼────┼────┼────┤     si  side cells   (one shape, 8 cells)
  │ si │ ce │ ce │ si │     ce  center cells (one shape, 4 cells)
  ├────┼────┼────┼────┤
  │ si │ ce │ ce │ si │     Shapes rotate as they march around their
  ├────┼────┼────┼────┤     region; colors come from a 5-slot palette
  │ co │ si │ si │ co │     derived from the digest's hue.
  └────┴────┴────┴────┘

Seeds that already look like a hex digest (11+ hex chars) are used
as-is; everything else is hashed with SHA-1 first.

Run 'hexicon gen-config' to generate a documented hexicon.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Directory containing hexicon.toml
    #[arg(long, default_value = ".", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one seed to SVG (stdout, or --out FILE)
    Render {
        /// Seed string to render
        seed: String,
        /// Write the SVG here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Render every seed in a file, in parallel
    Batch {
        /// Text file with one seed per line (# comments, blanks skipped)
        seed_file: PathBuf,
        /// Output directory for the SVG files
        #[arg(long, default_value = "icons")]
        out_dir: PathBuf,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Print the draw-op stream for a seed as JSON
    Trace {
        /// Seed string to trace
        seed: String,
        #[command(flatten)]
        style: StyleArgs,
    },
    /// Print the 5-color palette derived from a seed
    Palette {
        /// Seed string to derive from
        seed: String,
        /// Palette saturation, 0.0 (grayscale) to 1.0
        #[arg(long)]
        saturation: Option<f32>,
    },
    /// Print the canonical digest for a seed
    Digest {
        /// Seed string to normalize
        seed: String,
    },
    /// Print a stock hexicon.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render { seed, out, style } => {
            let tool = config::load_config(&cli.config)?;
            let style = resolve_style(tool, &style)?;
            let document = svg::to_svg_styled(&seed, &style)?;
            match out {
                Some(path) => std::fs::write(path, document)?,
                None => println!("{}", document),
            }
        }
        Command::Batch {
            seed_file,
            out_dir,
            style,
        } => {
            let tool = config::load_config(&cli.config)?;
            let icon_style = resolve_style(tool.clone(), &style)?;
            init_thread_pool(&tool.batch);
            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    for line in output::format_batch_event(&event) {
                        println!("{}", line);
                    }
                }
            });
            let outcome = batch::run(&seed_file, &out_dir, &icon_style, Some(tx))?;
            printer.join().unwrap();
            output::print_batch_summary(&outcome);
        }
        Command::Trace { seed, style } => {
            let tool = config::load_config(&cli.config)?;
            let style = resolve_style(tool, &style)?;
            let ops = trace::trace_styled(&seed, &style)?;
            println!("{}", serde_json::to_string_pretty(&ops)?);
        }
        Command::Palette { seed, saturation } => {
            let tool = config::load_config(&cli.config)?;
            let style = resolve_style(
                tool,
                &StyleArgs {
                    size: None,
                    padding: None,
                    saturation,
                },
            )?;
            let digest = Digest::from_seed(&seed);
            let palette = Palette::derive(digest.hue_fraction(), style.saturation);
            output::print_palette(&palette);
        }
        Command::Digest { seed } => {
            println!("{}", Digest::from_seed(&seed));
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Apply command-line overrides to the configured render settings and
/// re-validate, so a bad flag fails the same way a bad config file does.
fn resolve_style(
    mut tool: config::ToolConfig,
    args: &StyleArgs,
) -> Result<hexicon::icon::IconStyle, config::ConfigError> {
    if let Some(size) = args.size {
        tool.render.size = size;
    }
    if let Some(padding) = args.padding {
        tool.render.padding = padding;
    }
    if let Some(saturation) = args.saturation {
        tool.render.saturation = saturation;
    }
    tool.validate()?;
    Ok(tool.render.style())
}

/// Initialize the rayon thread pool based on batch config.
///
/// Caps at the number of available CPU cores — user can constrain down, not up.
fn init_thread_pool(batch: &config::BatchConfig) {
    let threads = config::effective_threads(batch);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
