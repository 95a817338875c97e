//! CLI binary for marktidy.
//!
//! A thin shim over the library crate that maps CLI flags to
//! [`TidyOptions`] and prints the transformed text.

use anyhow::{Context, Result};
use clap::Parser;
use marktidy::{transform_file, transform_with_stats, TidyOptions, TidyStats};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Default cleanup (collapse list blanks, drop images, repair bold spacing)
  marktidy notes.md

  # Read stdin, write a file
  pbpaste | marktidy - -o tidy.md

  # Number headings and demote everything one level
  marktidy --number-headings --shift 1 notes.md

  # Outline only
  marktidy --extract-headings notes.md

  # Strip every marker, keep the text
  marktidy --clear-formatting notes.md

  # Identity pass plus one toggle
  marktidy --no-collapse-list-blanks --no-remove-images \
           --no-fix-bold-spacing --remove-links notes.md

  # Load a saved option set, emit structured JSON
  marktidy --options opts.json --json notes.md

STAGE ORDER (fixed; toggles only select which stages run):
  extract-headings → collapse-list-blanks → remove-bold → remove-links →
  remove-images → remove-strikethrough → fix-bold-spacing →
  remove-horizontal-rules → shift → remove-plain-text → number-headings →
  clear-formatting

Fenced code blocks (``` … ```) are never rewritten by the structural
stages.
"#;

/// Clean up Markdown text with a deterministic transform pipeline.
#[derive(Parser, Debug)]
#[command(
    name = "marktidy",
    version,
    about = "Clean up Markdown text with a deterministic transform pipeline",
    long_about = "Apply a fixed pipeline of composable Markdown cleanup stages: heading \
shifting and numbering, list blank-line collapsing, bold-spacing repair, link/image/bold/\
strikethrough stripping, heading extraction, and full formatting removal. Fenced code \
blocks are left untouched.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Input Markdown file, or '-' for stdin.
    input: String,

    /// Write output to this file instead of stdout.
    #[arg(short, long, env = "MARKTIDY_OUTPUT")]
    output: Option<PathBuf>,

    /// Load a serialized TidyOptions JSON file as the base option set
    /// (explicit flags below still override it).
    #[arg(long, env = "MARKTIDY_OPTIONS")]
    options: Option<PathBuf>,

    /// Strip all formatting, keeping the readable text (runs last).
    #[arg(long)]
    clear_formatting: bool,

    /// Replace [text](url) with text.
    #[arg(long)]
    remove_links: bool,

    /// Replace **text** with text.
    #[arg(long)]
    remove_bold: bool,

    /// Replace ~~text~~ with text.
    #[arg(long)]
    remove_strikethrough: bool,

    /// Delete horizontal-rule lines (---, ***, ___).
    #[arg(long)]
    remove_horizontal_rules: bool,

    /// Keep only heading lines.
    #[arg(long)]
    extract_headings: bool,

    /// Keep only structural lines (headings, lists, rules, blanks).
    #[arg(long)]
    remove_plain_text: bool,

    /// Number level 2-6 headings hierarchically (1., 1.1., 2. ...).
    #[arg(long)]
    number_headings: bool,

    /// Shift heading levels by N steps (clamped to 1-6 per step).
    #[arg(long, allow_hyphen_values = true, value_parser = clap::value_parser!(i8).range(-3..=3))]
    shift: Option<i8>,

    /// Keep blank lines between list items (disables a default-on stage).
    #[arg(long)]
    no_collapse_list_blanks: bool,

    /// Keep image links (disables a default-on stage).
    #[arg(long)]
    no_remove_images: bool,

    /// Leave bold spacing as-is (disables a default-on stage).
    #[arg(long)]
    no_fix_bold_spacing: bool,

    /// Output structured JSON (text + stats + effective options).
    #[arg(long, env = "MARKTIDY_JSON")]
    json: bool,

    /// Enable DEBUG-level tracing logs (per-stage).
    #[arg(short, long, env = "MARKTIDY_VERBOSE")]
    verbose: bool,

    /// Suppress the summary line on stderr.
    #[arg(short, long, env = "MARKTIDY_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let options = build_options(&cli)?;

    // ── File-to-file fast path (atomic write lives in the library) ──────
    if let (false, Some(output_path)) = (cli.input == "-" || cli.json, &cli.output) {
        let stats = transform_file(&cli.input, output_path, &options)
            .with_context(|| format!("Failed to tidy '{}'", cli.input))?;
        if !cli.quiet {
            print_summary(&stats, Some(output_path));
        }
        return Ok(());
    }

    // ── In-memory path (stdin and/or JSON output) ───────────────────────
    let input = read_input(&cli.input)?;
    let output = transform_with_stats(&input, &options);

    if cli.json {
        #[derive(serde::Serialize)]
        struct JsonReport<'a> {
            text: &'a str,
            stats: &'a TidyStats,
            options: &'a TidyOptions,
        }
        let report = JsonReport {
            text: &output.text,
            stats: &output.stats,
            options: &options,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialise output")?
        );
        return Ok(());
    }

    if let Some(ref output_path) = cli.output {
        std::fs::write(output_path, &output.text)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(output.text.as_bytes())
            .context("Failed to write to stdout")?;
        // Ensure a trailing newline on stdout.
        if !output.text.ends_with('\n') {
            handle.write_all(b"\n").ok();
        }
    }

    if !cli.quiet {
        print_summary(&output.stats, cli.output.as_deref());
    }

    Ok(())
}

/// Map CLI flags onto a `TidyOptions`, starting from `--options` or the
/// defaults.
fn build_options(cli: &Cli) -> Result<TidyOptions> {
    let mut options = if let Some(ref path) = cli.options {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read options from {}", path.display()))?;
        let options: TidyOptions = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid options JSON in {}", path.display()))?;
        // Serde accepts any i8 shift; enforce the builder's range here.
        options
            .validate()
            .with_context(|| format!("Invalid options in {}", path.display()))?;
        options
    } else {
        TidyOptions::default()
    };

    // Positive flags switch stages on; --no-* flags switch the default-on
    // stages off. Absent flags leave the base untouched.
    options.clear_formatting |= cli.clear_formatting;
    options.remove_links |= cli.remove_links;
    options.remove_bold |= cli.remove_bold;
    options.remove_strikethrough |= cli.remove_strikethrough;
    options.remove_horizontal_rules |= cli.remove_horizontal_rules;
    options.extract_headings_only |= cli.extract_headings;
    options.remove_plain_text |= cli.remove_plain_text;
    options.number_headings |= cli.number_headings;
    if cli.no_collapse_list_blanks {
        options.collapse_list_blanks = false;
    }
    if cli.no_remove_images {
        options.remove_images = false;
    }
    if cli.no_fix_bold_spacing {
        options.fix_bold_spacing = false;
    }
    if let Some(shift) = cli.shift {
        options.heading_shift = shift;
    }

    Ok(options)
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read '{input}'"))
    }
}

fn print_summary(stats: &TidyStats, output_path: Option<&std::path::Path>) {
    let target = output_path
        .map(|p| format!("  →  {}", bold(&p.display().to_string())))
        .unwrap_or_default();
    eprintln!(
        "{}  {} → {} lines  {} stages  {}{}",
        green("✔"),
        stats.input_lines,
        stats.output_lines,
        stats.stages_applied,
        dim(&format!("{}ms", stats.duration_ms)),
        target,
    );
}
