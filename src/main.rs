// SPDX-License-Identifier: MIT
//
// swatch: a palette studio for the terminal.
//
// This is the binary that wires the crates together and plays the part of
// the UI layer:
//
//   swatch-color  → parsing user color text
//   swatch-engine → contrast checks, palette generation, history
//   swatch-export → hex text, JSON records, PNG swatches
//
// The engine owns no state. This shell owns the current palette, the lock
// mask and the history, supplies the randomness, and does all the I/O:
//
//   args ─► config ─► logger ─► subcommand ─► engine ─► stdout / file

mod config;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::{Builder, Env};
use log::{debug, info};

use swatch_color::parse_color;
use swatch_engine::{
    ColorPair, Compliance, ContrastResult, EntropySource, GenerationMode, LockMask, Palette,
    PaletteHistory, RandomSource, Xorshift32, complement, generate, presets, suggest_name,
};
use swatch_export::{Orientation, PaletteRecord, join_hex, render_png};

use crate::config::Config;

// ─── Command line ───────────────────────────────────────────────────────────

/// Color conversion, WCAG contrast checks and palette generation.
#[derive(Parser, Debug)]
#[command(name = "swatch", version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace (overrides config)
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a color as hex, rgb() and hsl()
    Convert {
        /// `#RGB`, `#RRGGBB` or `hsl(H, S%, L%)`
        color: String,
    },

    /// Check the contrast of a foreground on a background
    Contrast {
        fg: String,
        bg: String,

        /// Exchange foreground and background before checking
        #[arg(long)]
        swap: bool,

        /// Suggest a foreground that reads better, and re-check it
        #[arg(long)]
        fix: bool,
    },

    /// List the preset color pairs with their contrast
    Presets,

    /// Generate palettes, keeping locked slots between rounds
    Generate {
        #[command(flatten)]
        palette: PaletteArgs,

        /// Number of regenerations
        #[arg(long, default_value_t = 1)]
        rounds: usize,

        /// Slots to keep between rounds, e.g. `0,2`
        #[arg(long, value_delimiter = ',')]
        lock: Vec<usize>,

        /// After generating, restore this history entry (0 is the most recent)
        #[arg(long)]
        restore: Option<usize>,
    },

    /// Generate one palette and export it
    Export {
        #[command(flatten)]
        palette: PaletteArgs,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Output file (required for png)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Name stored in json records (default: a suggested name)
        #[arg(long)]
        name: Option<String>,

        /// Stack png blocks vertically instead of side by side
        #[arg(long)]
        vertical: bool,
    },
}

#[derive(clap::Args, Debug, Clone, Default)]
struct PaletteArgs {
    /// vibrant, pastel, monochrome, autumn, winter, spring or summer
    #[arg(short, long)]
    mode: Option<String>,

    /// Number of colors (overrides config)
    #[arg(short = 'n', long)]
    length: Option<usize>,

    /// Seed for reproducible palettes
    #[arg(long)]
    seed: Option<u32>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
    Png,
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::resolve(args.config.as_deref()).context("failed to load configuration")?;

    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    Builder::from_env(Env::default().default_filter_or(level)).init();
    debug!("configuration: {config:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(args.command, &config, &mut out)
}

fn run(command: Command, config: &Config, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Convert { color } => convert(&color, out),
        Command::Contrast { fg, bg, swap, fix } => contrast(&fg, &bg, swap, fix, out),
        Command::Presets => list_presets(out),
        Command::Generate {
            palette,
            rounds,
            lock,
            restore,
        } => {
            let mode = resolve_mode(palette.mode.as_deref(), config)?;
            let length = palette.length.unwrap_or(config.palette.length);
            let session = Session {
                mode,
                length,
                rounds,
                locks: &lock,
                restore,
                history_capacity: config.palette.history_capacity,
            };
            match palette.seed {
                Some(seed) => session.run(&mut Xorshift32::new(seed), out),
                None => session.run(&mut EntropySource::from_entropy(), out),
            }
        }
        Command::Export {
            palette,
            format,
            out: path,
            name,
            vertical,
        } => {
            let mode = resolve_mode(palette.mode.as_deref(), config)?;
            let length = palette.length.unwrap_or(config.palette.length);
            let request = ExportRequest {
                mode,
                length,
                format,
                path: path.as_deref(),
                name,
                vertical,
            };
            match palette.seed {
                Some(seed) => request.run(config, &mut Xorshift32::new(seed), out),
                None => request.run(config, &mut EntropySource::from_entropy(), out),
            }
        }
    }
}

fn resolve_mode(flag: Option<&str>, config: &Config) -> Result<GenerationMode> {
    match flag {
        Some(name) => GenerationMode::from_name(name).with_context(|| {
            let known: Vec<_> = GenerationMode::all().iter().map(|m| m.name()).collect();
            format!("unknown mode {name:?} (expected one of: {})", known.join(", "))
        }),
        None => Ok(config.mode()),
    }
}

// ─── convert / contrast / presets ───────────────────────────────────────────

fn convert(text: &str, out: &mut impl Write) -> Result<()> {
    let color = parse_color(text)?;
    writeln!(out, "{}", color.to_hex())?;
    writeln!(out, "{}", color.to_rgb())?;
    writeln!(out, "{}", color.to_hsl())?;
    writeln!(out, "complement {}", complement(color))?;
    Ok(())
}

fn contrast(fg: &str, bg: &str, swap: bool, fix: bool, out: &mut impl Write) -> Result<()> {
    let fg = parse_color(fg).context("foreground")?;
    let bg = parse_color(bg).context("background")?;
    let mut pair = ColorPair::new(fg, bg);
    if swap {
        pair = pair.swapped();
    }
    write_check(out, &pair)?;

    if fix {
        if pair.contrast().compliance.aa_normal {
            writeln!(out, "already readable, nothing to fix")?;
        } else {
            let fixed = pair.improved();
            writeln!(out, "suggested foreground {}", fixed.fg)?;
            write_check(out, &fixed)?;
        }
    }
    Ok(())
}

fn list_presets(out: &mut impl Write) -> Result<()> {
    for preset in presets() {
        let result = preset.pair.contrast();
        writeln!(
            out,
            "{:<24} {} on {}  {:>8}  {}",
            preset.name,
            preset.pair.fg,
            preset.pair.bg,
            result.to_string(),
            badges(result.compliance)
        )?;
    }
    Ok(())
}

fn write_check(out: &mut impl Write, pair: &ColorPair) -> io::Result<()> {
    let result: ContrastResult = pair.contrast();
    writeln!(out, "{} on {}: {}  {}", pair.fg, pair.bg, result, badges(result.compliance))
}

fn badges(c: Compliance) -> String {
    let mark = |ok: bool| if ok { "pass" } else { "fail" };
    format!(
        "AA-large {}  AA {}  AAA {}",
        mark(c.aa_large),
        mark(c.aa_normal),
        mark(c.aaa)
    )
}

// ─── generate ───────────────────────────────────────────────────────────────

/// One `generate` invocation: a sequence of regenerations that threads the
/// previous palette and lock mask through the engine and records each
/// replaced palette in history.
struct Session<'a> {
    mode: GenerationMode,
    length: usize,
    rounds: usize,
    locks: &'a [usize],
    restore: Option<usize>,
    history_capacity: usize,
}

impl Session<'_> {
    fn run(&self, rng: &mut impl RandomSource, out: &mut impl Write) -> Result<()> {
        if self.rounds == 0 {
            bail!("--rounds must be at least 1");
        }

        let mut mask = LockMask::unlocked(self.length);
        for &slot in self.locks {
            mask = mask.toggled(slot).context("invalid --lock")?;
        }

        let mut history = PaletteHistory::new(self.history_capacity);
        let mut current: Option<Palette> = None;
        for round in 1..=self.rounds {
            let next = generate(current.as_ref(), &mask, self.mode, self.length, rng)?;
            if let Some(previous) = current.replace(next) {
                history.push(previous);
            }
            if let Some(palette) = &current {
                let name = suggest_name(self.mode, rng);
                writeln!(out, "{round:>3}. {name}")?;
                writeln!(out, "     {}", slots(palette))?;
            }
        }
        info!("generated {} palettes, {} in history", self.rounds, history.len());

        if let Some(index) = self.restore {
            let restored = history.restore(index).context("invalid --restore")?;
            writeln!(out, "restored history entry {index}")?;
            writeln!(out, "     {}", slots(&restored))?;
        }
        Ok(())
    }
}

/// `#AABBCC #DDEEFF*`: locked slots are starred.
fn slots(palette: &Palette) -> String {
    palette
        .colors()
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if palette.locks().is_locked(i) {
                format!("{c}*")
            } else {
                c.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ─── export ─────────────────────────────────────────────────────────────────

struct ExportRequest<'a> {
    mode: GenerationMode,
    length: usize,
    format: Format,
    path: Option<&'a Path>,
    name: Option<String>,
    vertical: bool,
}

impl ExportRequest<'_> {
    fn run(self, config: &Config, rng: &mut impl RandomSource, out: &mut impl Write) -> Result<()> {
        let mask = LockMask::unlocked(self.length);
        let palette = generate(None, &mask, self.mode, self.length, rng)?;

        let payload = match self.format {
            Format::Text => {
                let mut text = join_hex(palette.colors(), config.export.separator);
                text.push('\n');
                text.into_bytes()
            }
            Format::Json => {
                let name = self.name.unwrap_or_else(|| suggest_name(self.mode, rng));
                let mut json = PaletteRecord::from_palette(name, &palette).to_json()?;
                json.push('\n');
                json.into_bytes()
            }
            Format::Png => {
                if self.path.is_none() {
                    bail!("png export needs --out <file>");
                }
                let orientation = if self.vertical {
                    Orientation::Vertical
                } else {
                    Orientation::Horizontal
                };
                render_png(palette.colors(), config.raster_layout(orientation))?
            }
        };

        match self.path {
            Some(path) => {
                fs::write(path, &payload)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!("wrote {} bytes to {}", payload.len(), path.display());
            }
            None => out.write_all(&payload)?,
        }
        Ok(())
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_to_string(command: Command) -> Result<String> {
        let mut buf = Vec::new();
        run(command, &Config::default(), &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    fn seeded(mode: &str, length: usize, seed: u32) -> PaletteArgs {
        PaletteArgs {
            mode: Some(mode.to_string()),
            length: Some(length),
            seed: Some(seed),
        }
    }

    // ── Argument parsing ─────────────────────────────────────────────────

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn lock_list_is_comma_separated() {
        let args =
            Args::try_parse_from(["swatch", "generate", "--lock", "0,2", "--rounds", "3"]).unwrap();
        match args.command {
            Command::Generate { lock, rounds, .. } => {
                assert_eq!(lock, vec![0, 2]);
                assert_eq!(rounds, 3);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    // ── convert / contrast ───────────────────────────────────────────────

    #[test]
    fn convert_prints_every_spelling() {
        let text = run_to_string(Command::Convert {
            color: "hsl(0, 100%, 50%)".into(),
        })
        .unwrap();
        assert_eq!(
            text,
            "#FF0000\nrgb(255, 0, 0)\nhsl(0, 100%, 50%)\ncomplement #00FFFF\n"
        );
    }

    #[test]
    fn convert_rejects_bad_text() {
        assert!(run_to_string(Command::Convert { color: "red".into() }).is_err());
    }

    #[test]
    fn contrast_reports_ratio_and_levels() {
        let text = run_to_string(Command::Contrast {
            fg: "#000".into(),
            bg: "#FFF".into(),
            swap: false,
            fix: false,
        })
        .unwrap();
        assert_eq!(text, "#000000 on #FFFFFF: 21.00:1  AA-large pass  AA pass  AAA pass\n");
    }

    #[test]
    fn contrast_fix_rechecks_the_suggestion() {
        let text = run_to_string(Command::Contrast {
            fg: "#777777".into(),
            bg: "#888888".into(),
            swap: false,
            fix: true,
        })
        .unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("AA fail"), "{text}");
        // The darker foreground snaps to white.
        assert_eq!(lines[1], "suggested foreground #FFFFFF");
        assert!(lines[2].starts_with("#FFFFFF on #888888"), "{text}");
    }

    #[test]
    fn contrast_fix_follows_the_displayed_verdict() {
        // 4.4999:1 displays as 4.50:1 and passes AA, so there is nothing to fix.
        let text = run_to_string(Command::Contrast {
            fg: "#008580".into(),
            bg: "#FFFFFF".into(),
            swap: false,
            fix: true,
        })
        .unwrap();
        assert_eq!(
            text,
            "#008580 on #FFFFFF: 4.50:1  AA-large pass  AA pass  AAA fail\n\
             already readable, nothing to fix\n"
        );
    }

    #[test]
    fn contrast_swap_exchanges_colors() {
        let text = run_to_string(Command::Contrast {
            fg: "#0057B7".into(),
            bg: "#FFFFFF".into(),
            swap: true,
            fix: false,
        })
        .unwrap();
        assert!(text.starts_with("#FFFFFF on #0057B7"), "{text}");
    }

    #[test]
    fn presets_lists_every_pair() {
        let text = run_to_string(Command::Presets).unwrap();
        assert_eq!(text.lines().count(), presets().len());
        assert!(text.lines().next().unwrap().starts_with("Black on White"));
    }

    // ── generate ─────────────────────────────────────────────────────────

    #[test]
    fn generate_keeps_locked_slots() {
        let text = run_to_string(Command::Generate {
            palette: seeded("autumn", 4, 11),
            rounds: 3,
            lock: vec![1],
            restore: None,
        })
        .unwrap();
        let rows: Vec<Vec<&str>> = text
            .lines()
            .filter(|l| l.starts_with("     "))
            .map(|l| l.split_whitespace().collect())
            .collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0][1].ends_with('*'));
        assert_eq!(rows[0][1], rows[1][1]);
        assert_eq!(rows[1][1], rows[2][1]);
    }

    #[test]
    fn generate_is_reproducible_with_a_seed() {
        let make = || Command::Generate {
            palette: seeded("pastel", 5, 99),
            rounds: 2,
            lock: Vec::new(),
            restore: Some(0),
        };
        let text = run_to_string(make()).unwrap();
        assert_eq!(text, run_to_string(make()).unwrap());
        assert!(text.contains("restored history entry 0"));
    }

    #[test]
    fn generate_rejects_bad_indices() {
        let lock_past_end = Command::Generate {
            palette: seeded("vibrant", 3, 1),
            rounds: 1,
            lock: vec![3],
            restore: None,
        };
        assert!(run_to_string(lock_past_end).is_err());

        let restore_empty = Command::Generate {
            palette: seeded("vibrant", 3, 1),
            rounds: 1,
            lock: Vec::new(),
            restore: Some(0),
        };
        assert!(run_to_string(restore_empty).is_err());
    }

    #[test]
    fn unknown_mode_is_an_error() {
        let command = Command::Generate {
            palette: seeded("neon", 3, 1),
            rounds: 1,
            lock: Vec::new(),
            restore: None,
        };
        assert!(run_to_string(command).is_err());
    }

    // ── export ───────────────────────────────────────────────────────────

    #[test]
    fn export_text_prints_hex_lines() {
        let text = run_to_string(Command::Export {
            palette: seeded("winter", 4, 5),
            format: Format::Text,
            out: None,
            name: None,
            vertical: false,
        })
        .unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| parse_color(l).is_ok()), "{text}");
    }

    #[test]
    fn export_json_is_a_record() {
        let text = run_to_string(Command::Export {
            palette: seeded("summer", 3, 5),
            format: Format::Json,
            out: None,
            name: Some("Evening".into()),
            vertical: false,
        })
        .unwrap();
        let record = PaletteRecord::from_json(&text).unwrap();
        assert_eq!(record.name, "Evening");
        assert_eq!(record.colors.len(), 3);
    }

    #[test]
    fn export_png_requires_a_path() {
        let command = Command::Export {
            palette: seeded("spring", 3, 5),
            format: Format::Png,
            out: None,
            name: None,
            vertical: false,
        };
        assert!(run_to_string(command).is_err());
    }

    #[test]
    fn export_png_writes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.png");
        let text = run_to_string(Command::Export {
            palette: seeded("spring", 3, 5),
            format: Format::Png,
            out: Some(path.clone()),
            name: None,
            vertical: false,
        })
        .unwrap();
        assert_eq!(text, "");
        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
