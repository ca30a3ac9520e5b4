use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use cityfile_tools::{convert_city, inspect_city, InspectReport};
use clap::{Parser, Subcommand, ValueEnum};
use codec::{CityFile, CodecOptions};
use glob::Pattern;

#[derive(Parser)]
#[command(
    name = "cityfile",
    version,
    about = "Legacy city save file conversion and inspection"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a city file, project its map and save it again.
    Convert {
        /// Path to the city file.
        path: PathBuf,
        /// Write to this path instead of overwriting the source.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Byte-swap on save so the output reloads to identical values.
        #[arg(long)]
        symmetric: bool,
        /// Keep the loaded funding levels instead of resetting them to 100%.
        #[arg(long)]
        keep_funding: bool,
    },
    /// Print the decoded header, history ranges and tile statistics.
    Inspect {
        /// Path to a city file or a directory of city files.
        path: PathBuf,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Sort inspected files.
        #[arg(long, value_enum)]
        sort: Option<InspectSort>,
        /// Limit the number of inspected files (after sorting).
        #[arg(long)]
        limit: Option<usize>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = InspectFormat::Pretty)]
        format: InspectFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectSort {
    Funds,
    Occupied,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Command::Convert {
            path,
            out,
            symmetric,
            keep_funding,
        } => {
            if !path.is_file() {
                bail!("city file {} does not exist", path.display());
            }
            let mut options = if symmetric {
                CodecOptions::symmetric()
            } else {
                CodecOptions::reference()
            };
            if keep_funding {
                options = options.with_funding_preserved();
            }
            let dst = out.as_deref().unwrap_or(path.as_path());
            let summary = convert_city(&path, dst, &options)
                .with_context(|| format!("convert {}", path.display()))?;
            println!(
                "{} -> {}: {} occupied cells, funds {}",
                path.display(),
                dst.display(),
                summary.occupied_cells,
                summary.total_funds
            );
        }
        Command::Inspect {
            path,
            glob,
            sort,
            limit,
            format,
        } => {
            if path.is_dir() {
                let entries = collect_city_entries(&path, glob.as_deref())?;
                let mut entries = maybe_sort_entries(entries, sort);
                if let Some(limit) = limit {
                    entries.truncate(limit);
                }
                for entry in &entries {
                    if matches!(format, InspectFormat::Pretty) {
                        println!("== {} ==", entry.path.display());
                    }
                    print_report(&entry.report, format)?;
                }
            } else {
                if !path.is_file() {
                    bail!("city file {} does not exist", path.display());
                }
                let report = load_report(&path)?;
                print_report(&report, format)?;
            }
        }
    }
    Ok(())
}

fn load_report(path: &Path) -> Result<InspectReport> {
    let city = CityFile::load(path).with_context(|| format!("load city {}", path.display()))?;
    Ok(inspect_city(&city))
}

fn print_report(report: &InspectReport, format: InspectFormat) -> Result<()> {
    match format {
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(report).context("serialize json")?;
            println!("{json}");
        }
        InspectFormat::Pretty => {
            println!("{report}");
        }
    }
    Ok(())
}

struct CityEntry {
    path: PathBuf,
    report: InspectReport,
}

fn collect_city_entries(dir: &Path, glob: Option<&str>) -> Result<Vec<CityEntry>> {
    let mut entries = Vec::new();
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                continue;
            }
        }
        match load_report(&path) {
            Ok(report) => entries.push(CityEntry { path, report }),
            Err(err) => log::warn!("skipping {}: {err:#}", path.display()),
        }
    }
    Ok(entries)
}

fn maybe_sort_entries(mut entries: Vec<CityEntry>, sort: Option<InspectSort>) -> Vec<CityEntry> {
    match sort {
        Some(InspectSort::Funds) => entries.sort_by(|a, b| {
            b.report
                .header
                .total_funds
                .cmp(&a.report.header.total_funds)
                .then_with(|| a.path.cmp(&b.path))
        }),
        Some(InspectSort::Occupied) => entries.sort_by(|a, b| {
            b.report
                .tiles
                .occupied
                .cmp(&a.report.tiles.occupied)
                .then_with(|| a.path.cmp(&b.path))
        }),
        None => entries.sort_by(|a, b| a.path.cmp(&b.path)),
    }
    entries
}
