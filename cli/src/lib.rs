//! Command-line front end for type coverage search.
//!
//! Reads the type chart (and, when present, the pokedex), runs the coverage
//! search selected by [`Settings`] and prints one solution per line, smallest
//! first.

pub mod settings;

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use typecover_chart::{Categories, DexError, Pokedex, Type, TypeChart};
use typecover_search::find_type_coverage;

pub use settings::{DEFENSE_RULE_VAR, MODE_VAR, Settings, SettingsError};

/// Find minimal sets of types with full type coverage
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "typecover", version, about, long_about = None)]
pub struct Cli {
    /// Pokedex file
    #[arg(short, long, value_name = "FILE", default_value = "dex.txt")]
    pub dex: PathBuf,

    /// Type chart file
    #[arg(short, long, value_name = "FILE", default_value = "chart.txt")]
    pub chart: PathBuf,
}

/// Load inputs, search, and write every solution to `out`
///
/// Nothing is written when the chart cannot be read.
pub fn run<W: Write>(cli: &Cli, settings: &Settings, out: &mut W) -> Result<()> {
    let chart = load_chart(&cli.chart)?;
    tracing::debug!("Type chart:\n{chart}");

    load_dex(&cli.dex);

    let mut solutions = find_type_coverage(&chart, &settings.search_config());
    solutions.sort_by_size();

    tracing::info!(
        mode = %settings.mode,
        solutions = solutions.len(),
        smallest = ?solutions.first().map(|s| s.len()),
        "Coverage search complete"
    );

    for solution in &solutions {
        writeln!(out, "{}", solution.display(chart.categories()))
            .context("Failed to write solution")?;
    }
    out.flush().context("Failed to flush output")?;

    Ok(())
}

/// Read and validate the 18-type chart file
pub fn load_chart(path: &Path) -> Result<TypeChart> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open chart file {}", path.display()))?;

    TypeChart::from_reader(BufReader::new(file), Categories::standard())
        .with_context(|| format!("Failed to parse chart file {}", path.display()))
}

/// Read the pokedex if there is one
///
/// The search does not depend on it, so a missing or broken file is logged
/// and skipped.
pub fn load_dex(path: &Path) -> Option<Pokedex> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No pokedex file, skipping");
        return None;
    }

    let dex = File::open(path)
        .map_err(DexError::from)
        .and_then(|file| Pokedex::from_reader(BufReader::new(file)));

    match dex {
        Ok(dex) => {
            tracing::info!(path = %path.display(), entries = dex.len(), "Loaded pokedex");
            for (t, count) in Type::all().iter().zip(dex.count_by_type()) {
                tracing::debug!(type_name = %t, count, "Pokedex type count");
            }
            Some(dex)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable pokedex");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::NamedTempFile;
    use typecover_chart::STANDARD_CHART_TEXT;
    use typecover_search::{CoverageMode, DefenseRule};

    fn temp_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn cli_for(chart: &Path, dex: &Path) -> Cli {
        Cli {
            dex: dex.to_path_buf(),
            chart: chart.to_path_buf(),
        }
    }

    fn run_to_string(cli: &Cli, settings: &Settings) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = run(cli, settings, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["typecover"]).unwrap();
        assert_eq!(cli.chart, PathBuf::from("chart.txt"));
        assert_eq!(cli.dex, PathBuf::from("dex.txt"));
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["typecover", "-c", "gen6.txt", "--dex", "national.txt"])
            .unwrap();
        assert_eq!(cli.chart, PathBuf::from("gen6.txt"));
        assert_eq!(cli.dex, PathBuf::from("national.txt"));
    }

    #[test]
    fn test_cli_rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["typecover", "--defensive"]).is_err());
    }

    #[test]
    fn test_run_offense_on_standard_chart() {
        let chart = temp_file(STANDARD_CHART_TEXT);
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(chart.path(), &dir.path().join("missing-dex.txt"));

        let (result, output) = run_to_string(&cli, &Settings::default());
        result.unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3599);
        assert_eq!(lines[0], "Fighting Flying Poison Ground Ghost Grass Ice");
        assert!(lines.iter().all(|l| !l.split(' ').any(|name| name == "Normal")));

        let sizes: Vec<usize> = lines.iter().map(|l| l.split(' ').count()).collect();
        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_run_defense_settings() {
        let chart = temp_file(STANDARD_CHART_TEXT);
        let dex = temp_file(include_str!("../../chart/data/dex.txt"));
        let cli = cli_for(chart.path(), dex.path());
        let settings = Settings {
            mode: CoverageMode::Defense,
            defense_rule: DefenseRule::EveryAttacker,
        };

        let (result, output) = run_to_string(&cli, &settings);
        result.unwrap();

        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("Flying Steel Dragon Dark"));
        assert_eq!(lines.next(), Some("Bug Steel Dragon Dark"));
    }

    #[test]
    fn test_run_malformed_chart_prints_nothing() {
        let seventeen = STANDARD_CHART_TEXT
            .lines()
            .map(|line| line.rsplit_once("  ").unwrap().0)
            .collect::<Vec<_>>()
            .join("\n");
        let chart = temp_file(&seventeen);
        let cli = cli_for(chart.path(), Path::new("dex.txt"));

        let (result, output) = run_to_string(&cli, &Settings::default());
        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse chart file"));
        assert!(output.is_empty());
    }

    #[test]
    fn test_run_unknown_token_prints_nothing() {
        let chart = temp_file(&STANDARD_CHART_TEXT.replacen("½×", "0.5×", 1));
        let cli = cli_for(chart.path(), Path::new("dex.txt"));

        let (result, output) = run_to_string(&cli, &Settings::default());
        assert!(result.is_err());
        assert!(output.is_empty());
    }

    #[test]
    fn test_run_missing_chart_file() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(&dir.path().join("chart.txt"), Path::new("dex.txt"));

        let (result, output) = run_to_string(&cli, &Settings::default());
        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("Failed to open chart file"));
        assert!(output.is_empty());
    }

    #[test]
    fn test_load_dex() {
        let dex = temp_file(include_str!("../../chart/data/dex.txt"));
        assert_eq!(load_dex(dex.path()).map(|d| d.len()), Some(15));

        let broken = temp_file("#0025\nPikachu\n");
        assert!(load_dex(broken.path()).is_none());

        let dir = tempfile::tempdir().unwrap();
        assert!(load_dex(&dir.path().join("dex.txt")).is_none());
    }
}
