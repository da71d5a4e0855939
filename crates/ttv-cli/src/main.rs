use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use ttv_parser::{Report, ReportParser};

#[derive(Parser)]
#[command(name = "ttv")]
#[command(about = "Teletext football results tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a results page and emit the JSON report
    Parse {
        /// Path to the page text, or `-` for stdin
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Year of the page date (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Parse a results page and print a readable summary
    Show {
        /// Path to the page text, or `-` for stdin
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Year of the page date (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },
}

fn read_page(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut page = String::new();
        io::stdin()
            .read_to_string(&mut page)
            .context("Failed to read page from stdin")?;
        return Ok(page);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn parse_page(path: &Path, year: Option<i32>) -> anyhow::Result<Report> {
    let page = read_page(path)?;
    let parser = year.map_or_else(ReportParser::new, ReportParser::with_year);
    log::debug!("parsing {} with reference year {}", path.display(), parser.year());
    parser
        .parse(&page)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Parse {
            path,
            year,
            compact,
        } => {
            let report = parse_page(path, *year)?;
            let json = if *compact {
                serde_json::to_string(&report)?
            } else {
                serde_json::to_string_pretty(&report)?
            };
            println!("{}", json);
        }
        Commands::Show { path, year } => {
            let report = parse_page(path, *year)?;
            println!("{}", report);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_flags() {
        let cli = Cli::try_parse_from(["ttv", "parse", "page.txt", "--year", "2023", "--compact"]).unwrap();
        match cli.command {
            Commands::Parse {
                path,
                year,
                compact,
            } => {
                assert_eq!(path, PathBuf::from("page.txt"));
                assert_eq!(year, Some(2023));
                assert!(compact);
            }
            Commands::Show { .. } => panic!("Expected Parse"),
        }
    }

    #[test]
    fn test_show_defaults() {
        let cli = Cli::try_parse_from(["ttv", "show", "-"]).unwrap();
        assert!(matches!(cli.command, Commands::Show { year: None, .. }));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = parse_page(Path::new("does/not/exist.txt"), Some(2024)).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.txt"));
    }

    #[test]
    fn test_requires_subcommand() {
        assert!(Cli::try_parse_from(["ttv"]).is_err());
    }
}
