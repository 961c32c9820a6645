use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::index_storage::default_cache_path;
use crate::indexer::{DEFAULT_INCLUDE_EXTENSIONS, IndexOptions, index_directories};
use crate::logging;

#[derive(Parser)]
#[command(name = "ouravocado")]
#[command(version = "0.1.0")]
#[command(about = "Index word counts, sizes and checksums of text files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan directories and generate file information
    Index(IndexArgs),
}

#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Directories to scan
    #[arg(required = true, value_name = "DIR")]
    pub dirs: Vec<PathBuf>,

    /// Enable verbose mode
    #[arg(short, long)]
    pub verbose: bool,

    /// Substrings from paths to ignore
    #[arg(long = "ignore-path", value_name = "SUBSTRING", value_delimiter = ',')]
    pub ignore_paths: Vec<String>,

    /// File extensions to include
    #[arg(
        long = "ext",
        value_name = "EXT",
        value_delimiter = ',',
        default_values = DEFAULT_INCLUDE_EXTENSIONS
    )]
    pub extensions: Vec<String>,

    /// Cache file to read and update instead of the platform default
    #[arg(long, value_name = "PATH")]
    pub cache_file: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Index(args)) => {
            run_index(args)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn run_index(args: IndexArgs) -> Result<()> {
    if let Err(e) = logging::init(args.verbose) {
        eprintln!("Warning: {}", e);
    }

    let cache_path = match args.cache_file {
        Some(path) => path,
        None => default_cache_path().context("Failed to resolve cache file location")?,
    };

    let options = IndexOptions::new(args.dirs, cache_path)
        .with_ignore_substrings(args.ignore_paths)
        .with_include_extensions(args.extensions);

    let summary = index_directories(&options).context("Error processing directories")?;

    println!("Updated {}", summary.cache_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse_index(args: &[&str]) -> IndexArgs {
        let cli = Cli::try_parse_from(args).expect("arguments should parse");
        match cli.command {
            Some(Commands::Index(index)) => index,
            None => panic!("expected index subcommand"),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_index_defaults() {
        let args = parse_index(&["ouravocado", "index", "notes"]);

        assert_eq!(args.dirs, vec![PathBuf::from("notes")]);
        assert!(!args.verbose);
        assert!(args.ignore_paths.is_empty());
        assert_eq!(args.extensions, vec![".md", ".txt", ".org"]);
        assert!(args.cache_file.is_none());
    }

    #[test]
    fn test_index_repeated_and_delimited_options() {
        let args = parse_index(&[
            "ouravocado",
            "index",
            "a",
            "b",
            "-v",
            "--ignore-path",
            "skip",
            "--ignore-path",
            ".git,node_modules",
            "--ext",
            ".md",
            "--ext",
            "rst,.adoc",
            "--cache-file",
            "/tmp/index.json",
        ]);

        assert_eq!(args.dirs, vec![PathBuf::from("a"), PathBuf::from("b")]);
        assert!(args.verbose);
        assert_eq!(args.ignore_paths, vec!["skip", ".git", "node_modules"]);
        assert_eq!(args.extensions, vec![".md", "rst", ".adoc"]);
        assert_eq!(args.cache_file, Some(PathBuf::from("/tmp/index.json")));
    }

    #[test]
    fn test_index_requires_directory() {
        assert!(Cli::try_parse_from(["ouravocado", "index"]).is_err());
    }
}
