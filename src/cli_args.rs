use std::path::PathBuf;

use clap::Parser;

/// Name of the file read when none is given on the command line.
pub const DEFAULT_INPUT_FILENAME: &str = "calcul.txt";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// File containing the RPN expression to evaluate. Defaults to
    /// `calcul.txt` in the current directory.
    pub source_filename: Option<PathBuf>,

    /// Enable debug logging of each evaluation step.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, PartialEq)]
pub struct Config {
    pub input_path: PathBuf,
    pub verbose: bool,
}

impl CliArgs {
    pub fn create_config(&self) -> Config {
        Config {
            input_path: self
                .source_filename
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILENAME)),
            verbose: self.verbose,
        }
    }
}
