use std::path::PathBuf;

use clap::{ArgAction, Parser};
use firebase_hunter::config::{Config, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS};

#[derive(clap::Parser, Debug)]
#[command(author, version, about = "Pull the firebase config out of a page and build a database dump page from it", long_about = None)]
pub struct Cli {
    /// Target URL (e.g. https://app.example.com)
    #[arg(short = 't', long, default_value = "")]
    pub target: String,

    /// Port the generated page is served on
    #[arg(short = 'p', long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Print the extracted config to stdout (-w=false to disable)
    #[arg(short = 'w', long = "write", action = ArgAction::Set, num_args = 0..=1,
          default_value_t = true, default_missing_value = "true")]
    pub write: bool,

    /// Serve the generated page over HTTP (-s=false to disable)
    #[arg(short = 's', long = "serve", action = ArgAction::Set, num_args = 0..=1,
          default_value_t = true, default_missing_value = "true")]
    pub serve: bool,

    /// Directory the generated page is written to
    #[arg(short = 'o', long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Fetch timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Enable detailed debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn to_config(&self) -> Config {
        Config {
            target: self.target.clone(),
            port: self.port,
            print_config: self.write,
            serve: self.serve,
            out_dir: self.out_dir.clone(),
            timeout_secs: self.timeout,
        }
    }
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
