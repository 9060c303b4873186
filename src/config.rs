use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 1339;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Everything a single run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub target: String,
    pub port: u16,
    pub print_config: bool,
    pub serve: bool,
    pub out_dir: PathBuf,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: String::new(),
            port: DEFAULT_PORT,
            print_config: true,
            serve: true,
            out_dir: PathBuf::from("."),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
