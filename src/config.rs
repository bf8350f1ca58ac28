use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::commands::DEFAULT_TOP_DELAY;

const HISTORY_FILE_NAME: &str = ".lct_history";

#[derive(Debug, Parser)]
#[command(name = "lct")]
#[command(version, about = "Run common Linux utilities and inspect their results", long_about = None)]
pub struct Config {
    /// Seconds a command may run before it is killed
    #[arg(long, env = "LCT_TIMEOUT", default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Refresh delay passed to `top`, in seconds
    #[arg(long, env = "LCT_TOP_DELAY", default_value_t = DEFAULT_TOP_DELAY)]
    pub top_delay: u64,

    /// Where interactive input history is kept (default: ~/.lct_history)
    #[arg(long, env = "LCT_HISTORY_FILE")]
    pub history_file: Option<PathBuf>,

    /// Neither load nor save interactive input history
    #[arg(long)]
    pub no_history: bool,

    /// Run a single command and exit, e.g. `lct ls -la /tmp`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn history_path(&self) -> Option<PathBuf> {
        if self.no_history {
            return None;
        }
        self.history_file
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(HISTORY_FILE_NAME)))
    }
}
