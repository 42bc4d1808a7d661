use anyhow::{Result, bail};
use std::path::PathBuf;

pub struct Config {
    pub export_path: PathBuf,
    pub verbose: bool,
}

impl Config {
    pub fn load(export_path: PathBuf, verbose: bool) -> Result<Self> {
        if export_path.as_os_str().is_empty() {
            bail!("Export path cannot be empty");
        }
        if export_path.is_dir() {
            bail!(
                "Export path is a directory: {}. Pass a file name such as ingredients.csv",
                export_path.display()
            );
        }
        Ok(Config {
            export_path,
            verbose,
        })
    }

    /// Log filter used when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
