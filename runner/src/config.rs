use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::warn;
use serde::Deserialize;

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The task spec to read.
    pub input: PathBuf,
    /// Where the report is written. The file is overwritten on every run.
    pub output: PathBuf,
}

impl Config {
    /// Read the config file from the current directory, if no file is found
    /// use the default config
    pub fn load() -> Config {
        match env::current_dir() {
            Ok(mut path) => {
                path.push(CONFIG_FILE);
                Config::from_path(&path)
            }
            Err(error) => {
                warn!("Unable to determine the current directory: {error}");
                Config::default()
            }
        }
    }

    pub fn from_path(path: &Path) -> Config {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(_) => return Config::default(),
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(config) => config,
            Err(error) => {
                warn!("Ignoring {}: {error}", path.display());
                Config::default()
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("TaskSpec.txt"),
            output: PathBuf::from("Output.txt"),
        }
    }
}
