//! Configuration management for wordvm
//!
//! This crate provides functionality for managing the wordvm configuration,
//! including loading, saving, updating, and deleting configuration settings.

/// Error types for the configuration module
pub mod error;

use crate::error::Error;
use clap::Parser;
use serde::{Deserialize, Serialize};
#[allow(deprecated)]
use std::env::home_dir;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};
use wordvm_common::utils::io::file::{delete_path, read_file, write_file};
use wordvm_vm::core::constants::{DEFAULT_MEMORY_SIZE, MAX_MEMORY_SIZE};

/// Command line arguments for the configuration command
#[derive(Debug, Clone, Parser)]
#[clap(
    about = "Display and edit the current configuration",
    override_usage = "wordvm config [OPTIONS]"
)]
pub struct ConfigArgs {
    /// The target key to update.
    #[clap(required = false, default_value = "")]
    key: String,

    /// The value to set the key to.
    #[clap(required = false, default_value = "")]
    value: String,
}

/// The [`Configuration`] struct represents the configuration of the CLI. The interpreter reads
/// its memory capacity and gas limit from here unless overridden on the command line.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Configuration {
    /// The capacity of linear memory, in bytes
    pub memory_size: usize,

    /// The gas available to a run. Runs are unmetered when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<u64>,

    /// The number of memory bytes shown by the memory dump
    pub memory_dump_size: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration { memory_size: DEFAULT_MEMORY_SIZE, gas_limit: None, memory_dump_size: 300 }
    }
}

impl Configuration {
    /// Returns the path of the configuration file, `$HOME/.wordvm/config.toml`.
    #[allow(deprecated)]
    pub fn default_path() -> Result<PathBuf, Error> {
        let mut home = home_dir().ok_or_else(|| {
            Error::Generic(
                "failed to get home directory. does your os support `std::env::home_dir()`?"
                    .to_string(),
            )
        })?;
        home.push(".wordvm");
        home.push("config.toml");
        Ok(home)
    }

    /// Returns the current configuration.
    pub fn load() -> Result<Self, Error> {
        Self::load_from(&Self::default_path()?)
    }

    /// Loads the configuration stored at `path`, creating it with defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        // if the config file doesn't exist, create it
        if !path.exists() {
            debug!("creating default configuration at {}", path.display());
            let config = Configuration::default();
            config.save_to(path)?;
        }

        // read the config file
        let contents = read_file(path_str(path)?)
            .map_err(|e| Error::Generic(format!("failed to read config file: {e}")))?;

        // parse the config file
        let config: Configuration = toml::from_str(&contents)
            .map_err(|e| Error::ParseError(format!("failed to parse config file: {e}")))?;
        Self::check_memory_size(config.memory_size)?;

        Ok(config)
    }

    /// Saves the current configuration to disk.
    pub fn save(&self) -> Result<(), Error> {
        self.save_to(&Self::default_path()?)
    }

    /// Saves the configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), Error> {
        write_file(
            path_str(path)?,
            &toml::to_string(&self)
                .map_err(|e| Error::ParseError(format!("failed to serialize config: {e}")))?,
        )
        .map_err(|e| Error::Generic(format!("failed to write config file: {e}")))?;

        Ok(())
    }

    /// Deletes the configuration file at `$HOME/.wordvm/config.toml`.
    pub fn delete() -> Result<(), Error> {
        Self::delete_at(&Self::default_path()?)
    }

    /// Deletes the configuration file at `path`.
    pub fn delete_at(path: &Path) -> Result<(), Error> {
        if !delete_path(path_str(path)?) {
            return Err(Error::Generic(format!("failed to delete {}", path.display())));
        }
        Ok(())
    }

    /// Update a single key/value pair in the configuration.
    pub fn update(&mut self, key: &str, value: &str) -> Result<(), Error> {
        // update the key in the struct and ensure it's the correct type
        match key {
            "memory_size" => {
                self.memory_size = Self::check_memory_size(parse_number(key, value)?)?;
            }
            "gas_limit" => {
                self.gas_limit = match value {
                    "none" | "unlimited" => None,
                    _ => Some(parse_number(key, value)?),
                };
            }
            "memory_dump_size" => {
                self.memory_dump_size = parse_number(key, value)?;
            }
            _ => {
                return Err(Error::Generic(format!(
                    "invalid key: \'{key}\' is not a valid configuration key."
                )))
            }
        }

        Ok(())
    }

    /// Fails unless `size` is a memory capacity a run may allocate.
    ///
    /// ```
    /// use wordvm_config::Configuration;
    ///
    /// assert_eq!(Configuration::check_memory_size(4096).unwrap(), 4096);
    /// assert!(Configuration::check_memory_size(usize::MAX).is_err());
    /// ```
    pub fn check_memory_size(size: usize) -> Result<usize, Error> {
        if size > MAX_MEMORY_SIZE {
            return Err(Error::Generic(format!(
                "memory size {size} exceeds the maximum of {MAX_MEMORY_SIZE} bytes"
            )));
        }
        Ok(size)
    }

    /// The gas limit for a run, with `u64::MAX` standing in for an unmetered run.
    pub fn effective_gas_limit(&self) -> u64 {
        self.gas_limit.unwrap_or(u64::MAX)
    }
}

fn path_str(path: &Path) -> Result<&str, Error> {
    path.to_str().ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, Error> {
    value.parse::<T>().map_err(|_| {
        Error::ParseError(format!("invalid value: \'{value}\' is not a valid number for \'{key}\'."))
    })
}

/// The `config` command is used to display and edit the current configuration.
pub fn config(args: ConfigArgs) -> Result<(), Error> {
    if !args.key.is_empty() {
        if !args.value.is_empty() {
            // read the config file and update the key/value pair
            let mut config = Configuration::load()?;
            config.update(&args.key, &args.value)?;
            config.save()?;
            info!("updated configuration! Set \'{}\' = \'{}\' .", &args.key, &args.value);
        } else {
            // key is set, but no value is set
            error!("found key but no value to set. Please specify a value to set, use `wordvm config --help` for more information.");
        }
    } else {
        // no key is set, print the config file
        println!("{:#?}", Configuration::load()?);
        info!("use `wordvm config <KEY> <VALUE>` to set a key/value pair.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn test_path() -> PathBuf {
        std::env::temp_dir().join("wordvm-config-tests").join("config.toml")
    }

    // Test default configuration
    #[test]
    #[serial]
    fn test_default_configuration() {
        let config = Configuration::default();
        assert_eq!(config.memory_size, 100_000);
        assert_eq!(config.gas_limit, None);
        assert_eq!(config.memory_dump_size, 300);
        assert_eq!(config.effective_gas_limit(), u64::MAX);
    }

    // Test loading configuration from a file
    #[test]
    #[serial]
    fn test_load_configuration() {
        // delete config file if it exists
        Configuration::delete_at(&test_path()).expect("failed to delete config file");
        let config = Configuration::load_from(&test_path()).expect("failed to load config file");

        assert_eq!(config, Configuration::default());
        assert!(test_path().exists());
    }

    // Test saving configuration to a file
    #[test]
    #[serial]
    fn test_save_configuration() {
        Configuration::delete_at(&test_path()).expect("failed to delete config file");
        let mut config = Configuration::default();

        config.update("memory_size", "4096").expect("failed to update memory_size");
        config.update("gas_limit", "21000").expect("failed to update gas_limit");
        config.save_to(&test_path()).expect("failed to save config file");

        let loaded_config =
            Configuration::load_from(&test_path()).expect("failed to load config file");
        assert_eq!(loaded_config.memory_size, 4096);
        assert_eq!(loaded_config.gas_limit, Some(21000));
        assert_eq!(loaded_config.memory_dump_size, 300);
    }

    // Test deleting configuration file
    #[test]
    #[serial]
    fn test_delete_configuration() {
        Configuration::delete_at(&test_path()).expect("failed to delete config file");
        let mut config = Configuration::load_from(&test_path()).expect("failed to load config");
        config.update("memory_dump_size", "64").expect("failed to update memory_dump_size");
        config.save_to(&test_path()).expect("failed to save config file");

        Configuration::delete_at(&test_path()).expect("failed to delete config file");
        let config = Configuration::load_from(&test_path()).expect("failed to load config file");
        assert_eq!(config.memory_dump_size, 300);
    }

    #[test]
    #[serial]
    fn test_partial_file_uses_defaults() {
        write_file(path_str(&test_path()).unwrap(), "gas_limit = 10\n")
            .expect("failed to write config file");

        let config = Configuration::load_from(&test_path()).expect("failed to load config file");
        assert_eq!(config.gas_limit, Some(10));
        assert_eq!(config.memory_size, 100_000);
    }

    #[test]
    #[serial]
    fn test_load_rejects_oversized_memory() {
        write_file(path_str(&test_path()).unwrap(), "memory_size = 4294967296\n")
            .expect("failed to write config file");

        assert!(matches!(Configuration::load_from(&test_path()), Err(Error::Generic(_))));
        Configuration::delete_at(&test_path()).expect("failed to delete config file");
    }

    #[test]
    fn test_update_rejects_bad_input() {
        let mut config = Configuration::default();
        assert!(matches!(config.update("rpc_url", "x"), Err(Error::Generic(_))));
        assert!(matches!(config.update("memory_size", "lots"), Err(Error::ParseError(_))));
        assert!(matches!(config.update("gas_limit", "-1"), Err(Error::ParseError(_))));

        assert!(matches!(
            config.update("memory_size", "18446744073709551615"),
            Err(Error::Generic(_))
        ));
        assert_eq!(config.memory_size, 100_000);

        config.update("gas_limit", "5").unwrap();
        config.update("gas_limit", "none").unwrap();
        assert_eq!(config.gas_limit, None);
    }
}
