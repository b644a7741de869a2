use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::modules::password::{CountRange, PasswordPolicy};

pub const MAX_CLASS_COUNT: usize = 64;

#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    #[serde(default = "default_letters")]
    pub letters: CountRange,

    #[serde(default = "default_digits")]
    pub digits: CountRange,

    #[serde(default = "default_symbols")]
    pub symbols: CountRange,
}

fn default_letters() -> CountRange {
    CountRange::new(8, 10)
}

fn default_digits() -> CountRange {
    CountRange::new(2, 4)
}

fn default_symbols() -> CountRange {
    CountRange::new(2, 4)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            letters: default_letters(),
            digits: default_digits(),
            symbols: default_symbols(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let mut file = File::open(&config_path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Config = toml::from_str(&contents).unwrap_or_else(|_| Self::default());

        config.validate()?;

        Ok(config)
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_path = Self::get_config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        let mut file = File::create(&config_path)?;
        file.write_all(toml_string.as_bytes())?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&config_path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        for (name, range) in [
            ("letters", self.letters),
            ("digits", self.digits),
            ("symbols", self.symbols),
        ] {
            if !range.is_valid() {
                return Err(format!(
                    "Invalid {} range: min {} exceeds max {}",
                    name, range.min, range.max
                )
                .into());
            }

            if range.max > MAX_CLASS_COUNT {
                return Err(format!(
                    "Invalid {} range: max {} exceeds {}",
                    name, range.max, MAX_CLASS_COUNT
                )
                .into());
            }
        }

        if self.letters.min < 1 {
            return Err("Letters minimum must be at least 1".into());
        }

        Ok(())
    }

    pub fn policy(&self) -> PasswordPolicy {
        PasswordPolicy {
            letters: self.letters,
            digits: self.digits,
            symbols: self.symbols,
        }
    }

    pub fn store_file(&self) -> PathBuf {
        match &self.store_path {
            Some(path) => path.clone(),
            None => {
                let mut path = Self::get_config_dir();
                path.push("data.json");
                path
            }
        }
    }

    pub fn get_config_path() -> PathBuf {
        let mut path = Self::get_config_dir();
        path.push("config.toml");
        path
    }

    fn get_config_dir() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("passkeep");
        fs::create_dir_all(&path).ok();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let _ = fs::set_permissions(&path, fs::Permissions::from_mode(0o700));
        }

        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_the_default_policy() {
        let config: Config = toml::from_str("").unwrap();

        assert!(config.store_path.is_none());
        assert_eq!(config.letters, CountRange::new(8, 10));
        assert_eq!(config.digits, CountRange::new(2, 4));
        assert_eq!(config.symbols, CountRange::new(2, 4));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults_for_missing_ranges() {
        let config: Config = toml::from_str("digits = { min = 1, max = 1 }\n").unwrap();

        assert_eq!(config.digits, CountRange::new(1, 1));
        assert_eq!(config.letters, CountRange::new(8, 10));
    }

    #[test]
    fn inverted_range_fails_validation() {
        let config: Config = toml::from_str("symbols = { min = 5, max = 2 }\n").unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_letters_minimum_fails_validation() {
        let config: Config = toml::from_str("letters = { min = 0, max = 5 }\n").unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_range_fails_validation() {
        let config: Config = toml::from_str("digits = { min = 2, max = 65 }\n").unwrap();
        assert!(config.validate().is_err());

        let config = Config {
            symbols: CountRange::new(0, usize::MAX),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn store_path_override_wins() {
        let config: Config = toml::from_str("store_path = \"/tmp/alt.json\"\n").unwrap();

        assert_eq!(config.store_file(), PathBuf::from("/tmp/alt.json"));
    }

    #[test]
    fn policy_mirrors_the_configured_ranges() {
        let config: Config =
            toml::from_str("letters = { min = 4, max = 6 }\nsymbols = { min = 0, max = 1 }\n")
                .unwrap();
        let policy = config.policy();

        assert_eq!(policy.letters, CountRange::new(4, 6));
        assert_eq!(policy.digits, CountRange::new(2, 4));
        assert_eq!(policy.symbols, CountRange::new(0, 1));
    }
}
