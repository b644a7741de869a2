use std::path::PathBuf;

use crate::core::config::{Config, MAX_CLASS_COUNT};
use crate::modules::password::CountRange;

pub struct ConfigCmd;

impl ConfigCmd {
    pub fn show() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::load()?;

        println!("\nCurrent Configuration:");
        println!("  Store file: {}", config.store_file().display());
        println!(
            "  Letters per password: {} to {}",
            config.letters.min, config.letters.max
        );
        println!(
            "  Digits per password: {} to {}",
            config.digits.min, config.digits.max
        );
        println!(
            "  Symbols per password: {} to {}",
            config.symbols.min, config.symbols.max
        );

        Ok(())
    }

    pub fn set_range(
        class: String,
        min: usize,
        max: usize,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if min > max {
            return Err(format!("Minimum {} cannot exceed maximum {}", min, max).into());
        }

        if max > MAX_CLASS_COUNT {
            return Err(format!("Maximum count cannot exceed {}", MAX_CLASS_COUNT).into());
        }

        let mut config = Config::load()?;
        let range = CountRange::new(min, max);

        match class.as_str() {
            "letters" => config.letters = range,
            "digits" => config.digits = range,
            "symbols" => config.symbols = range,
            other => {
                return Err(format!(
                    "Unknown character class '{}'. Expected letters, digits, or symbols.",
                    other
                )
                .into())
            }
        }

        config.validate()?;
        config.save()?;

        println!("{} count range set to [{}, {}]", class, min, max);

        Ok(())
    }

    pub fn set_store(path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
        let mut config = Config::load()?;
        config.store_path = Some(path.clone());
        config.save()?;

        println!("Store file set to {}", path.display());

        Ok(())
    }
}
