use std::process;

use crate::{core::config::Config, modules::clipboard::Clipboard};

pub struct Gen;

impl Gen {
    pub fn new(count: usize, clip: bool) -> Result<(), Box<dyn std::error::Error>> {
        if count < 1 || count > 50 {
            eprintln!("Error: Count must be between 1 and 50.");
            process::exit(1);
        }

        let config = Config::load()?;
        let policy = config.policy();

        let mut last = String::new();

        for i in 1..=count {
            let password = policy.generate();

            if count > 1 {
                println!("{}: {}", i, password);
            } else {
                println!("{}", password);
            }

            last = password;
        }

        if clip {
            Clipboard::copy(&last)?;
            println!("Copied to clipboard.");
        }

        Ok(())
    }
}
