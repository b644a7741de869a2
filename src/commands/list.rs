use crate::core::{config::Config, store::CredentialStore};

pub struct List;

impl List {
    pub fn new() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::load()?;
        let store = CredentialStore::new(config.store_file());

        if !store.path().exists() {
            println!("No data file found.");
            return Ok(());
        }

        let entries = store.load()?;

        if entries.is_empty() {
            println!("No entries");
            return Ok(());
        }

        println!();
        println!("{} site(s) stored:", entries.len());

        for site in entries.keys() {
            println!("  {}", site);
        }

        Ok(())
    }
}
