use crate::{
    core::{
        config::Config,
        store::{normalize_site, CredentialStore},
        types::FindResult,
    },
    modules::clipboard::Clipboard,
};

pub struct Find;

impl Find {
    pub fn new(site: String, clip: bool) -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::load()?;
        let store = CredentialStore::new(config.store_file());

        match store.find(&site)? {
            FindResult::Found(credential) => {
                println!();
                println!("Site: {}", normalize_site(&site));

                if !credential.identity.is_empty() {
                    println!("Identity: {}", credential.identity);
                }

                if clip {
                    Clipboard::copy(&credential.secret)?;
                    println!("Password copied to clipboard.");
                } else {
                    println!("Password: {}", credential.secret);
                }
            }
            FindResult::NotFoundInStore => {
                println!("No details for {} saved.", normalize_site(&site))
            }
            FindResult::NoStoreFile => println!("No data file found."),
        }

        Ok(())
    }
}
