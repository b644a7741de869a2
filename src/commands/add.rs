use crate::{
    core::{
        config::Config,
        store::{normalize_site, CredentialStore},
        types::{SaveResult, SecureString},
    },
    modules::clipboard::Clipboard,
    ui::prompt::UserPrompt,
};

pub struct Add;

impl Add {
    pub fn new(
        site: String,
        identity: String,
        generate: bool,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::load()?;
        let store = CredentialStore::new(config.store_file());

        let secret = if generate {
            let password = SecureString::new(config.policy().generate());
            println!("Generated: {}", password.as_str());
            password
        } else {
            UserPrompt::secret("Password to store: ")?
        };

        let result = store.save(&site, &identity, secret.as_str(), |existing| {
            let question = format!("An entry for '{}' already exists. Overwrite it?", existing);
            UserPrompt::confirm(&question).unwrap_or(false)
        })?;

        match result {
            SaveResult::Saved => {
                println!("Saved '{}'.", normalize_site(&site));

                // The clipboard only ever holds a password the store kept.
                if generate {
                    match Clipboard::copy(secret.as_str()) {
                        Ok(()) => println!("Copied to clipboard."),
                        Err(e) => eprintln!("Warning: clipboard unavailable: {}", e),
                    }
                }
            }
            SaveResult::Skipped => {
                println!("Kept the existing entry for '{}'.", normalize_site(&site))
            }
        }

        Ok(())
    }
}
