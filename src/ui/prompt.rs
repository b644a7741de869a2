use std::io::{self, Write};

use crate::core::types::SecureString;

pub struct UserPrompt;

impl UserPrompt {
    pub fn secret(prompt: &str) -> Result<SecureString, Box<dyn std::error::Error>> {
        let secret = rpassword::prompt_password(prompt)?;

        if secret.is_empty() {
            return Err("Empty password not allowed".into());
        }

        if secret.len() > 128 {
            return Err("Password too long (max 128 chars)".into());
        }

        Ok(SecureString::new(secret))
    }

    pub fn text(prompt: &str) -> Result<String, Box<dyn std::error::Error>> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let trimmed = input.trim().to_string();

        if trimmed.len() > 128 {
            return Err("Input too long (max 128 chars)".into());
        }

        Ok(trimmed)
    }

    pub fn confirm(question: &str) -> Result<bool, Box<dyn std::error::Error>> {
        let answer = Self::text(&format!("{} [y/N]: ", question))?;

        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }
}
