use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::error::StoreError;
use crate::core::types::{Credential, FindResult, SaveResult};

pub fn normalize_site(site: &str) -> String {
    site.trim().to_lowercase()
}

pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<BTreeMap<String, Credential>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };

        serde_json::from_str(&contents).map_err(|source| StoreError::CorruptStore {
            path: self.path.clone(),
            source,
        })
    }

    pub fn exists(&self, site: &str) -> Result<bool, StoreError> {
        Ok(self.load()?.contains_key(&normalize_site(site)))
    }

    pub fn save(
        &self,
        site: &str,
        identity: &str,
        secret: &str,
        mut decide: impl FnMut(&str) -> bool,
    ) -> Result<SaveResult, StoreError> {
        let key = normalize_site(site);

        if key.is_empty() {
            return Err(StoreError::Validation { field: "site" });
        }

        if secret.is_empty() {
            return Err(StoreError::Validation { field: "password" });
        }

        let mut entries = self.load()?;

        if entries.contains_key(&key) && !decide(&key) {
            return Ok(SaveResult::Skipped);
        }

        entries.insert(
            key,
            Credential {
                identity: identity.to_string(),
                secret: secret.to_string(),
            },
        );

        self.write_all(&entries)?;

        Ok(SaveResult::Saved)
    }

    pub fn find(&self, site: &str) -> Result<FindResult, StoreError> {
        if !self.path.exists() {
            return Ok(FindResult::NoStoreFile);
        }

        let entries = self.load()?;

        match entries.get(&normalize_site(site)) {
            Some(credential) => Ok(FindResult::Found(credential.clone())),
            None => Ok(FindResult::NotFoundInStore),
        }
    }

    // Whole-file rewrite through a sibling temp file, so a crash mid-write
    // never leaves a half-written store behind.
    fn write_all(&self, entries: &BTreeMap<String, Credential>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(entries)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, contents)?;

        // Restrict before the file becomes visible under its final name.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp_path, fs::Permissions::from_mode(0o600))?;
        }

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}
