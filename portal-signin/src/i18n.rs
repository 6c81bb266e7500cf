use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Looks up a translated string, falling back to the given text.
pub trait Translate {
    fn translate(&self, key: &str, fallback: &str) -> String;
}

/// Translator returning the fallback text, used when no catalog is loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fallback;

impl Translate for Fallback {
    fn translate(&self, _key: &str, fallback: &str) -> String {
        fallback.to_string()
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Reading translation catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parsing translation catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Translation catalog loaded from a flat toml file:
///
/// ```toml
/// "signin.login_to" = "Se connecter à"
/// continue = "Continuer"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    strings: HashMap<String, String>,
}

impl Catalog {
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::parse(&content)?;
        tracing::debug!(
            "loaded {} translations from {}",
            catalog.strings.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn parse(content: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(content)?)
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str, fallback: &str) -> String {
        match self.strings.get(key) {
            Some(s) if !s.is_empty() => s.clone(),
            _ => fallback.to_string(),
        }
    }
}
