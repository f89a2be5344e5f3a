//! Process-wide configuration for the writer
//!
//! Loaded once at start-up. The credential is looked up in the
//! deployment secret store first and in the environment second.

use std::fmt;
use std::path::{Path, PathBuf};
use log::{debug, info, warn};
use serde::Deserialize;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const API_BASE_VAR: &str = "GEMINI_API_BASE";
pub const SECRETS_FILE_VAR: &str = "ATSDOC_SECRETS_FILE";

pub const DEFAULT_SECRETS_FILE: &str = ".secrets/secrets.toml";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_API_BASE: &str
  = "https://generativelanguage.googleapis.com/v1beta";

/// Deployment secret store, a flat TOML file.
/// Unknown keys are ignored so the file can be shared with other tools.
#[derive(Clone, Default, Deserialize)]
pub struct SecretStore
{   #[serde(rename = "GEMINI_API_KEY", default)]
    pub api_key: Option<String>
  , #[serde(rename = "GEMINI_MODEL", default)]
    pub model: Option<String>
}

impl SecretStore
{   /// Parse a secrets document
    pub fn from_toml_str(s: &str)
      -> Result<Self, crate::error::Error>
    {   toml::from_str(s).map_err(|e| {
          crate::error::Error::InvalidConfiguration(
            format!("secrets file: {}", e)
          )
        })
    }

    /// Read the store at `path`; a missing file is `Ok(None)`
    pub fn load(path: &Path)
      -> Result<Option<Self>, crate::error::Error>
    {   if !path.exists()
        {   debug!("No secret store at {}", path.display());
            return Ok(None);
        }
        let raw = std::fs::read_to_string(path).map_err(|e| {
          crate::error::Error::InvalidConfiguration(
            format!("{}: {}", path.display(), e)
          )
        })?;
        Self::from_toml_str(&raw).map(Some)
    }
}

impl fmt::Debug for SecretStore
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.debug_struct("SecretStore")
          .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
          .field("model", &self.model)
          .finish()
    }
}

/// Read-only writer configuration
#[derive(Clone)]
pub struct AppConfig
{   /// API credential; `None` makes every generation fail
    pub api_key: Option<String>
  , /// Model identifier sent with every request
    pub model: String
  , /// Generation service base URL
    pub api_base: String
}

impl Default for AppConfig
{   fn default() -> Self
    {   AppConfig
        {   api_key: None
          , model: DEFAULT_MODEL.to_string()
          , api_base: DEFAULT_API_BASE.to_string()
        }
    }
}

impl fmt::Debug for AppConfig
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.debug_struct("AppConfig")
          .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
          .field("model", &self.model)
          .field("api_base", &self.api_base)
          .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String>
{   value
      .map(|v| v.trim().to_string())
      .filter(|v| !v.is_empty())
}

impl AppConfig
{   /// Build from explicit sources.
    /// Secret store wins over `env`; empty values count as absent.
    pub fn from_sources<F>(
      secrets: Option<&SecretStore>
    , env: F
    ) -> Self
    where F: Fn(&str) -> Option<String>
    {   let secret_key = non_empty(
          secrets.and_then(|s| s.api_key.clone())
        );
        let api_key = match secret_key
        {   Some(key) => {
              debug!("Using API key from secret store");
              Some(key)
            }
          , None => {
              let key = non_empty(env(API_KEY_VAR));
              if key.is_some()
              {   debug!("Using API key from {}", API_KEY_VAR);
              }
              key
            }
        };

        let model = non_empty(secrets.and_then(|s| s.model.clone()))
          .or_else(|| non_empty(env(MODEL_VAR)))
          .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let api_base = non_empty(env(API_BASE_VAR))
          .map(|b| b.trim_end_matches('/').to_string())
          .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        AppConfig
        {   api_key
          , model
          , api_base
        }
    }

    /// Load from `.env`, the secret store and the process environment
    pub fn load() -> Self
    {   if let Err(e) = dotenvy::dotenv()
        {   debug!("No .env loaded: {}", e);
        }

        let secrets_path = std::env::var(SECRETS_FILE_VAR)
          .map(PathBuf::from)
          .unwrap_or_else(|_| PathBuf::from(DEFAULT_SECRETS_FILE));

        let store = match SecretStore::load(&secrets_path)
        {   Ok(store) => store
          , Err(e) => {
              warn!("Ignoring secret store: {}", e);
              None
            }
        };

        let config = Self::from_sources(
          store.as_ref(),
          |key| std::env::var(key).ok()
        );
        if config.api_key.is_none()
        {   warn!(
              "No {} in secret store or environment; \
               generation will fail",
              API_KEY_VAR
            );
        }
        info!("Loaded config: {:?}", config);
        config
    }

    pub fn has_credential(&self) -> bool
    {   self.api_key.is_some()
    }
}
