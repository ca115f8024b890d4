//! Extension config loader (strict parsing).

pub mod schema;

use std::fs;

use cartcap_core::error::{CartCapError, Result};

pub use schema::{ExtensionConfig, MessagesSection};

pub fn load_from_file(path: &str) -> Result<ExtensionConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| CartCapError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ExtensionConfig> {
    let cfg: ExtensionConfig = serde_yaml::from_str(s)
        .map_err(|e| CartCapError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
