use serde::Deserialize;

use cartcap_core::error::{CartCapError, Result};
use cartcap_core::policy::{Messages, DEFAULT_ADD_EXCEEDS, DEFAULT_UPDATE_EXCEEDS};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtensionConfig {
    pub version: u32,

    #[serde(default)]
    pub messages: MessagesSection,
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            version: 1,
            messages: MessagesSection::default(),
        }
    }
}

impl ExtensionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(CartCapError::BadRequest("version must be 1".into()));
        }
        self.messages.validate()?;
        Ok(())
    }
}

/// Deployment-level rejection message catalog.
///
/// Overriding these templates is how a shop translates or rewords the
/// shopper-facing rejection text.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessagesSection {
    #[serde(default = "default_add_exceeds")]
    pub add_exceeds: String,

    #[serde(default = "default_update_exceeds")]
    pub update_exceeds: String,
}

impl Default for MessagesSection {
    fn default() -> Self {
        Self {
            add_exceeds: default_add_exceeds(),
            update_exceeds: default_update_exceeds(),
        }
    }
}

impl MessagesSection {
    pub fn validate(&self) -> Result<()> {
        for (name, template) in [
            ("messages.add_exceeds", &self.add_exceeds),
            ("messages.update_exceeds", &self.update_exceeds),
        ] {
            if !template.contains("{max}") {
                return Err(CartCapError::BadRequest(format!(
                    "{name} must contain the {{max}} placeholder"
                )));
            }
        }
        Ok(())
    }

    pub fn to_messages(&self) -> Messages {
        Messages {
            add_exceeds: self.add_exceeds.clone(),
            update_exceeds: self.update_exceeds.clone(),
        }
    }
}

fn default_add_exceeds() -> String {
    DEFAULT_ADD_EXCEEDS.into()
}
fn default_update_exceeds() -> String {
    DEFAULT_UPDATE_EXCEEDS.into()
}
