//! Contact service - support channels and deep links
//!
//! Reads and edits the `companyContactData` blob and builds the
//! wa.me / t.me deep links from it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};
use crate::ports::{StateStore, StoreKey};

/// Message pre-filled into the WhatsApp chat link.
const WHATSAPP_GREETING: &str = "Hi, I'd like to get more information about your services";

/// The editable support channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactData {
    pub whatsapp: String,
    pub telegram: String,
    pub phone: String,
    pub email: String,
}

impl Default for ContactData {
    fn default() -> Self {
        Self {
            whatsapp: "+14372766001".to_string(),
            telegram: "@ChangeNowSupport".to_string(),
            phone: "+1 (437) 276-6000".to_string(),
            email: "contact@changenow.com".to_string(),
        }
    }
}

pub struct ContactService {
    store: Arc<dyn StateStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    /// Current contact data; absent or malformed data reads as the
    /// defaults.
    pub fn contact_data(&self) -> Result<ContactData> {
        let data = match self.store.read(StoreKey::CompanyContactData)? {
            Some(value) => serde_json::from_value(value).unwrap_or_default(),
            None => ContactData::default(),
        };
        Ok(data)
    }

    /// Update one channel by name and persist the whole blob.
    pub fn update_field(&self, field: &str, value: &str) -> Result<ContactData> {
        let mut data = self.contact_data()?;
        match field {
            "whatsapp" => data.whatsapp = value.to_string(),
            "telegram" => data.telegram = value.to_string(),
            "phone" => data.phone = value.to_string(),
            "email" => data.email = value.to_string(),
            other => {
                return Err(Error::validation(format!(
                    "Unknown contact field: {other}"
                )))
            }
        }
        self.store
            .write(StoreKey::CompanyContactData, serde_json::to_value(&data)?)?;
        Ok(data)
    }

    /// Chat link with the greeting pre-filled. Falls back to the phone
    /// number when no WhatsApp number is configured.
    pub fn whatsapp_url(&self) -> Result<String> {
        let data = self.contact_data()?;
        let raw = if data.whatsapp.is_empty() {
            &data.phone
        } else {
            &data.whatsapp
        };
        let number: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
        let message: String = url::form_urlencoded::byte_serialize(WHATSAPP_GREETING.as_bytes())
            .collect();
        Ok(format!("https://wa.me/{number}?text={message}"))
    }

    /// Direct link to the Telegram handle, leading `@` stripped.
    pub fn telegram_url(&self) -> Result<String> {
        let data = self.contact_data()?;
        let handle = data.telegram.trim_start_matches('@');
        Ok(format!("https://t.me/{handle}"))
    }
}
