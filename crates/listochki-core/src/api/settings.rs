use crate::models::SiteSettings;

use super::gateway::{Gateway, Query, Result};

#[derive(Clone)]
pub struct SettingsApi {
    gateway: Gateway,
}

impl SettingsApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// The singleton site settings record.
    pub async fn get(&self) -> Result<SiteSettings> {
        self.gateway.get_json("/api/settings/", Query::new()).await
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::{json, Value};

    pub fn settings_json() -> Value {
        json!({
            "contact_email": "info@listochki.ru",
            "contact_phone": "+7 900 000-00-00",
            "header_text": "Умные листочки",
            "home_page_intro": "Рабочие листы для детей",
            "footer_text": "© Умные листочки",
            "telegram_url": "https://t.me/listochki",
            "worksheets_per_page": 21,
            "show_stats": true
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;

    #[tokio::test]
    async fn test_get_settings() {
        let mock = MockTransport::new();
        mock.respond_json("/api/settings/", fixtures::settings_json());

        let settings = SettingsApi::new(mock.gateway()).get().await.expect("settings");
        assert_eq!(settings.worksheets_per_page, 21);
        assert!(settings.show_stats);
        assert_eq!(settings.telegram_url, "https://t.me/listochki");
    }
}
