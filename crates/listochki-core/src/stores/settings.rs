use crate::api::SettingsApi;
use crate::models::SiteSettings;

use super::{FetchOutcome, Memoized, ReferenceStore};

/// Shown when the site settings cannot be loaded.
pub const SETTINGS_ERROR: &str = "Не удалось загрузить настройки сайта";

/// Page size the backend uses when none is requested.
pub const DEFAULT_PAGE_SIZE: u32 = 21;

impl Memoized for SiteSettings {
    fn is_loaded(&self) -> bool {
        true
    }
}

/// Caches the singleton site settings.
pub struct SettingsStore {
    api: SettingsApi,
    store: ReferenceStore<SiteSettings>,
}

impl SettingsStore {
    pub fn new(api: SettingsApi) -> Self {
        Self {
            api,
            store: ReferenceStore::new("settings", SETTINGS_ERROR),
        }
    }

    pub async fn fetch(&self) -> FetchOutcome {
        self.store.fetch_with(|| self.api.get()).await
    }

    pub fn settings(&self) -> Option<SiteSettings> {
        self.store.value()
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.store.error()
    }

    /// Configured page size, or the backend default before settings load.
    pub fn page_size(&self) -> u32 {
        self.settings()
            .map(|s| s.worksheets_per_page)
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockTransport;
    use crate::api::settings::fixtures::settings_json;

    #[tokio::test]
    async fn test_fetch_once() {
        let mock = MockTransport::new();
        mock.respond_json("/api/settings/", settings_json());
        let store = SettingsStore::new(SettingsApi::new(mock.gateway()));
        assert_eq!(store.page_size(), DEFAULT_PAGE_SIZE);

        assert_eq!(store.fetch().await, FetchOutcome::Loaded);
        assert_eq!(store.fetch().await, FetchOutcome::Cached);
        assert_eq!(mock.count("/api/settings/"), 1);
        assert_eq!(store.settings().map(|s| s.header_text), Some("Умные листочки".to_string()));
    }

    #[tokio::test]
    async fn test_failure_message() {
        let mock = MockTransport::new();
        let store = SettingsStore::new(SettingsApi::new(mock.gateway()));

        assert_eq!(store.fetch().await, FetchOutcome::Failed(SETTINGS_ERROR.to_string()));
        assert_eq!(store.error().as_deref(), Some("Не удалось загрузить настройки сайта"));
        assert!(!store.is_loading());
        assert!(store.settings().is_none());
    }

    #[tokio::test]
    async fn test_page_size_from_settings() {
        let mock = MockTransport::new();
        let mut body = settings_json();
        body["worksheets_per_page"] = 30.into();
        mock.respond_json("/api/settings/", body);
        let store = SettingsStore::new(SettingsApi::new(mock.gateway()));

        store.fetch().await;
        assert_eq!(store.page_size(), 30);
    }
}
