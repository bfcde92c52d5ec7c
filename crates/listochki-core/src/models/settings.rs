use serde::{Deserialize, Serialize};

/// Global site configuration. The backend exposes exactly one instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub header_text: String,
    #[serde(default)]
    pub home_page_intro: String,
    #[serde(default)]
    pub footer_text: String,
    #[serde(default)]
    pub telegram_url: String,
    pub worksheets_per_page: u32,
    #[serde(default)]
    pub show_stats: bool,
}
