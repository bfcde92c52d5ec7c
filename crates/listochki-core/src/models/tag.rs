use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub usage_count: i64,
}

impl Tag {
    /// Usage count with the Russian plural of "рабочий лист".
    pub fn display_usage(&self) -> String {
        let n = self.usage_count.unsigned_abs();
        let noun = match (n % 10, n % 100) {
            (1, r) if r != 11 => "рабочий лист",
            (2..=4, r) if !(12..=14).contains(&r) => "рабочих листа",
            _ => "рабочих листов",
        };
        format!("{} {}", self.usage_count, noun)
    }
}
