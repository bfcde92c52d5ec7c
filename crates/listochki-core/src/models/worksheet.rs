//! Worksheet models.
//!
//! `grade_level` and `difficulty` are closed enumerations: a response
//! carrying any other value fails to decode instead of being accepted.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, Tag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeLevel {
    #[serde(rename = "preschool")]
    Preschool,
    #[serde(rename = "kindergarten")]
    Kindergarten,
    #[serde(rename = "grade1")]
    Grade1,
    #[serde(rename = "grade2")]
    Grade2,
    #[serde(rename = "grade3")]
    Grade3,
    #[serde(rename = "grade4")]
    Grade4,
    #[serde(rename = "grade5")]
    Grade5,
}

impl GradeLevel {
    pub const ALL: [GradeLevel; 7] = [
        GradeLevel::Preschool,
        GradeLevel::Kindergarten,
        GradeLevel::Grade1,
        GradeLevel::Grade2,
        GradeLevel::Grade3,
        GradeLevel::Grade4,
        GradeLevel::Grade5,
    ];

    /// Wire value, as accepted by the `grade_level` filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            GradeLevel::Preschool => "preschool",
            GradeLevel::Kindergarten => "kindergarten",
            GradeLevel::Grade1 => "grade1",
            GradeLevel::Grade2 => "grade2",
            GradeLevel::Grade3 => "grade3",
            GradeLevel::Grade4 => "grade4",
            GradeLevel::Grade5 => "grade5",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GradeLevel::Preschool => "Дошкольники (3-4 года)",
            GradeLevel::Kindergarten => "Подготовительная группа (5-6 лет)",
            GradeLevel::Grade1 => "1 класс",
            GradeLevel::Grade2 => "2 класс",
            GradeLevel::Grade3 => "3 класс",
            GradeLevel::Grade4 => "4 класс",
            GradeLevel::Grade5 => "5 класс",
        }
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Легкий",
            Difficulty::Medium => "Средний",
            Difficulty::Hard => "Сложный",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Catalog entry as returned by list endpoints. Category fields are
/// denormalized so a list can render without a second lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorksheetListItem {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub category_name: String,
    pub category_slug: String,
    #[serde(default)]
    pub category_path: String,
    pub grade_level: GradeLevel,
    pub difficulty: Difficulty,
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub views_count: u64,
    #[serde(default)]
    pub downloads_count: u64,
    #[serde(default)]
    pub download_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorksheetDetail {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub grade_level: GradeLevel,
    pub difficulty: Difficulty,
    pub thumbnail: Option<String>,
    pub preview_image: Option<String>,
    #[serde(default)]
    pub pdf_file: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub views_count: u64,
    #[serde(default)]
    pub downloads_count: u64,
    #[serde(default)]
    pub download_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorksheetDetail {
    pub fn has_tag(&self, slug: &str) -> bool {
        self.tags.iter().any(|t| t.slug == slug)
    }

    pub fn display_created(&self) -> String {
        self.created_at.format("%d.%m.%Y").to_string()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_item() {
        let json = fixtures::list_item_json(7, "slozhenie-do-10", "grade1", "easy");
        let item: WorksheetListItem = serde_json::from_str(&json).expect("item parses");
        assert_eq!(item.grade_level, GradeLevel::Grade1);
        assert_eq!(item.difficulty, Difficulty::Easy);
        assert_eq!(item.tags.len(), 1);
        assert_eq!(item.created_at.to_rfc3339(), "2024-09-01T07:30:00.123456+00:00");
    }

    #[test]
    fn test_out_of_enum_grade_rejected() {
        let json = fixtures::list_item_json(7, "x", "grade6", "easy");
        let err = serde_json::from_str::<WorksheetListItem>(&json).unwrap_err();
        assert!(err.to_string().contains("grade6"));
    }

    #[test]
    fn test_out_of_enum_difficulty_rejected() {
        let json = fixtures::list_item_json(7, "x", "grade2", "extreme");
        assert!(serde_json::from_str::<WorksheetListItem>(&json).is_err());
    }

    #[test]
    fn test_wire_values_round_trip_through_serde() {
        for grade in GradeLevel::ALL {
            let encoded = serde_json::to_string(&grade).expect("encodes");
            assert_eq!(encoded, format!("\"{}\"", grade.as_str()));
        }
        assert_eq!(Difficulty::Medium.as_str(), "medium");
        assert_eq!(Difficulty::Hard.to_string(), "Сложный");
        assert_eq!(GradeLevel::Grade3.to_string(), "3 класс");
    }

    #[test]
    fn test_parse_detail() {
        let json = fixtures::detail_json("slozhenie-do-10", "kindergarten", "medium");
        let detail: WorksheetDetail = serde_json::from_str(&json).expect("detail parses");
        assert_eq!(detail.category.slug, "slozhenie");
        assert!(detail.has_tag("schet"));
        assert!(!detail.has_tag("chtenie"));
        assert_eq!(detail.display_created(), "01.09.2024");
    }
}
