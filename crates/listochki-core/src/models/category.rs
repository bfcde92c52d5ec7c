//! Category hierarchy models.
//!
//! `Category` is the flat record returned by list endpoints. `CategoryTree`
//! adds one level of children; grandchildren are never embedded.

use serde::{Deserialize, Serialize};

/// Weak reference to a parent category, by id/name/slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryParent {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub parent: Option<CategoryParent>,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub is_parent: bool,
    #[serde(default)]
    pub full_path: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub worksheets_count: u64,
}

impl Category {
    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }

    /// Whether `child` sits directly below this category.
    pub fn is_parent_of(&self, child: &Category) -> bool {
        child.parent.as_ref().is_some_and(|p| p.id == self.id) && child.level == self.level + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTree {
    #[serde(flatten)]
    pub category: Category,
    #[serde(default)]
    pub children: Vec<Category>,
}

impl CategoryTree {
    pub fn find_child(&self, slug: &str) -> Option<&Category> {
        self.children.iter().find(|c| c.slug == slug)
    }

    /// True when every child points back at this node one level down.
    pub fn levels_consistent(&self) -> bool {
        self.children.iter().all(|c| self.category.is_parent_of(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TREE_JSON: &str = r#"{
        "id": 1, "name": "Математика", "slug": "matematika",
        "description": "", "parent": null, "level": 0, "is_parent": true,
        "full_path": "Математика", "icon": null, "order": 1, "worksheets_count": 42,
        "children": [
            {"id": 5, "name": "Сложение", "slug": "slozhenie", "description": "",
             "parent": {"id": 1, "name": "Математика", "slug": "matematika"},
             "level": 1, "is_parent": false, "full_path": "Математика > Сложение",
             "icon": "plus.svg", "order": 1, "worksheets_count": 10}
        ]
    }"#;

    #[test]
    fn test_parse_category_tree() {
        let tree: CategoryTree = serde_json::from_str(TREE_JSON).expect("tree parses");
        assert_eq!(tree.category.slug, "matematika");
        assert!(tree.category.is_top_level());
        assert_eq!(tree.children.len(), 1);

        let child = tree.find_child("slozhenie").expect("child present");
        assert_eq!(child.parent.as_ref().map(|p| p.slug.as_str()), Some("matematika"));
        assert_eq!(child.icon.as_deref(), Some("plus.svg"));
        assert!(tree.find_child("vychitanie").is_none());
    }

    #[test]
    fn test_levels_consistent() {
        let mut tree: CategoryTree = serde_json::from_str(TREE_JSON).expect("tree parses");
        assert!(tree.levels_consistent());

        tree.children[0].level = 2;
        assert!(!tree.levels_consistent());
    }

    #[test]
    fn test_tree_without_children_field() {
        let json = r#"{"id": 2, "name": "Чтение", "slug": "chtenie", "parent": null, "icon": null}"#;
        let tree: CategoryTree = serde_json::from_str(json).expect("tree parses");
        assert!(tree.children.is_empty());
        assert_eq!(tree.category.worksheets_count, 0);
    }
}
