use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Category, CategoryConfig, ContentItem};

const CATALOG_JSON: &str = include_str!("data/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("content item id `{0}` appears more than once")]
    DuplicateItem(String),
    #[error("category `{0}` is configured more than once")]
    DuplicateCategory(&'static str),
    #[error("category `{0}` has no configuration")]
    MissingCategory(&'static str),
}

/// Read-only content shown on the landing page. Decoded once per session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Catalog {
    categories: Vec<CategoryConfig>,
    items: Vec<ContentItem>,
}

impl Catalog {
    /// Loads the catalog compiled into the binary.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(CATALOG_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::new();
        for item in &self.items {
            if !ids.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateItem(item.id.clone()));
            }
        }

        let mut configured = HashSet::new();
        for config in &self.categories {
            if !configured.insert(config.id) {
                return Err(CatalogError::DuplicateCategory(config.id.as_str()));
            }
        }
        if let Some(missing) = Category::ALL.iter().find(|c| !configured.contains(*c)) {
            return Err(CatalogError::MissingCategory(missing.as_str()));
        }

        Ok(())
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn categories(&self) -> &[CategoryConfig] {
        &self.categories
    }

    pub fn item(&self, id: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The embedded category configs with a hand-picked item list.
    #[cfg(test)]
    pub fn with_items(items: Vec<ContentItem>) -> Self {
        let categories = Self::load()
            .expect("embedded catalog should be valid")
            .categories;
        Self { categories, items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORIES: &str = r##"[
        {"id": "marketing", "label": "마케팅", "sublabel": "M-KIT", "color": "#fff", "bgColor": "#a78bfa"},
        {"id": "branding", "label": "브랜딩", "sublabel": "출시예정", "color": "#fff", "bgColor": "#f472b6"},
        {"id": "content", "label": "콘텐츠", "sublabel": "BX-KIT", "color": "#fff", "bgColor": "#34d399"}
    ]"##;

    fn catalog_json(categories: &str, items: &str) -> String {
        format!(r#"{{"categories": {}, "items": {}}}"#, categories, items)
    }

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::load().expect("embedded catalog should be valid");
        assert_eq!(catalog.categories().len(), 3);
        assert!(!catalog.items().is_empty());
        for category in Category::ALL {
            assert!(
                catalog.items().iter().any(|item| item.category == category),
                "no items for {}",
                category.as_str()
            );
        }
    }

    #[test]
    fn test_embedded_catalog_has_locked_and_open_items() {
        let catalog = Catalog::load().unwrap();
        assert!(catalog.items().iter().any(|item| item.is_locked));
        assert!(catalog.items().iter().any(|item| !item.is_locked));
    }

    #[test]
    fn test_optional_fields_default() {
        let raw = catalog_json(
            CATEGORIES,
            r#"[{"id": "m1", "kitNumber": 1, "title": "t", "description": "d", "category": "marketing"}]"#,
        );
        let catalog = Catalog::from_json(&raw).unwrap();
        let item = catalog.item("m1").unwrap();
        assert!(!item.is_locked);
        assert!(item.link.is_none());
        assert!(item.code.is_none());
        assert!(item.tags.is_empty());
    }

    #[test]
    fn test_unknown_category_is_parse_error() {
        let raw = catalog_json(
            CATEGORIES,
            r#"[{"id": "x1", "kitNumber": 1, "title": "t", "description": "d", "category": "skincare"}]"#,
        );
        assert!(matches!(Catalog::from_json(&raw), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_duplicate_item_id_rejected() {
        let raw = catalog_json(
            CATEGORIES,
            r#"[
                {"id": "m1", "kitNumber": 1, "title": "a", "description": "d", "category": "marketing"},
                {"id": "m1", "kitNumber": 2, "title": "b", "description": "d", "category": "marketing"}
            ]"#,
        );
        match Catalog::from_json(&raw) {
            Err(CatalogError::DuplicateItem(id)) => assert_eq!(id, "m1"),
            other => panic!("expected duplicate item error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_category_config_rejected() {
        let categories = r##"[
            {"id": "marketing", "label": "a", "sublabel": "b", "color": "#fff", "bgColor": "#000"},
            {"id": "content", "label": "a", "sublabel": "b", "color": "#fff", "bgColor": "#000"}
        ]"##;
        let raw = catalog_json(categories, "[]");
        assert!(matches!(
            Catalog::from_json(&raw),
            Err(CatalogError::MissingCategory("branding"))
        ));
    }

    #[test]
    fn test_duplicate_category_config_rejected() {
        let categories = r##"[
            {"id": "marketing", "label": "a", "sublabel": "b", "color": "#fff", "bgColor": "#000"},
            {"id": "marketing", "label": "a", "sublabel": "b", "color": "#fff", "bgColor": "#000"}
        ]"##;
        let raw = catalog_json(categories, "[]");
        assert!(matches!(
            Catalog::from_json(&raw),
            Err(CatalogError::DuplicateCategory("marketing"))
        ));
    }

    #[test]
    fn test_item_lookup_by_id() {
        let catalog = Catalog::load().unwrap();
        let first = &catalog.items()[0];
        assert_eq!(catalog.item(&first.id), Some(first));
        assert_eq!(catalog.item("does-not-exist"), None);
    }
}
