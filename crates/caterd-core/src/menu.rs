// ABOUTME: Defines the MenuItem record plus its create-draft and partial-update shapes.
// ABOUTME: Patch application and category summarization live here so both store backends share them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A purchasable catalog entry shown to end users.
/// The `id` is assigned at creation and never changes; `updated_at >= created_at` always.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub available: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a menu item. No id; the store assigns one.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn default_available() -> bool {
    true
}

/// Partial update for a menu item. `None` fields (absent or JSON null) are
/// left untouched on the stored record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// One row of the public category summary: a category name and how many
/// available items it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: u64,
}

impl MenuItem {
    /// Materialize a draft into a stored record: fresh uuid, both timestamps set to now.
    pub fn create(draft: MenuItemDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            available: draft.available,
            image_url: draft.image_url,
            created_at: now,
            updated_at: now,
        }
    }
}

impl MenuItemPatch {
    /// Apply the present fields to `item` and refresh its updated timestamp.
    /// Absent fields keep their prior values.
    pub fn apply(&self, item: &mut MenuItem) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(category) = &self.category {
            item.category = category.clone();
        }
        if let Some(available) = self.available {
            item.available = available;
        }
        if let Some(image_url) = &self.image_url {
            item.image_url = Some(image_url.clone());
        }
        item.updated_at = Utc::now();
    }
}

/// Group available items by category, sorted ascending by category name.
pub fn summarize_categories(items: &[MenuItem]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for item in items.iter().filter(|i| i.available) {
        *counts.entry(item.category.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(name, count)| CategoryCount {
            name: name.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, category: &str) -> MenuItemDraft {
        MenuItemDraft {
            name: name.to_string(),
            description: "d".to_string(),
            price: 5.5,
            category: category.to_string(),
            available: true,
            image_url: None,
        }
    }

    #[test]
    fn create_assigns_id_and_timestamps() {
        let item = MenuItem::create(draft("Soup", "Starters"));

        assert!(!item.id.is_empty());
        assert!(item.available);
        assert_eq!(item.created_at, item.updated_at);

        let other = MenuItem::create(draft("Soup", "Starters"));
        assert_ne!(item.id, other.id, "ids must be unique");
    }

    #[test]
    fn draft_defaults_available_when_omitted() {
        let parsed: MenuItemDraft = serde_json::from_str(
            r#"{"name":"Soup","description":"d","price":5.5,"category":"Starters"}"#,
        )
        .unwrap();

        assert!(parsed.available);
        assert!(parsed.image_url.is_none());
    }

    #[test]
    fn patch_touches_only_present_fields() {
        let mut item = MenuItem::create(draft("Soup", "Starters"));
        let before = item.clone();

        let patch = MenuItemPatch {
            price: Some(6.0),
            ..Default::default()
        };
        patch.apply(&mut item);

        assert_eq!(item.price, 6.0);
        assert_eq!(item.name, before.name);
        assert_eq!(item.description, before.description);
        assert_eq!(item.category, before.category);
        assert_eq!(item.available, before.available);
        assert_eq!(item.created_at, before.created_at);
        assert!(item.updated_at >= before.updated_at);
    }

    #[test]
    fn patch_with_json_null_leaves_field_untouched() {
        let patch: MenuItemPatch =
            serde_json::from_str(r#"{"name":null,"price":6.0}"#).unwrap();

        let mut item = MenuItem::create(draft("Soup", "Starters"));
        patch.apply(&mut item);

        assert_eq!(item.name, "Soup", "null is not unset");
        assert_eq!(item.price, 6.0);
    }

    #[test]
    fn summarize_counts_available_items_sorted_by_name() {
        let mut hidden = MenuItem::create(draft("Old", "Starters"));
        hidden.available = false;

        let items = vec![
            MenuItem::create(draft("Soup", "Starters")),
            MenuItem::create(draft("Cake", "Desserts")),
            MenuItem::create(draft("Salad", "Starters")),
            hidden,
        ];

        let summary = summarize_categories(&items);
        assert_eq!(
            summary,
            vec![
                CategoryCount {
                    name: "Desserts".to_string(),
                    count: 1
                },
                CategoryCount {
                    name: "Starters".to_string(),
                    count: 2
                },
            ]
        );
    }
}
