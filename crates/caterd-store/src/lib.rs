// ABOUTME: Persistence layer for caterd: the ContentStore trait over the three document collections.
// ABOUTME: Ships a MongoDB-backed production store and an in-memory double for tests.

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use caterd_core::{
    AdminUser, CategoryCount, MenuItem, MenuItemPatch, SiteSettings, SiteSettingsPatch,
};
use thiserror::Error;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Errors surfaced by store implementations. Handlers treat these as opaque
/// server failures; there is no retry logic anywhere above this layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),
}

/// The injected store handle every component talks through. One implementor
/// per backend; handlers never see a driver type. Each operation touches at
/// most one document, so the backend's per-document atomicity is all the
/// coordination this system has.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// All menu items, or only those with `available == true`. Store-native order.
    async fn list_menu(&self, only_available: bool) -> Result<Vec<MenuItem>, StoreError>;

    /// Available items grouped by category, sorted ascending by category name.
    async fn category_summary(&self) -> Result<Vec<CategoryCount>, StoreError>;

    async fn insert_menu_item(&self, item: &MenuItem) -> Result<(), StoreError>;

    /// Apply a partial update. Returns `None` when no item has the given id.
    async fn update_menu_item(
        &self,
        id: &str,
        patch: &MenuItemPatch,
    ) -> Result<Option<MenuItem>, StoreError>;

    /// Hard delete. Returns `false` when no item has the given id.
    async fn delete_menu_item(&self, id: &str) -> Result<bool, StoreError>;

    /// The settings singleton; materializes defaults on first read.
    async fn site_settings(&self) -> Result<SiteSettings, StoreError>;

    /// Partial update of the singleton, materializing defaults first if absent.
    async fn update_site_settings(
        &self,
        patch: &SiteSettingsPatch,
    ) -> Result<SiteSettings, StoreError>;

    async fn find_admin(&self, username: &str) -> Result<Option<AdminUser>, StoreError>;

    /// Seed the credential if no record with its username exists. Returns
    /// `true` when this call created it.
    async fn ensure_admin(&self, user: &AdminUser) -> Result<bool, StoreError>;
}
