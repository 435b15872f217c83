// ABOUTME: In-memory ContentStore used as a test double by handler and smoke tests.
// ABOUTME: A single RwLock over plain maps; no test needs a live database.

use std::collections::HashMap;

use async_trait::async_trait;
use caterd_core::{
    AdminUser, CategoryCount, MenuItem, MenuItemPatch, SiteSettings, SiteSettingsPatch,
    summarize_categories,
};
use tokio::sync::RwLock;

use crate::{ContentStore, StoreError};

#[derive(Default)]
struct Inner {
    menu: HashMap<String, MenuItem>,
    settings: Option<SiteSettings>,
    admins: HashMap<String, AdminUser>,
}

/// ContentStore holding everything in process memory. Mirrors the production
/// store's semantics, including settings create-on-read and seed-if-absent.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn list_menu(&self, only_available: bool) -> Result<Vec<MenuItem>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .menu
            .values()
            .filter(|item| !only_available || item.available)
            .cloned()
            .collect())
    }

    async fn category_summary(&self) -> Result<Vec<CategoryCount>, StoreError> {
        let inner = self.inner.read().await;
        let items: Vec<MenuItem> = inner.menu.values().cloned().collect();
        Ok(summarize_categories(&items))
    }

    async fn insert_menu_item(&self, item: &MenuItem) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.menu.insert(item.id.clone(), item.clone());
        Ok(())
    }

    async fn update_menu_item(
        &self,
        id: &str,
        patch: &MenuItemPatch,
    ) -> Result<Option<MenuItem>, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.menu.get_mut(id) {
            Some(item) => {
                patch.apply(item);
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_menu_item(&self, id: &str) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.menu.remove(id).is_some())
    }

    async fn site_settings(&self) -> Result<SiteSettings, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.settings.get_or_insert_with(SiteSettings::default).clone())
    }

    async fn update_site_settings(
        &self,
        patch: &SiteSettingsPatch,
    ) -> Result<SiteSettings, StoreError> {
        let mut inner = self.inner.write().await;
        let settings = inner.settings.get_or_insert_with(SiteSettings::default);
        patch.apply(settings);
        Ok(settings.clone())
    }

    async fn find_admin(&self, username: &str) -> Result<Option<AdminUser>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.admins.get(username).cloned())
    }

    async fn ensure_admin(&self, user: &AdminUser) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.admins.contains_key(&user.username) {
            return Ok(false);
        }
        inner.admins.insert(user.username.clone(), user.clone());
        Ok(true)
    }
}
