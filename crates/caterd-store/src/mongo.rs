// ABOUTME: MongoDB-backed ContentStore over the menu_items, site_settings, and admin_users collections.
// ABOUTME: Singleton and seed creation go through $setOnInsert upserts so check-then-act races resolve in the database.

use async_trait::async_trait;
use caterd_core::{
    AdminUser, CategoryCount, MenuItem, MenuItemPatch, SiteSettings, SiteSettingsPatch,
};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document, doc, to_bson, to_document};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};

use crate::{ContentStore, StoreError};

/// Fixed `_id` of the settings singleton. Writing through one well-known id
/// lets concurrent first reads race safely: the upsert is atomic server-side.
const SETTINGS_DOC_ID: &str = "site-settings";

/// ContentStore backed by an external MongoDB database reached via a
/// connection string and database name supplied at startup.
pub struct MongoStore {
    menu: Collection<MenuItem>,
    settings: Collection<SiteSettings>,
    admins: Collection<AdminUser>,
}

impl MongoStore {
    /// Connect to the given URI and open the named database.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self::new(&client.database(db_name)))
    }

    pub fn new(db: &Database) -> Self {
        Self {
            menu: db.collection("menu_items"),
            settings: db.collection("site_settings"),
            admins: db.collection("admin_users"),
        }
    }

    /// Create the unique indexes the consistency rules rely on: menu item ids
    /// and admin usernames. Idempotent; call once at startup.
    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let unique = IndexOptions::builder().unique(true).build();

        self.menu
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "id": 1 })
                    .options(unique.clone())
                    .build(),
            )
            .await?;
        self.admins
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "username": 1 })
                    .options(unique)
                    .build(),
            )
            .await?;

        Ok(())
    }

    /// Read the singleton, creating it from defaults atomically if absent.
    async fn ensure_settings(&self) -> Result<SiteSettings, StoreError> {
        if let Some(settings) = self.settings.find_one(doc! { "_id": SETTINGS_DOC_ID }).await? {
            return Ok(settings);
        }

        let defaults = SiteSettings::default();
        let mut on_insert = to_document(&defaults)?;
        on_insert.insert("_id", SETTINGS_DOC_ID);

        // $setOnInsert is a no-op if another request won the race.
        self.settings
            .update_one(
                doc! { "_id": SETTINGS_DOC_ID },
                doc! { "$setOnInsert": on_insert },
            )
            .upsert(true)
            .await?;

        tracing::info!("site settings singleton materialized with defaults");

        match self.settings.find_one(doc! { "_id": SETTINGS_DOC_ID }).await? {
            Some(settings) => Ok(settings),
            None => Ok(defaults),
        }
    }
}

#[async_trait]
impl ContentStore for MongoStore {
    async fn list_menu(&self, only_available: bool) -> Result<Vec<MenuItem>, StoreError> {
        let filter = if only_available {
            doc! { "available": true }
        } else {
            doc! {}
        };
        Ok(self.menu.find(filter).await?.try_collect().await?)
    }

    async fn category_summary(&self) -> Result<Vec<CategoryCount>, StoreError> {
        let pipeline = vec![
            doc! { "$match": { "available": true } },
            doc! { "$group": { "_id": "$category", "count": { "$sum": 1 } } },
            doc! { "$sort": { "_id": 1 } },
        ];

        let mut cursor = self.menu.aggregate(pipeline).await?;
        let mut summary = Vec::new();
        while let Some(row) = cursor.try_next().await? {
            summary.push(CategoryCount {
                name: row.get_str("_id").unwrap_or_default().to_string(),
                count: group_count(&row),
            });
        }
        Ok(summary)
    }

    async fn insert_menu_item(&self, item: &MenuItem) -> Result<(), StoreError> {
        self.menu.insert_one(item).await?;
        Ok(())
    }

    async fn update_menu_item(
        &self,
        id: &str,
        patch: &MenuItemPatch,
    ) -> Result<Option<MenuItem>, StoreError> {
        if self.menu.find_one(doc! { "id": id }).await?.is_none() {
            return Ok(None);
        }

        let mut set = to_document(patch)?;
        set.insert("updated_at", to_bson(&Utc::now())?);
        self.menu
            .update_one(doc! { "id": id }, doc! { "$set": set })
            .await?;

        Ok(self.menu.find_one(doc! { "id": id }).await?)
    }

    async fn delete_menu_item(&self, id: &str) -> Result<bool, StoreError> {
        let result = self.menu.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn site_settings(&self) -> Result<SiteSettings, StoreError> {
        self.ensure_settings().await
    }

    async fn update_site_settings(
        &self,
        patch: &SiteSettingsPatch,
    ) -> Result<SiteSettings, StoreError> {
        self.ensure_settings().await?;

        let mut set = to_document(patch)?;
        set.insert("updated_at", to_bson(&Utc::now())?);
        self.settings
            .update_one(doc! { "_id": SETTINGS_DOC_ID }, doc! { "$set": set })
            .await?;

        match self.settings.find_one(doc! { "_id": SETTINGS_DOC_ID }).await? {
            Some(settings) => Ok(settings),
            None => self.ensure_settings().await,
        }
    }

    async fn find_admin(&self, username: &str) -> Result<Option<AdminUser>, StoreError> {
        Ok(self.admins.find_one(doc! { "username": username }).await?)
    }

    async fn ensure_admin(&self, user: &AdminUser) -> Result<bool, StoreError> {
        let on_insert = to_document(user)?;
        let result = self
            .admins
            .update_one(
                doc! { "username": &user.username },
                doc! { "$setOnInsert": on_insert },
            )
            .upsert(true)
            .await?;
        Ok(result.upserted_id.is_some())
    }
}

/// `$sum: 1` comes back as Int32 until the count overflows, then Int64.
fn group_count(row: &Document) -> u64 {
    match row.get("count") {
        Some(Bson::Int32(n)) => *n as u64,
        Some(Bson::Int64(n)) => *n as u64,
        Some(Bson::Double(n)) => *n as u64,
        _ => 0,
    }
}
