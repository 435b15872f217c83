// ABOUTME: Domain types and pure logic for the caterd content API.
// ABOUTME: Menu items, the site settings singleton, admin credentials, and patch application.

pub mod admin;
pub mod menu;
pub mod settings;

pub use admin::AdminUser;
pub use menu::{CategoryCount, MenuItem, MenuItemDraft, MenuItemPatch, summarize_categories};
pub use settings::{SiteSettings, SiteSettingsPatch};
