// ABOUTME: The site settings singleton record holding all editable marketing and contact copy.
// ABOUTME: Defaults carry the stock site text; partial updates overwrite only the supplied fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The singleton record of editable site copy. At most one instance exists in
/// the store; it is materialized with these defaults on first read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    pub business_name: String,
    pub hero_title: String,
    pub hero_description: String,
    pub menu_title: String,
    pub menu_description: String,
    pub about_title: String,
    pub about_description: String,
    pub contact_phone1: String,
    pub contact_phone2: String,
    pub contact_email1: String,
    pub contact_email2: String,
    pub contact_address1: String,
    pub contact_address2: String,
    pub footer_text: String,
    pub updated_at: DateTime<Utc>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            business_name: "Gourmet Catering".to_string(),
            hero_title: "Exquisite Catering Services".to_string(),
            hero_description: "Creating unforgettable culinary experiences for your special \
                events. From intimate gatherings to grand celebrations, we bring gourmet \
                flavors to your table."
                .to_string(),
            menu_title: "Our Menu".to_string(),
            menu_description: "Crafted with the finest ingredients and culinary expertise"
                .to_string(),
            about_title: "About Gourmet Catering".to_string(),
            about_description: "With over 15 years of culinary excellence, we specialize in \
                creating memorable dining experiences that perfectly complement your special \
                occasions. Our team of expert chefs combines traditional techniques with \
                modern flavors to deliver exceptional catering services."
                .to_string(),
            contact_phone1: "(555) 123-4567".to_string(),
            contact_phone2: "(555) 987-6543".to_string(),
            contact_email1: "info@gourmetcatering.com".to_string(),
            contact_email2: "orders@gourmetcatering.com".to_string(),
            contact_address1: "123 Culinary Street".to_string(),
            contact_address2: "Foodie City, FC 12345".to_string(),
            footer_text: "© 2024 Gourmet Catering. All rights reserved.".to_string(),
            updated_at: Utc::now(),
        }
    }
}

/// Partial update for the settings singleton. Same semantics as the menu
/// patch: `None` fields stay untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteSettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_text: Option<String>,
}

impl SiteSettingsPatch {
    /// Apply the present fields and refresh the updated timestamp.
    pub fn apply(&self, settings: &mut SiteSettings) {
        macro_rules! set_if_present {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(value) = &self.$field {
                        settings.$field = value.clone();
                    }
                )*
            };
        }
        set_if_present!(
            business_name,
            hero_title,
            hero_description,
            menu_title,
            menu_description,
            about_title,
            about_description,
            contact_phone1,
            contact_phone2,
            contact_email1,
            contact_email2,
            contact_address1,
            contact_address2,
            footer_text,
        );
        settings.updated_at = Utc::now();
    }
}
