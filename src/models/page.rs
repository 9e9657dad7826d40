use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PageConfiguration {
    pub id: i32,
    pub page_name: String,
    pub title: String,
    pub content: String,
    pub show_in_menu: bool,
    pub whatsapp_link: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// What the public page view needs; content is already sanitized at save time.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct PublicPage {
    pub title: String,
    pub content: String,
    pub whatsapp_link: Option<String>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct MenuEntry {
    pub page_name: String,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct SavePageRequest {
    pub page_name: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub show_in_menu: bool,
    pub whatsapp_link: Option<String>,
}

impl SavePageRequest {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::BadRequest("title is required".to_string()));
        }
        if self.page_name.trim().is_empty() {
            return Err(AppError::BadRequest("page_name is required".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_page_requires_title_and_slug() {
        let req = SavePageRequest {
            page_name: "sobre-nosotros".to_string(),
            title: String::new(),
            content: "<p>hola</p>".to_string(),
            show_in_menu: true,
            whatsapp_link: None,
        };
        assert!(matches!(req.validate(), Err(AppError::BadRequest(_))));

        let req = SavePageRequest {
            page_name: " ".to_string(),
            title: "Sobre nosotros".to_string(),
            content: String::new(),
            show_in_menu: false,
            whatsapp_link: None,
        };
        assert!(matches!(req.validate(), Err(AppError::BadRequest(_))));
    }
}
