use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Row shape shared by the four reference tables products point at.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Lookup {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Color {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub hex_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The lookup tables, so queries name a variant instead of passing table
/// names around as ad hoc strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupKind {
    Categories,
    Modalities,
    Types,
    Shapes,
}

impl LookupKind {
    pub fn table(&self) -> &'static str {
        match self {
            LookupKind::Categories => "categories",
            LookupKind::Modalities => "modalities",
            LookupKind::Types => "types",
            LookupKind::Shapes => "shapes",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateLookupRequest {
    pub name: String,
    pub description: Option<String>,
}

impl CreateLookupRequest {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("name must not be blank".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateColorRequest {
    pub name: String,
    pub description: Option<String>,
    pub hex_code: Option<String>,
}

impl CreateColorRequest {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("name must not be blank".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_kind_tables() {
        assert_eq!(LookupKind::Categories.table(), "categories");
        assert_eq!(LookupKind::Modalities.table(), "modalities");
        assert_eq!(LookupKind::Types.table(), "types");
        assert_eq!(LookupKind::Shapes.table(), "shapes");
    }

    #[test]
    fn test_lookup_kind_from_path_segment() {
        let kind: LookupKind = serde_json::from_value(serde_json::json!("modalities")).unwrap();
        assert_eq!(kind, LookupKind::Modalities);

        assert!(serde_json::from_value::<LookupKind>(serde_json::json!("orders")).is_err());
    }

    #[test]
    fn test_blank_name_rejected() {
        let req = CreateLookupRequest {
            name: "  ".to_string(),
            description: None,
        };
        assert!(matches!(req.validate(), Err(AppError::BadRequest(_))));

        let req = CreateColorRequest {
            name: String::new(),
            description: None,
            hex_code: Some("#ff0000".to_string()),
        };
        assert!(matches!(req.validate(), Err(AppError::BadRequest(_))));
    }
}
