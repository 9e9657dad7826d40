use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Scrolling banner configuration. Single row, fixed id 1.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MarqueeConfig {
    pub id: i32,
    pub message: Option<String>,
    pub color: Option<String>,
    pub background_color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SaveMarqueeRequest {
    pub message: String,
    pub color: String,
    pub background_color: String,
}

/// WhatsApp checkout configuration. Single row, fixed id 1.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WhatsappConfig {
    pub id: i32,
    pub phone_number: String,
    pub default_message: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveWhatsappRequest {
    pub phone_number: String,
    pub default_message: String,
}

impl SaveWhatsappRequest {
    pub fn validate(&self) -> Result<()> {
        if !self.phone_number.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::BadRequest(
                "phone_number must contain digits".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct OrderLinkResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_phone_needs_digits() {
        let req = SaveWhatsappRequest {
            phone_number: "+--".to_string(),
            default_message: String::new(),
        };
        assert!(matches!(req.validate(), Err(AppError::BadRequest(_))));

        let req = SaveWhatsappRequest {
            phone_number: "+52 1 555 123 4567".to_string(),
            default_message: "Hola!".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
