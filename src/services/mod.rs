pub mod image_url_service;
pub mod sanitize_service;
pub mod whatsapp_service;
