mod admin_lookups;
mod admin_pages;
mod admin_products;
mod admin_site_config;
mod catalog;
mod health;
mod login;
mod marquee;
mod pages;
mod session;
mod whatsapp;

use axum::{
    middleware::from_fn,
    routing::{delete, get, post, put},
    Router,
};

use crate::{
    middleware::{admin_middleware, auth_middleware},
    AppState,
};

pub fn create_router() -> Router<AppState> {
    let admin = Router::new()
        .route(
            "/products",
            get(admin_products::list_products).post(admin_products::save_product),
        )
        .route("/products/{id}", delete(admin_products::delete_product))
        .route(
            "/images/upload-urls",
            post(admin_products::generate_image_upload_urls),
        )
        .route(
            "/lookups/{kind}",
            get(admin_lookups::list_lookup).post(admin_lookups::create_lookup),
        )
        .route(
            "/colors",
            get(admin_lookups::list_colors).post(admin_lookups::create_color),
        )
        .route(
            "/pages",
            get(admin_pages::list_pages).post(admin_pages::save_page),
        )
        .route("/pages/{slug}", delete(admin_pages::delete_page))
        .route("/marquee", put(admin_site_config::save_marquee))
        .route(
            "/whatsapp",
            get(admin_site_config::get_whatsapp).put(admin_site_config::save_whatsapp),
        )
        .layer(from_fn(admin_middleware));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/catalog", get(catalog::search_catalog))
        .route("/catalog/filters", get(catalog::get_filter_options))
        .route("/products/{id}", get(catalog::get_product))
        .route("/products/{id}/whatsapp-link", get(whatsapp::order_link))
        .route("/pages/{slug}", get(pages::get_page))
        .route("/menu", get(pages::get_menu))
        .route("/marquee", get(marquee::get_marquee))
        .route("/auth/login", post(login::login_user))
        .route(
            "/auth/session",
            get(session::get_session).route_layer(from_fn(auth_middleware)),
        )
        .nest("/admin", admin)
}
