use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_docs::{ApiDoc, OPENAPI_JSON_PATH};
use crate::handlers::{self, error};

pub const API_PREFIX: &str = "/api/v1";

/// Registers the versioned API, its docs and the extractor error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(
            web::scope(API_PREFIX)
                .route("/hotels", web::get().to(handlers::hotels::get_hotels))
                .route(
                    "/hotel/{hotel_id}",
                    web::get().to(handlers::hotels::get_hotel_by_id),
                )
                .route(
                    "/hotels/{hotel_id}/rooms",
                    web::get().to(handlers::rooms::get_rooms),
                )
                .route(
                    "/hotels/{hotel_id}/rooms/{room_id}",
                    web::get().to(handlers::rooms::get_room_by_id),
                )
                .route("/price", web::post().to(handlers::pricing::calculate_price)),
        )
        .service(SwaggerUi::new("/swagger-ui/{_:.*}").url(OPENAPI_JSON_PATH, ApiDoc::openapi()));
}
