use actix_web::{web::scope, Scope};
use web_adapters::user_routes;

pub fn get_routes() -> Scope {
    scope("/api")
        .service(health_check)
        .configure(user_routes)
}

#[actix_web::get("/health-check")]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json("Application is safe and healthy.")
}
