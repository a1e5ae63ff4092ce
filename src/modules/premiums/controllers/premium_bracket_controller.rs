use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::modules::premiums::models::NewPremiumBracket;
use crate::modules::premiums::services::PremiumBracketService;

/// List every premium bracket ordered by standard remuneration
/// GET /premiumBrackets
pub async fn list_brackets(
    service: web::Data<Arc<PremiumBracketService>>,
    req: HttpRequest,
) -> HttpResponse {
    match service.list_brackets().await {
        Ok(brackets) => HttpResponse::Ok().json(brackets),
        Err(err) => err.to_response(req.path()),
    }
}

/// Look up one bracket by grade
/// GET /premiumBrackets/{grade}
pub async fn get_bracket(
    service: web::Data<Arc<PremiumBracketService>>,
    path: web::Path<String>,
    req: HttpRequest,
) -> HttpResponse {
    let grade = path.into_inner();
    match service.get_bracket(&grade).await {
        Ok(bracket) => HttpResponse::Ok().json(bracket),
        Err(err) => err.to_response(req.path()),
    }
}

/// Replace the bracket table with a new yearly revision
/// PUT /admin/premiumBrackets
pub async fn replace_brackets(
    service: web::Data<Arc<PremiumBracketService>>,
    payload: web::Json<Vec<NewPremiumBracket>>,
    req: HttpRequest,
) -> HttpResponse {
    match service.replace_brackets(payload.into_inner()).await {
        Ok(loaded) => HttpResponse::Ok().json(json!({ "loaded": loaded })),
        Err(err) => err.to_response(req.path()),
    }
}

/// Configure premium bracket routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/premiumBrackets", web::get().to(list_brackets))
        .route("/premiumBrackets/{grade}", web::get().to(get_bracket))
        .route("/admin/premiumBrackets", web::put().to(replace_brackets));
}
