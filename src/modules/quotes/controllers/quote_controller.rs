use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::modules::quotes::services::SocialInsuranceQueryService;

/// Query parameters for the quote endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialInsuranceQueryParams {
    pub monthly_salary: i32,
    pub age: u32,
    pub business_type: Option<String>,
}

/// Quote the monthly social insurance deductions
/// GET /socialInsuranceQuery
pub async fn social_insurance_query(
    service: web::Data<Arc<SocialInsuranceQueryService>>,
    query: web::Query<SocialInsuranceQueryParams>,
    req: HttpRequest,
) -> HttpResponse {
    let params = query.into_inner();
    let result = service
        .quote(params.monthly_salary, params.age, params.business_type.as_deref())
        .await;

    match result {
        Ok(quote) => HttpResponse::Ok().json(quote),
        Err(err) => err.to_response(req.path()),
    }
}

/// Configure quote routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/socialInsuranceQuery", web::get().to(social_insurance_query));
}
