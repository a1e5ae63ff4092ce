use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::core::AppError;
use crate::modules::employment::repositories::EmploymentInsuranceRateRepository;
use crate::modules::premiums::repositories::PremiumBracketRepository;
use crate::modules::withholding::repositories::WithholdingTaxBracketRepository;

/// One applied migration as recorded by the migration runner
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AppliedMigration {
    pub version: i64,
    pub description: String,
    pub installed_on: DateTime<Utc>,
    pub success: bool,
    pub execution_time: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MigrationStatusResponse {
    pub migrations: Vec<AppliedMigration>,
}

/// Row counts of the three reference tables every quote depends on
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceDataCounts {
    pub premium_brackets: i64,
    pub withholding_tax_brackets: i64,
    pub employment_insurance_rates: i64,
}

/// Report which migrations have been applied
/// GET /admin/check/migration-status
pub async fn migration_status(pool: web::Data<PgPool>, req: HttpRequest) -> HttpResponse {
    let result = sqlx::query_as::<_, AppliedMigration>(
        r#"
        SELECT version, description, installed_on, success, execution_time
        FROM _sqlx_migrations
        ORDER BY version ASC
        "#,
    )
    .fetch_all(pool.get_ref())
    .await;

    match result {
        Ok(migrations) => HttpResponse::Ok().json(MigrationStatusResponse { migrations }),
        Err(err) => AppError::Database(err).to_response(req.path()),
    }
}

/// Report the reference table row counts
/// GET /admin/check/reference-data
pub async fn reference_data(
    bracket_repo: web::Data<Arc<dyn PremiumBracketRepository>>,
    withholding_repo: web::Data<Arc<dyn WithholdingTaxBracketRepository>>,
    rate_repo: web::Data<Arc<dyn EmploymentInsuranceRateRepository>>,
    req: HttpRequest,
) -> HttpResponse {
    let counts = tokio::try_join!(
        bracket_repo.count(),
        withholding_repo.count(),
        rate_repo.count(),
    );

    match counts {
        Ok((premium_brackets, withholding_tax_brackets, employment_insurance_rates)) => {
            HttpResponse::Ok().json(ReferenceDataCounts {
                premium_brackets,
                withholding_tax_brackets,
                employment_insurance_rates,
            })
        }
        Err(err) => err.to_response(req.path()),
    }
}

/// Configure admin check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin/check")
            .route("/migration-status", web::get().to(migration_status))
            .route("/reference-data", web::get().to(reference_data)),
    );
}
