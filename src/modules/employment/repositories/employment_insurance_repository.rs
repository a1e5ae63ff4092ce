use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::Result;
use crate::modules::employment::models::EmploymentInsuranceRate;

/// Store of employment insurance rates keyed by business type
#[async_trait]
pub trait EmploymentInsuranceRateRepository: Send + Sync {
    async fn find_by_business_type(
        &self,
        business_type: &str,
    ) -> Result<Option<EmploymentInsuranceRate>>;

    async fn count(&self) -> Result<i64>;
}

pub struct PgEmploymentInsuranceRateRepository {
    pool: PgPool,
}

impl PgEmploymentInsuranceRateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmploymentInsuranceRateRepository for PgEmploymentInsuranceRateRepository {
    async fn find_by_business_type(
        &self,
        business_type: &str,
    ) -> Result<Option<EmploymentInsuranceRate>> {
        let rate = sqlx::query_as::<_, EmploymentInsuranceRate>(
            r#"
            SELECT id, business_type, employee_rate, employer_unemployment_rate,
                   employer_two_undertakings_rate, total_rate, created_at, updated_at
            FROM employment_insurance_rate
            WHERE business_type = $1
            "#,
        )
        .bind(business_type)
        .fetch_optional(&self.pool)
        .await?;

        Ok(rate)
    }

    async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employment_insurance_rate")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// In-memory implementation backing database-free tests
pub struct InMemoryEmploymentInsuranceRateRepository {
    rates: Vec<EmploymentInsuranceRate>,
}

impl InMemoryEmploymentInsuranceRateRepository {
    pub fn new(rates: Vec<EmploymentInsuranceRate>) -> Self {
        Self { rates }
    }
}

#[async_trait]
impl EmploymentInsuranceRateRepository for InMemoryEmploymentInsuranceRateRepository {
    async fn find_by_business_type(
        &self,
        business_type: &str,
    ) -> Result<Option<EmploymentInsuranceRate>> {
        Ok(self
            .rates
            .iter()
            .find(|rate| rate.business_type == business_type)
            .cloned())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.rates.len() as i64)
    }
}
