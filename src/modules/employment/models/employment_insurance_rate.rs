use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Employment insurance contribution rates for one business type.
/// Rates are per-mille of the monthly salary.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct EmploymentInsuranceRate {
    pub id: Option<i64>,
    pub business_type: String,
    pub employee_rate: Decimal,
    pub employer_unemployment_rate: Decimal,
    pub employer_two_undertakings_rate: Decimal,
    pub total_rate: Decimal,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl EmploymentInsuranceRate {
    pub fn new(
        business_type: impl Into<String>,
        employee_rate: Decimal,
        employer_unemployment_rate: Decimal,
        employer_two_undertakings_rate: Decimal,
    ) -> Self {
        Self {
            id: None,
            business_type: business_type.into(),
            employee_rate,
            employer_unemployment_rate,
            employer_two_undertakings_rate,
            total_rate: employee_rate + employer_unemployment_rate + employer_two_undertakings_rate,
            created_at: None,
            updated_at: None,
        }
    }

    /// Combined employer-side rate: unemployment benefits plus the
    /// two-undertakings levy
    pub fn employer_rate(&self) -> Decimal {
        self.employer_unemployment_rate + self.employer_two_undertakings_rate
    }
}
