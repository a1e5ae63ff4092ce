use std::sync::Arc;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::{AppError, Result};
use crate::modules::employment::models::EmploymentInsuranceRate;
use crate::modules::employment::repositories::EmploymentInsuranceRateRepository;

/// Monthly employment insurance contributions split between the parties
#[derive(Debug, Clone, PartialEq)]
pub struct EmploymentInsuranceShares {
    pub employee: Decimal,
    pub employer: Decimal,
}

/// Computes employment insurance contributions from the per-mille rate table
pub struct EmploymentInsuranceCalculator {
    rate_repo: Arc<dyn EmploymentInsuranceRateRepository>,
}

impl EmploymentInsuranceCalculator {
    pub fn new(rate_repo: Arc<dyn EmploymentInsuranceRateRepository>) -> Self {
        Self { rate_repo }
    }

    /// Look up the rate row for `business_type` and compute both shares
    pub async fn shares_for(
        &self,
        business_type: &str,
        salary: i32,
    ) -> Result<EmploymentInsuranceShares> {
        let rate = self
            .rate_repo
            .find_by_business_type(business_type)
            .await?
            .ok_or_else(|| AppError::RateNotFound {
                business_type: business_type.to_string(),
            })?;

        Ok(Self::shares(salary, &rate))
    }

    /// Each share is salary times the per-mille rate, rounded to whole sen
    /// independently of the other
    pub fn shares(salary: i32, rate: &EmploymentInsuranceRate) -> EmploymentInsuranceShares {
        let salary = Decimal::from(salary);
        EmploymentInsuranceShares {
            employee: round2(salary * rate.employee_rate / Decimal::ONE_THOUSAND),
            employer: round2(salary * rate.employer_rate() / Decimal::ONE_THOUSAND),
        }
    }
}

/// Half-up rounding to two decimal places
fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
