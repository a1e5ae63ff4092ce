use std::sync::Arc;

use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::employment::repositories::EmploymentInsuranceRateRepository;
use crate::modules::employment::services::EmploymentInsuranceCalculator;
use crate::modules::premiums::repositories::PremiumBracketRepository;
use crate::modules::premiums::services::{PremiumCalculator, CARE_MINIMUM_AGE};
use crate::modules::quotes::models::{CostDetail, SocialInsuranceQuote};
use crate::modules::withholding::models::TaxColumn;
use crate::modules::withholding::repositories::WithholdingTaxBracketRepository;
use crate::modules::withholding::services::WithholdingTaxResolver;

/// Business type assumed when the caller does not name one
pub const DEFAULT_BUSINESS_TYPE: &str = "general business";

/// Tunable policy knobs for the quote computation
#[derive(Debug, Clone)]
pub struct QuotePolicy {
    pub care_minimum_age: u32,
    pub tax_column: TaxColumn,
    pub default_business_type: String,
}

impl Default for QuotePolicy {
    fn default() -> Self {
        Self {
            care_minimum_age: CARE_MINIMUM_AGE,
            tax_column: TaxColumn::Ko,
            default_business_type: DEFAULT_BUSINESS_TYPE.to_string(),
        }
    }
}

/// Computes the full monthly deduction quote: social insurance premiums,
/// withholding tax on the net salary, and employment insurance.
pub struct SocialInsuranceQueryService {
    bracket_repo: Arc<dyn PremiumBracketRepository>,
    premium_calculator: PremiumCalculator,
    withholding_resolver: WithholdingTaxResolver,
    insurance_calculator: EmploymentInsuranceCalculator,
    default_business_type: String,
}

impl SocialInsuranceQueryService {
    pub fn new(
        bracket_repo: Arc<dyn PremiumBracketRepository>,
        withholding_repo: Arc<dyn WithholdingTaxBracketRepository>,
        rate_repo: Arc<dyn EmploymentInsuranceRateRepository>,
    ) -> Self {
        Self::with_policy(bracket_repo, withholding_repo, rate_repo, QuotePolicy::default())
    }

    pub fn with_policy(
        bracket_repo: Arc<dyn PremiumBracketRepository>,
        withholding_repo: Arc<dyn WithholdingTaxBracketRepository>,
        rate_repo: Arc<dyn EmploymentInsuranceRateRepository>,
        policy: QuotePolicy,
    ) -> Self {
        Self {
            bracket_repo,
            premium_calculator: PremiumCalculator::new(policy.care_minimum_age),
            withholding_resolver: WithholdingTaxResolver::new(withholding_repo, policy.tax_column),
            insurance_calculator: EmploymentInsuranceCalculator::new(rate_repo),
            default_business_type: policy.default_business_type,
        }
    }

    /// Quote the monthly deductions for one insured person.
    ///
    /// The premium chain (bracket lookup, 50% split, withholding on the
    /// net salary) and the employment insurance lookup hit independent
    /// tables, so they run concurrently.
    pub async fn quote(
        &self,
        monthly_salary: i32,
        age: u32,
        business_type: Option<&str>,
    ) -> Result<SocialInsuranceQuote> {
        let business_type = business_type
            .filter(|value| !value.is_empty())
            .unwrap_or(&self.default_business_type);

        tracing::info!(monthly_salary, age, business_type, "computing social insurance quote");

        let ((premium_halves, withholding_tax), insurance_shares) = tokio::try_join!(
            async {
                let bracket = self
                    .bracket_repo
                    .find_by_amount(monthly_salary)
                    .await?
                    .ok_or(AppError::BracketNotFound {
                        salary: monthly_salary,
                    })?;

                let halves = self.premium_calculator.totals(&bracket, age).halved();
                let net_salary = Decimal::from(monthly_salary) - halves.sum();
                let withholding_tax = self.withholding_resolver.resolve(net_salary).await?;

                Ok::<_, AppError>((halves, withholding_tax))
            },
            self.insurance_calculator.shares_for(business_type, monthly_salary),
        )?;

        // Premiums split 50/50, so the employer carries the same halves.
        // Withholding tax is borne by the employee alone.
        Ok(SocialInsuranceQuote {
            employee_cost: CostDetail {
                health_cost_with_no_care: premium_halves.health_no_care,
                care_cost: premium_halves.care,
                pension: premium_halves.pension,
                withholding_tax,
                employment_insurance: insurance_shares.employee,
            },
            employer_cost: CostDetail {
                health_cost_with_no_care: premium_halves.health_no_care,
                care_cost: premium_halves.care,
                pension: premium_halves.pension,
                withholding_tax: Decimal::ZERO,
                employment_insurance: insurance_shares.employer,
            },
        })
    }
}
