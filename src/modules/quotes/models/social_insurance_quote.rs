use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly deduction breakdown for one side of the employment relationship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostDetail {
    pub health_cost_with_no_care: Decimal,
    pub care_cost: Decimal,
    pub pension: Decimal,
    pub withholding_tax: Decimal,
    pub employment_insurance: Decimal,
}

/// Full quote: what the employee bears and what the employer bears
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialInsuranceQuote {
    pub employee_cost: CostDetail,
    pub employer_cost: CostDetail,
}
