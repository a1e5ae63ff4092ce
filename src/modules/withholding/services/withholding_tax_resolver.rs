use std::sync::Arc;

use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::withholding::models::TaxColumn;
use crate::modules::withholding::repositories::WithholdingTaxBracketRepository;

/// Resolves the monthly withholding tax for a net salary
pub struct WithholdingTaxResolver {
    bracket_repo: Arc<dyn WithholdingTaxBracketRepository>,
    tax_column: TaxColumn,
}

impl WithholdingTaxResolver {
    pub fn new(bracket_repo: Arc<dyn WithholdingTaxBracketRepository>, tax_column: TaxColumn) -> Self {
        Self {
            bracket_repo,
            tax_column,
        }
    }

    /// Withholding tax on the salary net of the employee social-insurance
    /// share. The lookup uses the exact net amount, fractional yen included.
    pub async fn resolve(&self, net_salary: Decimal) -> Result<Decimal> {
        let bracket = self
            .bracket_repo
            .find_by_amount(net_salary)
            .await?
            .ok_or(AppError::WithholdingBracketNotFound { net_salary })?;

        Ok(bracket.tax_amount(self.tax_column))
    }
}
