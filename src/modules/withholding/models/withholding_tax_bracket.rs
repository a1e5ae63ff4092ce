use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Which column of the monthly withholding table applies.
/// Ko is the main-employer column, Otsu the secondary-employer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxColumn {
    Ko,
    Otsu,
}

/// One row of the monthly withholding tax table
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct WithholdingTaxBracket {
    pub id: Option<i64>,
    pub min_amount: i32,
    pub max_amount: i32,
    pub tax_amount_ko: Option<i32>,
    pub tax_amount_otsu: Option<i32>,
    pub calculation_formula: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl WithholdingTaxBracket {
    pub fn new(
        min_amount: i32,
        max_amount: i32,
        tax_amount_ko: Option<i32>,
        tax_amount_otsu: Option<i32>,
    ) -> Self {
        Self {
            id: None,
            min_amount,
            max_amount,
            tax_amount_ko,
            tax_amount_otsu,
            calculation_formula: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Both bounds are inclusive; the net salary is compared as-is,
    /// fractional yen included
    pub fn contains(&self, amount: Decimal) -> bool {
        Decimal::from(self.min_amount) <= amount && amount <= Decimal::from(self.max_amount)
    }

    /// Tax amount for the requested column. Rows above the fixed table
    /// carry a calculation formula note instead of an amount and report
    /// zero here.
    pub fn tax_amount(&self, column: TaxColumn) -> Decimal {
        let amount = match column {
            TaxColumn::Ko => self.tax_amount_ko,
            TaxColumn::Otsu => self.tax_amount_otsu,
        };
        amount.map(Decimal::from).unwrap_or(Decimal::ZERO)
    }
}
