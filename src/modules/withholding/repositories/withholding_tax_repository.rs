use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::core::Result;
use crate::modules::withholding::models::WithholdingTaxBracket;

/// Store of the monthly withholding tax table
#[async_trait]
pub trait WithholdingTaxBracketRepository: Send + Sync {
    /// First bracket whose inclusive range contains the net salary,
    /// in table order
    async fn find_by_amount(&self, amount: Decimal) -> Result<Option<WithholdingTaxBracket>>;

    async fn count(&self) -> Result<i64>;
}

pub struct PgWithholdingTaxBracketRepository {
    pool: PgPool,
}

impl PgWithholdingTaxBracketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WithholdingTaxBracketRepository for PgWithholdingTaxBracketRepository {
    async fn find_by_amount(&self, amount: Decimal) -> Result<Option<WithholdingTaxBracket>> {
        let bracket = sqlx::query_as::<_, WithholdingTaxBracket>(
            r#"
            SELECT id, min_amount, max_amount, tax_amount_ko, tax_amount_otsu,
                   calculation_formula, created_at, updated_at
            FROM withholding_tax_bracket
            WHERE min_amount <= $1 AND max_amount >= $1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(amount)
        .fetch_optional(&self.pool)
        .await?;

        Ok(bracket)
    }

    async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM withholding_tax_bracket")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// In-memory implementation backing database-free tests
pub struct InMemoryWithholdingTaxBracketRepository {
    brackets: Vec<WithholdingTaxBracket>,
}

impl InMemoryWithholdingTaxBracketRepository {
    pub fn new(brackets: Vec<WithholdingTaxBracket>) -> Self {
        Self { brackets }
    }
}

#[async_trait]
impl WithholdingTaxBracketRepository for InMemoryWithholdingTaxBracketRepository {
    async fn find_by_amount(&self, amount: Decimal) -> Result<Option<WithholdingTaxBracket>> {
        Ok(self
            .brackets
            .iter()
            .find(|bracket| bracket.contains(amount))
            .cloned())
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.brackets.len() as i64)
    }
}
