use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::core::Result;
use crate::modules::premiums::models::{NewPremiumBracket, PremiumBracket};

/// Read-mostly store of the standard-remuneration premium table
#[async_trait]
pub trait PremiumBracketRepository: Send + Sync {
    /// Resolve the bracket whose inclusive range contains `amount`.
    /// When boundary amounts match more than one bracket, the bracket with
    /// the greatest `min_amount` wins.
    async fn find_by_amount(&self, amount: i32) -> Result<Option<PremiumBracket>>;

    async fn find_by_grade(&self, grade: &str) -> Result<Option<PremiumBracket>>;

    /// All brackets ordered by standard remuneration ascending
    async fn find_all(&self) -> Result<Vec<PremiumBracket>>;

    async fn count(&self) -> Result<i64>;

    /// Administrative bulk load: replace the whole table in one transaction
    async fn replace_all(&self, brackets: &[NewPremiumBracket]) -> Result<u64>;
}

pub struct PgPremiumBracketRepository {
    pool: PgPool,
}

impl PgPremiumBracketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PremiumBracketRepository for PgPremiumBracketRepository {
    async fn find_by_amount(&self, amount: i32) -> Result<Option<PremiumBracket>> {
        let bracket = sqlx::query_as::<_, PremiumBracket>(
            r#"
            SELECT id, grade, std_rem, min_amount, max_amount,
                   health_no_care, health_care, pension, created_at, updated_at
            FROM premium_bracket
            WHERE min_amount <= $1 AND max_amount >= $1
            ORDER BY min_amount DESC
            LIMIT 1
            "#,
        )
        .bind(amount)
        .fetch_optional(&self.pool)
        .await?;

        Ok(bracket)
    }

    async fn find_by_grade(&self, grade: &str) -> Result<Option<PremiumBracket>> {
        let bracket = sqlx::query_as::<_, PremiumBracket>(
            r#"
            SELECT id, grade, std_rem, min_amount, max_amount,
                   health_no_care, health_care, pension, created_at, updated_at
            FROM premium_bracket
            WHERE grade = $1
            "#,
        )
        .bind(grade)
        .fetch_optional(&self.pool)
        .await?;

        Ok(bracket)
    }

    async fn find_all(&self) -> Result<Vec<PremiumBracket>> {
        let brackets = sqlx::query_as::<_, PremiumBracket>(
            r#"
            SELECT id, grade, std_rem, min_amount, max_amount,
                   health_no_care, health_care, pension, created_at, updated_at
            FROM premium_bracket
            ORDER BY std_rem ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(brackets)
    }

    async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM premium_bracket")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn replace_all(&self, brackets: &[NewPremiumBracket]) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM premium_bracket")
            .execute(&mut *tx)
            .await?;

        for bracket in brackets {
            sqlx::query(
                r#"
                INSERT INTO premium_bracket
                    (grade, std_rem, min_amount, max_amount, health_no_care, health_care, pension)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(&bracket.grade)
            .bind(bracket.std_rem)
            .bind(bracket.min_amount)
            .bind(bracket.max_amount)
            .bind(bracket.health_no_care)
            .bind(bracket.health_care)
            .bind(bracket.pension)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(brackets.len() as u64)
    }
}

/// In-memory implementation backing database-free tests and embedded use
pub struct InMemoryPremiumBracketRepository {
    brackets: RwLock<Vec<PremiumBracket>>,
}

impl InMemoryPremiumBracketRepository {
    pub fn new(brackets: Vec<PremiumBracket>) -> Self {
        Self {
            brackets: RwLock::new(brackets),
        }
    }
}

#[async_trait]
impl PremiumBracketRepository for InMemoryPremiumBracketRepository {
    async fn find_by_amount(&self, amount: i32) -> Result<Option<PremiumBracket>> {
        let brackets = self.brackets.read().await;
        Ok(brackets
            .iter()
            .filter(|bracket| bracket.contains(amount))
            .max_by_key(|bracket| bracket.min_amount)
            .cloned())
    }

    async fn find_by_grade(&self, grade: &str) -> Result<Option<PremiumBracket>> {
        let brackets = self.brackets.read().await;
        Ok(brackets.iter().find(|bracket| bracket.grade == grade).cloned())
    }

    async fn find_all(&self) -> Result<Vec<PremiumBracket>> {
        let mut brackets = self.brackets.read().await.clone();
        brackets.sort_by_key(|bracket| bracket.std_rem);
        Ok(brackets)
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.brackets.read().await.len() as i64)
    }

    async fn replace_all(&self, rows: &[NewPremiumBracket]) -> Result<u64> {
        let mut brackets = self.brackets.write().await;
        *brackets = rows
            .iter()
            .map(|row| {
                PremiumBracket::new(
                    row.grade.clone(),
                    row.std_rem,
                    row.min_amount,
                    row.max_amount,
                    row.health_no_care,
                    row.health_care,
                    row.pension,
                )
            })
            .collect();
        Ok(brackets.len() as u64)
    }
}
