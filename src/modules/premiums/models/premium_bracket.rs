use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One grade of the standard-remuneration premium table.
///
/// The salary range is inclusive on both ends. Boundary amounts are shared
/// with the neighbouring grade; the lookup resolves them to the grade with
/// the larger `min_amount`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct PremiumBracket {
    pub id: Option<i64>,
    pub grade: String,
    pub std_rem: i32,
    pub min_amount: i32,
    pub max_amount: i32,
    pub health_no_care: Decimal,
    pub health_care: Decimal,
    pub pension: Decimal,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl PremiumBracket {
    pub fn new(
        grade: impl Into<String>,
        std_rem: i32,
        min_amount: i32,
        max_amount: i32,
        health_no_care: Decimal,
        health_care: Decimal,
        pension: Decimal,
    ) -> Self {
        Self {
            id: None,
            grade: grade.into(),
            std_rem,
            min_amount,
            max_amount,
            health_no_care,
            health_care,
            pension,
            created_at: None,
            updated_at: None,
        }
    }

    /// Whether the inclusive salary range contains `amount`
    pub fn contains(&self, amount: i32) -> bool {
        self.min_amount <= amount && amount <= self.max_amount
    }
}

/// Row accepted by the administrative bulk load
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPremiumBracket {
    pub grade: String,
    pub std_rem: i32,
    pub min_amount: i32,
    pub max_amount: i32,
    pub health_no_care: Decimal,
    pub health_care: Decimal,
    pub pension: Decimal,
}

/// Premium bracket as served over HTTP
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumBracketResponse {
    pub id: Option<i64>,
    pub grade: String,
    pub std_rem: i32,
    pub min_amount: i32,
    pub max_amount: i32,
    pub health_no_care: Decimal,
    pub health_care: Decimal,
    pub pension: Decimal,
}

impl From<PremiumBracket> for PremiumBracketResponse {
    fn from(bracket: PremiumBracket) -> Self {
        Self {
            id: bracket.id,
            grade: bracket.grade,
            std_rem: bracket.std_rem,
            min_amount: bracket.min_amount,
            max_amount: bracket.max_amount,
            health_no_care: bracket.health_no_care,
            health_care: bracket.health_care,
            pension: bracket.pension,
        }
    }
}
