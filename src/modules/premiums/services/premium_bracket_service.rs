use std::collections::HashSet;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::premiums::models::{NewPremiumBracket, PremiumBracketResponse};
use crate::modules::premiums::repositories::PremiumBracketRepository;

/// Service for browsing and administering the premium bracket table
pub struct PremiumBracketService {
    bracket_repo: Arc<dyn PremiumBracketRepository>,
}

impl PremiumBracketService {
    pub fn new(bracket_repo: Arc<dyn PremiumBracketRepository>) -> Self {
        Self { bracket_repo }
    }

    /// List every bracket ordered by standard remuneration
    pub async fn list_brackets(&self) -> Result<Vec<PremiumBracketResponse>> {
        let brackets = self.bracket_repo.find_all().await?;
        Ok(brackets.into_iter().map(PremiumBracketResponse::from).collect())
    }

    /// Look up a single bracket by its grade label
    pub async fn get_bracket(&self, grade: &str) -> Result<PremiumBracketResponse> {
        let bracket = self
            .bracket_repo
            .find_by_grade(grade)
            .await?
            .ok_or_else(|| AppError::GradeNotFound {
                grade: grade.to_string(),
            })?;

        Ok(PremiumBracketResponse::from(bracket))
    }

    /// Replace the whole bracket table after validating the new rows.
    /// Returns the number of rows loaded.
    pub async fn replace_brackets(&self, brackets: Vec<NewPremiumBracket>) -> Result<u64> {
        self.validate_brackets(&brackets)?;
        self.bracket_repo.replace_all(&brackets).await
    }

    fn validate_brackets(&self, brackets: &[NewPremiumBracket]) -> Result<()> {
        if brackets.is_empty() {
            return Err(AppError::Validation(
                "Bracket table must have at least one row".to_string(),
            ));
        }

        let mut grades = HashSet::new();
        for bracket in brackets {
            if !grades.insert(bracket.grade.as_str()) {
                return Err(AppError::Validation(format!(
                    "Duplicate grade '{}'",
                    bracket.grade
                )));
            }

            if bracket.min_amount < 0 || bracket.std_rem < 0 {
                return Err(AppError::Validation(format!(
                    "Grade '{}' has a negative amount",
                    bracket.grade
                )));
            }

            if bracket.min_amount > bracket.max_amount {
                return Err(AppError::Validation(format!(
                    "Grade '{}' has min amount {} above max amount {}",
                    bracket.grade, bracket.min_amount, bracket.max_amount
                )));
            }

            if bracket.health_no_care < Decimal::ZERO || bracket.pension < Decimal::ZERO {
                return Err(AppError::Validation(format!(
                    "Grade '{}' has a negative premium",
                    bracket.grade
                )));
            }

            // The care premium is derived as health_care - health_no_care,
            // so the with-care figure can never be the smaller one
            if bracket.health_care < bracket.health_no_care {
                return Err(AppError::Validation(format!(
                    "Grade '{}' has health premium with care below the one without",
                    bracket.grade
                )));
            }
        }

        Ok(())
    }
}
