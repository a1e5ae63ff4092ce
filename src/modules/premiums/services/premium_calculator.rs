use rust_decimal::Decimal;

use crate::modules::premiums::models::PremiumBracket;

/// Age from which long-term care insurance applies (category 2 insured)
pub const CARE_MINIMUM_AGE: u32 = 40;

/// Monthly premium totals derived from one bracket row
#[derive(Debug, Clone, PartialEq)]
pub struct PremiumTotals {
    pub health_no_care: Decimal,
    pub care: Decimal,
    pub pension: Decimal,
}

impl PremiumTotals {
    /// 50% share, computed per component so the same figures can be
    /// reused for net-salary subtraction and the final breakdown
    pub fn halved(&self) -> PremiumTotals {
        PremiumTotals {
            health_no_care: self.health_no_care / Decimal::TWO,
            care: self.care / Decimal::TWO,
            pension: self.pension / Decimal::TWO,
        }
    }

    pub fn sum(&self) -> Decimal {
        self.health_no_care + self.care + self.pension
    }
}

/// Derives premium totals from a bracket row and the insured's age
pub struct PremiumCalculator {
    care_minimum_age: u32,
}

impl PremiumCalculator {
    pub fn new(care_minimum_age: u32) -> Self {
        Self { care_minimum_age }
    }

    /// The care component is the spread between the with-care and no-care
    /// health premiums, and applies only from `care_minimum_age` up.
    pub fn totals(&self, bracket: &PremiumBracket, age: u32) -> PremiumTotals {
        let care = if age < self.care_minimum_age {
            Decimal::ZERO
        } else {
            bracket.health_care - bracket.health_no_care
        };

        PremiumTotals {
            health_no_care: bracket.health_no_care,
            care,
            pension: bracket.pension,
        }
    }
}

impl Default for PremiumCalculator {
    fn default() -> Self {
        Self::new(CARE_MINIMUM_AGE)
    }
}
