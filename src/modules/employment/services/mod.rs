pub mod employment_insurance_calculator;

pub use employment_insurance_calculator::{EmploymentInsuranceCalculator, EmploymentInsuranceShares};
