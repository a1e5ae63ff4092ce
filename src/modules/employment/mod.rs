// Employment insurance module

pub mod models;
pub mod repositories;
pub mod services;

pub use models::EmploymentInsuranceRate;
pub use repositories::EmploymentInsuranceRateRepository;
pub use services::{EmploymentInsuranceCalculator, EmploymentInsuranceShares};
