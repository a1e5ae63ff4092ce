pub mod employment_insurance_repository;

pub use employment_insurance_repository::{
    EmploymentInsuranceRateRepository, InMemoryEmploymentInsuranceRateRepository,
    PgEmploymentInsuranceRateRepository,
};
