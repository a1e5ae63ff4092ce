mod employment_insurance_rate;

pub use employment_insurance_rate::EmploymentInsuranceRate;
