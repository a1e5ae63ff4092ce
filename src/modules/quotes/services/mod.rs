pub mod quote_service;

pub use quote_service::{QuotePolicy, SocialInsuranceQueryService, DEFAULT_BUSINESS_TYPE};
