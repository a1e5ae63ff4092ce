// Withholding tax module

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{TaxColumn, WithholdingTaxBracket};
pub use repositories::WithholdingTaxBracketRepository;
pub use services::WithholdingTaxResolver;
