pub mod withholding_tax_repository;

pub use withholding_tax_repository::{
    InMemoryWithholdingTaxBracketRepository, PgWithholdingTaxBracketRepository,
    WithholdingTaxBracketRepository,
};
