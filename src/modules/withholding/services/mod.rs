pub mod withholding_tax_resolver;

pub use withholding_tax_resolver::WithholdingTaxResolver;
