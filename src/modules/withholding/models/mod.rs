mod withholding_tax_bracket;

pub use withholding_tax_bracket::{TaxColumn, WithholdingTaxBracket};
