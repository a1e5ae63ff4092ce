pub mod admin;
pub mod employment;
pub mod health;
pub mod premiums;
pub mod quotes;
pub mod withholding;
