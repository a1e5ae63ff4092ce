// Premium brackets module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::PremiumBracket;
pub use repositories::PremiumBracketRepository;
pub use services::{PremiumBracketService, PremiumCalculator};
