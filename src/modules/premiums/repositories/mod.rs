pub mod premium_bracket_repository;

pub use premium_bracket_repository::{
    InMemoryPremiumBracketRepository, PgPremiumBracketRepository, PremiumBracketRepository,
};
