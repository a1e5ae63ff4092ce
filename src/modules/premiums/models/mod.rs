mod premium_bracket;

pub use premium_bracket::{NewPremiumBracket, PremiumBracket, PremiumBracketResponse};
