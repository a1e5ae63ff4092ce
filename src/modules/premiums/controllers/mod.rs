pub mod premium_bracket_controller;
