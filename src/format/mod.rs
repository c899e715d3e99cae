//! Text formatting utilities shared by the engine and its consumers.
//!
//! These are stateless helpers: parsing of Brazilian numeric text, the
//! as-you-type input mask, and BRL currency display.

mod currency;
mod normalizer;

pub use currency::{format_currency, format_rate};
pub use normalizer::{format_currency_input, parse_input};
