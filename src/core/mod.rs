//! Core types for cards, sampling, and hand classification.

mod card;
mod errors;
mod kind;
mod sampler;

pub use self::card::{Card, Suit, Value};
pub use self::errors::{CardParseError, HandError};
pub use self::kind::{HandKind, classify};
pub use self::sampler::{sample_card, sample_hand};
