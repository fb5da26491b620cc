//! # handkind
//!
//! A small library for dealing random playing cards and classifying
//! five card hands by how often their values repeat.
//!
//! There are two entry points:
//!
//! * [`crate::core::sample_card`] draws one card uniformly from the
//!   52 card space, with replacement, from an rng the caller passes in.
//! * [`crate::core::classify`] takes a five card hand and buckets it into
//!   one of five shapes: four of a kind, three of a kind, two pair,
//!   one pair, or high card.
//!
//! Straights, flushes, and full houses are deliberately out of scope;
//! classification only ever counts repeated values.
//!
//! ```
//! use handkind::core::{classify, sample_hand};
//!
//! let mut rng = rand::rng();
//! let hand = sample_hand(&mut rng);
//! let kind = classify(&hand)?;
//! println!("{kind}");
//! # Ok::<(), handkind::core::HandError>(())
//! ```
pub mod core;
