use core::fmt;

use crate::core::card::Card;
use crate::core::errors::HandError;

/// All the different hand classifications, weakest first.
///
/// Only the repeated-value shapes are modeled. Straights,
/// flushes, and full houses are not detected; a hand that
/// happens to be one of those still lands in one of these
/// five buckets based on its value counts alone.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum HandKind {
    /// No matches
    HighCard,
    /// One card value matches another.
    OnePair,
    /// Two different pairs of matching values.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Four or more of the same value.
    FourOfAKind,
}

/// The exclamation marks are part of the contract: drivers print
/// these labels verbatim.
impl fmt::Display for HandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HandKind::HighCard => "High Card",
            HandKind::OnePair => "One Pair!",
            HandKind::TwoPair => "Two Pair!",
            HandKind::ThreeOfAKind => "Three of a Kind!",
            HandKind::FourOfAKind => "Four of a Kind!",
        };
        write!(f, "{label}")
    }
}

/// Classify a five card hand by how often its values repeat.
///
/// Only the values matter. The suits are never consulted and the
/// order of the cards is irrelevant. The checks run strongest
/// first, so a hand with a quad never reports its leftover card.
///
/// Draws are taken with replacement, so a value can show up all
/// five times; such a hand still classifies as four of a kind
/// since the quad check matches anything with four or more.
///
/// # Errors
///
/// `HandError::InvalidHandSize` when the slice does not hold
/// exactly five cards. There is no silent padding or truncation.
///
/// # Examples
/// ```
/// use handkind::core::{Card, HandKind, classify};
///
/// let hand: Vec<Card> = ["K♠", "K♥", "K♦", "2♣", "5♠"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// assert_eq!(Ok(HandKind::ThreeOfAKind), classify(&hand));
/// ```
pub fn classify(cards: &[Card]) -> Result<HandKind, HandError> {
    if cards.len() != 5 {
        return Err(HandError::InvalidHandSize(cards.len()));
    }

    let mut value_to_count: [u8; 13] = [0; 13];
    for c in cards {
        value_to_count[c.value as usize] += 1;
    }

    // Now rotate the value to count map.
    // With replacement a single value can be counted five times.
    let mut count_to_value: [u16; 6] = [0; 6];
    for (value, &count) in value_to_count.iter().enumerate() {
        count_to_value[count as usize] |= 1 << value;
    }

    if count_to_value[4] | count_to_value[5] != 0 {
        Ok(HandKind::FourOfAKind)
    } else if count_to_value[3] != 0 {
        Ok(HandKind::ThreeOfAKind)
    } else {
        match count_to_value[2].count_ones() {
            2 => Ok(HandKind::TwoPair),
            1 => Ok(HandKind::OnePair),
            _ => Ok(HandKind::HighCard),
        }
    }
}
