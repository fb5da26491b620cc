use core::fmt;
use std::str::FromStr;

use crate::core::errors::CardParseError;

/// Card rank or value.
/// This is basically the face value of the card,
/// with no ordering between the values. Classification
/// only ever counts values, it never compares them.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum Value {
    /// A
    Ace = 0,
    /// 2
    Two = 1,
    /// 3
    Three = 2,
    /// 4
    Four = 3,
    /// 5
    Five = 4,
    /// 6
    Six = 5,
    /// 7
    Seven = 6,
    /// 8
    Eight = 7,
    /// 9
    Nine = 8,
    /// 10
    Ten = 9,
    /// J
    Jack = 10,
    /// Q
    Queen = 11,
    /// K
    King = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns.
const VALUES: [Value; 13] = [
    Value::Ace,
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
];

impl Value {
    /// Get all of the `Value`'s that are possible.
    pub const fn values() -> [Self; 13] {
        VALUES
    }

    /// Take a u8 and convert it to a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use handkind::core::Value;
    /// assert_eq!(Value::Four, Value::from_u8(Value::Four as u8));
    /// ```
    pub fn from_u8(v: u8) -> Self {
        VALUES[(v % 13) as usize]
    }

    /// The label of the value as printed on the card face.
    ///
    /// Every value renders as a single character except `Ten`,
    /// which renders as "10".
    pub const fn to_str(self) -> &'static str {
        match self {
            Value::Ace => "A",
            Value::Two => "2",
            Value::Three => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "J",
            Value::Queen => "Q",
            Value::King => "K",
        }
    }
}

impl FromStr for Value {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Value::Ace),
            "2" => Ok(Value::Two),
            "3" => Ok(Value::Three),
            "4" => Ok(Value::Four),
            "5" => Ok(Value::Five),
            "6" => Ok(Value::Six),
            "7" => Ok(Value::Seven),
            "8" => Ok(Value::Eight),
            "9" => Ok(Value::Nine),
            "10" => Ok(Value::Ten),
            "J" => Ok(Value::Jack),
            "Q" => Ok(Value::Queen),
            "K" => Ok(Value::King),
            _ => Err(CardParseError::UnexpectedValue(s.to_string())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// Enum for the four different suits.
/// The suit of a card is purely cosmetic;
/// it never changes a hand's classification.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Hearts
    Heart = 1,
    /// Diamonds
    Diamond = 2,
    /// Clubs
    Club = 3,
}

/// All of the suits.
/// This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

impl Suit {
    /// Provide all the suits.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    /// Translate a suit into its Unicode symbol.
    pub const fn to_char(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
        }
    }

    /// Given a Unicode suit symbol return the suit.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '♠' => Some(Suit::Spade),
            '♥' => Some(Suit::Heart),
            '♦' => Some(Suit::Diamond),
            '♣' => Some(Suit::Club),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The main struct of this library.
/// This is a carrier for `Value` and `Suit`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card from a value and a suit.
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

/// Cards render as the value label followed by the suit symbol.
///
/// # Examples
///
/// ```
/// use handkind::core::{Card, Suit, Value};
///
/// assert_eq!("A♠", Card::new(Value::Ace, Suit::Spade).to_string());
/// assert_eq!("10♦", Card::new(Value::Ten, Suit::Diamond).to_string());
/// ```
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

/// Parse a card from its rendered form.
///
/// The suit symbol is always the last character, so the parse
/// splits there and treats everything before it as the value label.
/// That keeps "10♦" unambiguous even though its label is two
/// characters long.
impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let suit_char = s
            .chars()
            .next_back()
            .ok_or_else(|| CardParseError::UnexpectedValue(s.to_string()))?;
        let suit = Suit::from_char(suit_char)
            .ok_or(CardParseError::UnexpectedSuit(suit_char))?;
        let value = s[..s.len() - suit_char.len_utf8()].parse()?;
        Ok(Self { value, suit })
    }
}
