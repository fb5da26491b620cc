use thiserror::Error;

/// Errors from classifying a hand.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum HandError {
    #[error("A hand must hold exactly five cards, this one holds {0}")]
    InvalidHandSize(usize),
}

/// Errors from parsing a rendered card string.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum CardParseError {
    #[error("Unexpected card value: {0}")]
    UnexpectedValue(String),

    #[error("Unexpected suit symbol: {0}")]
    UnexpectedSuit(char),
}
