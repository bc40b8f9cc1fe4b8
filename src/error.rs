//! Error types for the Pontifex library.

use thiserror::Error;

use crate::card::Card;

/// Result type alias for Pontifex operations.
pub type Result<T> = std::result::Result<T, SolitaireError>;

/// Errors produced by the Pontifex library.
///
/// A joker landing in the output position is not an error: the keystream
/// generator absorbs it by repeating its step, and it never reaches callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolitaireError {
    /// Character outside A-Z given to the letter-to-number mapping.
    #[error("'{0}' is not a letter in A-Z")]
    InvalidLetter(char),
    /// Number outside 1..=26 given to the number-to-letter mapping.
    #[error("{0} is outside the letter range 1-26")]
    InvalidNumber(u8),
    /// Text that does not name one of the 54 cards.
    #[error("'{0}' is not a card name")]
    InvalidCard(String),
    /// Supplied ordering does not hold exactly 54 cards.
    #[error("deck must hold 54 cards, found {0}")]
    InvalidDeckSize(usize),
    /// Supplied ordering names the same card twice.
    #[error("card {0} appears more than once in the deck")]
    DuplicateCard(Card),
    /// Passphrase has no letters to key the deck with.
    #[error("passphrase must contain at least one letter")]
    EmptyPassphrase,
}
