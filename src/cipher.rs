//! Solitaire: letter substitution driven by the deck keystream.
//!
//! Text is normalized and padded into five-letter blocks before ciphering,
//! so the `X` filler is enciphered along with the message. Each letter
//! consumes one keystream value and is shifted forward (encrypt) or back
//! (decrypt) on the 1..=26 circle.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::deck::Deck;
use crate::error::Result;
use crate::keystream::KeystreamGenerator;
use crate::utils::alphabet::{letter_to_number, number_to_letter};
use crate::utils::text::block_format;

/// Which way letters are shifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => f.write_str("encrypt"),
            Direction::Decrypt => f.write_str("decrypt"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "encrypt" => Ok(Direction::Encrypt),
            "decrypt" => Ok(Direction::Decrypt),
            other => Err(format!("unknown direction '{}'", other)),
        }
    }
}

/// Combines a letter number with a keystream value.
///
/// `letter` is in `1..=26`; `key` is any keystream value. The result is
/// in `1..=26`, with a sum or difference that is a multiple of 26
/// mapping to 26 (`Z`).
pub fn combine(direction: Direction, letter: u8, key: u8) -> u8 {
    let shifted = match direction {
        Direction::Encrypt => i16::from(letter) + i16::from(key),
        Direction::Decrypt => i16::from(letter) - i16::from(key),
    };
    ((shifted - 1).rem_euclid(26) + 1) as u8
}

/// A Solitaire cipher session holding one keyed deck.
///
/// The deck advances with every letter, so a session enciphers one stream.
/// Decrypting needs a fresh session keyed the same way as the encrypting
/// one.
///
/// # Examples
///
/// ```
/// use pontifex::Solitaire;
///
/// let mut encoder = Solitaire::new();
/// let ciphertext = encoder.encrypt("DRINKYOUROVALTINE").unwrap();
/// assert_eq!(ciphertext, "HOSLS XGAVV PNEBY IZPVH");
///
/// let mut decoder = Solitaire::new();
/// assert_eq!(decoder.decrypt(&ciphertext).unwrap(), "DRINK YOURO VALTI NEXXX");
/// ```
#[derive(Debug, Clone)]
pub struct Solitaire {
    keystream: KeystreamGenerator,
}

impl Default for Solitaire {
    fn default() -> Self {
        Self::new()
    }
}

impl Solitaire {
    /// Creates a session with an identity-ordered deck.
    pub fn new() -> Self {
        Self::with_deck(Deck::unkeyed())
    }

    /// Creates a session from a supplied deck.
    pub fn with_deck(deck: Deck) -> Self {
        Solitaire {
            keystream: KeystreamGenerator::new(deck),
        }
    }

    /// Creates a session with a deck keyed from `passphrase`.
    ///
    /// # Errors
    /// See [`Deck::from_passphrase`].
    pub fn with_passphrase(passphrase: &str) -> Result<Self> {
        Ok(Self::with_deck(Deck::from_passphrase(passphrase)?))
    }

    /// Current deck state.
    pub fn deck(&self) -> &Deck {
        self.keystream.deck()
    }

    /// Enciphers or deciphers `text`, returning five-letter blocks.
    ///
    /// Every character is validated before the deck is touched, so a
    /// failed call leaves the session unchanged.
    ///
    /// # Errors
    /// Returns [`SolitaireError::InvalidLetter`](crate::SolitaireError::InvalidLetter)
    /// for any non-whitespace character outside A-Z.
    pub fn cipher(&mut self, direction: Direction, text: &str) -> Result<String> {
        let letters = block_format(text)
            .chars()
            .filter(|&c| c != ' ')
            .map(letter_to_number)
            .collect::<Result<Vec<u8>>>()?;
        debug!(%direction, letters = letters.len(), "ciphering text");

        let mut output = String::with_capacity(letters.len());
        for letter in letters {
            let key = self.keystream.next_value();
            output.push(number_to_letter(combine(direction, letter, key))?);
        }
        Ok(block_format(&output))
    }

    /// Shorthand for [`cipher`](Self::cipher) with [`Direction::Encrypt`].
    pub fn encrypt(&mut self, plaintext: &str) -> Result<String> {
        self.cipher(Direction::Encrypt, plaintext)
    }

    /// Shorthand for [`cipher`](Self::cipher) with [`Direction::Decrypt`].
    pub fn decrypt(&mut self, ciphertext: &str) -> Result<String> {
        self.cipher(Direction::Decrypt, ciphertext)
    }
}
