//! Pontifex: the Solitaire deck-of-cards stream cipher.
//!
//! Solitaire generates its keystream by repeatedly permuting a 54-card deck
//! (52 standard cards and two jokers) and adds that keystream to the message
//! letter by letter, modulo 26. Sender and receiver start from the same deck
//! ordering, either identity order or one keyed from a shared passphrase.
//!
//! No security claim is made for this cipher.
//!
//! # Architecture
//!
//! ```text
//! Card               (54-card universe and the fixed value function)
//!     ↓ ordered by
//! Deck               (permutation state: joker moves, triple cut, count cut)
//!     ↓ owned by
//! KeystreamGenerator (composite step + output lookup, retries on jokers)
//!     ↓ consumed by
//! Solitaire          (normalization, letter arithmetic, 5-letter blocks)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with a passphrase-keyed deck:
//!
//! ```
//! use pontifex::Solitaire;
//!
//! let mut encoder = Solitaire::with_passphrase("CRYPTONOMICON").unwrap();
//! let ciphertext = encoder.encrypt("SOLITAIRE").unwrap();
//! assert_eq!(ciphertext, "KIRAK SFJAN");
//!
//! let mut decoder = Solitaire::with_passphrase("CRYPTONOMICON").unwrap();
//! assert_eq!(decoder.decrypt(&ciphertext).unwrap(), "SOLIT AIREX");
//! ```
//!
//! Draw raw keystream values from an identity-ordered deck:
//!
//! ```
//! use pontifex::{Deck, KeystreamGenerator};
//!
//! let values: Vec<u8> = KeystreamGenerator::new(Deck::unkeyed()).take(4).collect();
//! assert_eq!(values, [4, 49, 10, 24]);
//! ```

#![deny(clippy::all)]

pub mod card;
pub mod cipher;
pub mod deck;
pub mod error;
pub mod keystream;
pub mod utils;

mod keying;

pub use card::{Card, Joker, Rank, Suit};
pub use cipher::{Direction, Solitaire};
pub use deck::Deck;
pub use error::SolitaireError;
pub use keystream::KeystreamGenerator;
