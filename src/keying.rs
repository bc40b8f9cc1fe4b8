//! Passphrase keying of the initial deck.
//!
//! Starting from identity order, every passphrase letter runs one keystream
//! step (no output is read) followed by a second count cut by the letter's
//! number. Both parties keying with the same passphrase share the resulting
//! deck.

use tracing::debug;

use crate::deck::Deck;
use crate::error::{Result, SolitaireError};
use crate::keystream::KeystreamGenerator;
use crate::utils::alphabet::letter_to_number;
use crate::utils::text::normalize;

impl Deck {
    /// Keys a deck from a passphrase. Case and whitespace are ignored.
    ///
    /// # Errors
    /// Returns [`SolitaireError::EmptyPassphrase`] if no letters remain
    /// after normalization, or [`SolitaireError::InvalidLetter`] for a
    /// character outside A-Z.
    ///
    /// # Examples
    ///
    /// ```
    /// use pontifex::Deck;
    ///
    /// let deck = Deck::from_passphrase("Crypto Nomicon").unwrap();
    /// assert_eq!(deck, Deck::from_passphrase("CRYPTONOMICON").unwrap());
    /// assert_ne!(deck, Deck::unkeyed());
    ///
    /// assert!(Deck::from_passphrase("  ").is_err());
    /// ```
    pub fn from_passphrase(passphrase: &str) -> Result<Deck> {
        let numbers = normalize(passphrase)
            .chars()
            .map(letter_to_number)
            .collect::<Result<Vec<u8>>>()?;
        if numbers.is_empty() {
            return Err(SolitaireError::EmptyPassphrase);
        }

        let mut keystream = KeystreamGenerator::new(Deck::unkeyed());
        for &number in &numbers {
            keystream.step();
            keystream.deck_mut().count_cut(number as usize);
        }
        debug!(letters = numbers.len(), "keyed deck from passphrase");
        Ok(keystream.into_deck())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letter_key() {
        // One step from identity order, then a count cut of 1 (A).
        let mut expected = KeystreamGenerator::new(Deck::unkeyed());
        expected.step();
        let mut expected = expected.into_deck();
        expected.count_cut(1);
        assert_eq!(Deck::from_passphrase("a").unwrap(), expected);
    }

    #[test]
    fn test_keyed_deck_is_permutation() {
        let deck = Deck::from_passphrase("CRYPTONOMICON").unwrap();
        assert_eq!(deck.len(), 54);
        assert!(Deck::new(deck.cards().to_vec()).is_ok());
    }

    #[test]
    fn test_cryptonomicon_deck_edges() {
        let deck = Deck::from_passphrase("CRYPTONOMICON").unwrap();
        let top: Vec<String> = deck.cards()[..4].iter().map(|c| c.to_string()).collect();
        assert_eq!(top, ["7C", "8C", "9C", "3D"]);
        assert_eq!(deck.bottom().to_string(), "9S");
    }

    #[test]
    fn test_rejects_empty_and_non_letters() {
        assert_eq!(
            Deck::from_passphrase(""),
            Err(SolitaireError::EmptyPassphrase)
        );
        assert_eq!(
            Deck::from_passphrase("FOO42"),
            Err(SolitaireError::InvalidLetter('4'))
        );
    }
}
