//! Deck: the 54-card permutation that drives the keystream.
//!
//! A [`Deck`] is created once per cipher session, either in identity order
//! or from an externally supplied ordering, and is mutated in place by the
//! three elementary moves of the algorithm. It never decides when a move
//! happens; sequencing and retries belong to
//! [`KeystreamGenerator`](crate::keystream::KeystreamGenerator).

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::card::{Card, Joker, DECK_SIZE};
use crate::error::{Result, SolitaireError};

/// Ordered arrangement of the 54 Solitaire cards, top card first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::unkeyed()
    }
}

impl Deck {
    /// Creates a deck in identity order (see [`Card::unkeyed`]).
    pub fn unkeyed() -> Self {
        Deck {
            cards: Card::unkeyed().to_vec(),
        }
    }

    /// Creates a deck from a supplied ordering.
    ///
    /// # Errors
    /// Returns [`SolitaireError::InvalidDeckSize`] unless exactly 54 cards
    /// are given, or [`SolitaireError::DuplicateCard`] for the first card
    /// found twice. Together these guarantee a full permutation.
    ///
    /// # Examples
    ///
    /// ```
    /// use pontifex::{Card, Deck};
    ///
    /// let mut cards = Card::unkeyed().to_vec();
    /// cards.reverse();
    /// let deck = Deck::new(cards).unwrap();
    /// assert_eq!(deck.top().to_string(), "JokerB");
    ///
    /// assert!(Deck::new(Vec::new()).is_err());
    /// ```
    pub fn new(cards: Vec<Card>) -> Result<Self> {
        if cards.len() != DECK_SIZE {
            return Err(SolitaireError::InvalidDeckSize(cards.len()));
        }
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        if let Some(&card) = cards.iter().find(|&&card| !seen.insert(card)) {
            return Err(SolitaireError::DuplicateCard(card));
        }
        Ok(Deck { cards })
    }

    /// Cards in order, top first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always `false` for a deck built through the public constructors.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a zero-based position from the top.
    pub fn card_at(&self, position: usize) -> Option<Card> {
        self.cards.get(position).copied()
    }

    /// Top card.
    pub fn top(&self) -> Card {
        self.cards[0]
    }

    /// Bottom card.
    pub fn bottom(&self) -> Card {
        self.cards[self.cards.len() - 1]
    }

    /// Zero-based position of a card.
    pub fn position_of(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    /// Moves a joker `offset` places down the deck.
    ///
    /// The joker is lifted out and reinserted `offset` places further down.
    /// When that runs past the bottom of the remaining cards, the joker
    /// lands at index `(offset % remaining) - 1` regardless of where it
    /// started, or at the bottom when that index would be negative. This
    /// overflow rule is the one the published keystream vectors depend on;
    /// it is not a symmetric modulo.
    pub fn move_joker_down(&mut self, joker: Joker, offset: usize) {
        let card = Card::Joker(joker);
        let Some(position) = self.position_of(card) else {
            return;
        };
        if self.cards.len() < 2 {
            return;
        }
        self.cards.remove(position);

        let remaining = self.cards.len();
        let mut target = position + offset;
        if target > remaining {
            target = match offset % remaining {
                0 => remaining,
                wrapped => wrapped - 1,
            };
        }
        self.cards.insert(target, card);
    }

    /// Swaps the cards above the first joker with the cards below the
    /// second joker. The jokers and everything between them stay in the
    /// same relative order.
    pub fn triple_cut(&mut self) {
        let (Some(a), Some(b)) = (
            self.position_of(Card::Joker(Joker::A)),
            self.position_of(Card::Joker(Joker::B)),
        ) else {
            return;
        };
        let (first, second) = (a.min(b), a.max(b));

        let mut cut = Vec::with_capacity(self.cards.len());
        cut.extend_from_slice(&self.cards[second + 1..]);
        cut.extend_from_slice(&self.cards[first..=second]);
        cut.extend_from_slice(&self.cards[..first]);
        self.cards = cut;
    }

    /// Moves the top `n` cards to just above the bottom card. The bottom
    /// card never moves. `n == 0` or `n >= len` leaves the deck unchanged.
    pub fn count_cut(&mut self, n: usize) {
        let len = self.cards.len();
        if n == 0 || n >= len {
            return;
        }
        self.cards[..len - 1].rotate_left(n);
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl FromStr for Deck {
    type Err = SolitaireError;

    /// Parses card names separated by whitespace or commas.
    fn from_str(s: &str) -> Result<Self> {
        let cards = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|name| !name.is_empty())
            .map(str::parse::<Card>)
            .collect::<Result<Vec<Card>>>()?;
        Deck::new(cards)
    }
}
