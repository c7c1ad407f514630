//! A shuffled 52-card deck dealt without replacement.

use rs_poker::core::{Card, Suit, Value};

use crate::core::{GameRng, HoldemError, Result};

/// Deck of cards; the top of the deck is the end of the vector.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards in a fixed order.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(52);
        for value in Value::values() {
            for suit in Suit::suits() {
                cards.push(Card::new(value, suit));
            }
        }
        Self { cards }
    }

    /// All 52 cards shuffled with the given RNG.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::ordered();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Take `n` cards off the top.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(HoldemError::DeckExhausted {
                requested: n,
                remaining,
            });
        }
        Ok(self.cards.split_off(remaining - n).into_iter().rev().collect())
    }

    /// Take two cards off the top as a hole-card pair.
    pub fn draw_hole(&mut self) -> Result<[Card; 2]> {
        let cards = self.draw(2)?;
        Ok([cards[0], cards[1]])
    }
}

/// Two-character label such as `As` or `Td`.
#[must_use]
pub fn card_label(card: Card) -> String {
    format!("{}{}", card.value.to_char(), card.suit.to_char())
}

/// Comma-separated labels, e.g. `As,Kd,2c`.
#[must_use]
pub fn cards_label(cards: &[Card]) -> String {
    cards.iter().map(|&c| card_label(c)).collect::<Vec<_>>().join(",")
}

/// Parse a two-character label such as `As`; case-insensitive.
#[must_use]
pub fn parse_card(label: &str) -> Option<Card> {
    let mut chars = label.chars();
    let value = Value::from_char(chars.next()?)?;
    let suit = Suit::from_char(chars.next()?)?;
    if chars.next().is_some() {
        return None;
    }
    Some(Card::new(value, suit))
}
