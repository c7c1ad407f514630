//! Session-level table state.
//!
//! `TableState` outlives individual hands. It owns the deck, the dealing
//! RNG, the seat names and stacks, and an event log for the hand in
//! progress. When the next hand starts (or the session finishes) the log is
//! folded into `history`, a persistent `im::Vector` so snapshots of the
//! table stay cheap to clone.

use im::Vector;
use log::{debug, info};
use rs_poker::core::Card;

use super::hand::{HandState, Outcome};
use crate::cards::{cards_label, Deck, Evaluator};
use crate::core::{
    Action, ActionRecord, Chips, GameRng, HoldemError, Result, Role, Seats, TableConfig,
};

/// Something that happened at the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandEvent {
    PostBlind { role: Role, amount: Chips },
    DealHole { role: Role, cards: [Card; 2] },
    DealStreet { street: u8, cards: Vec<Card> },
    Act(ActionRecord),
    HandWon { role: Role, amount: Chips },
    SplitPot { shares: Seats<Chips> },
    /// The role could not post its blind; the session is over.
    Bust { role: Role },
}

/// A completed hand's log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandRecord {
    /// 1-based hand number.
    pub number: u32,
    pub big_blind: Role,
    pub events: Vec<HandEvent>,
    /// `None` if the hand never started or was abandoned.
    pub outcome: Option<Outcome>,
}

/// Table state across a session of hands.
#[derive(Clone, Debug)]
pub struct TableState {
    pub config: TableConfig,

    /// Display names of both seats.
    pub names: Seats<String>,

    /// Set once a role cannot post its blind.
    pub game_over: bool,

    /// Hands started so far.
    pub hands_played: u32,

    /// Events of the hand in progress.
    pub log: Vec<HandEvent>,

    /// Logs of finished hands, oldest first.
    pub history: Vector<HandRecord>,

    hand: Option<HandState>,
    stacks: Seats<Chips>,
    big_blind: Role,
    deck: Deck,
    rng: GameRng,
}

impl TableState {
    /// Seat two players with the configured starting stacks.
    #[must_use]
    pub fn new(config: TableConfig, names: Seats<String>, rng: GameRng) -> Self {
        let stacks = Seats::with_value(config.starting_stack);
        Self {
            config,
            names,
            game_over: false,
            hands_played: 0,
            log: Vec::new(),
            history: Vector::new(),
            hand: None,
            stacks,
            // Flipped before every hand, so role 0 has the first big blind.
            big_blind: Role::P1,
            deck: Deck::ordered(),
            rng,
        }
    }

    /// The hand in progress (or the last one, until the next starts).
    #[must_use]
    pub fn hand(&self) -> Option<&HandState> {
        self.hand.as_ref()
    }

    /// The hand in progress, or `HandOver` if there is none.
    pub fn current_hand(&self) -> Result<&HandState> {
        self.hand
            .as_ref()
            .filter(|hand| !hand.hand_over)
            .ok_or(HoldemError::HandOver)
    }

    /// Current stacks, including chips bet in the hand in progress.
    #[must_use]
    pub fn stacks(&self) -> Seats<Chips> {
        self.hand.as_ref().map_or(self.stacks, |hand| hand.stacks)
    }

    /// Big blind of the current (or most recent) hand.
    #[must_use]
    pub fn big_blind(&self) -> Role {
        self.big_blind
    }

    /// Start a new hand.
    ///
    /// Archives the previous hand, flips the big blind, posts blinds and
    /// deals hole cards from a freshly shuffled deck. Returns `false`, and
    /// marks the session over, if either role cannot post its blind.
    pub fn new_hand(&mut self) -> Result<bool> {
        if self.game_over {
            return Ok(false);
        }

        self.archive_hand();
        self.big_blind = self.big_blind.other();

        let big_blind = self.big_blind;
        let small_blind = big_blind.other();

        if !HandState::can_post_blinds(&self.config, &self.stacks, big_blind) {
            let busted = if self.stacks[big_blind] < self.config.big_blind {
                big_blind
            } else {
                small_blind
            };
            info!("{} cannot post the blind, session over", self.names[busted]);
            self.log.push(HandEvent::Bust { role: busted });
            self.game_over = true;
            return Ok(false);
        }

        self.hands_played += 1;
        self.deck = Deck::shuffled(&mut self.rng);

        let mut holes = Seats::with_value(self.deck.draw_hole()?);
        holes[small_blind] = self.deck.draw_hole()?;

        debug!(
            "hand {}: {} is big blind, stacks {}/{}",
            self.hands_played, self.names[big_blind], self.stacks[Role::P0], self.stacks[Role::P1]
        );

        let hand = HandState::new(&self.config, self.stacks, big_blind, holes);
        self.log.push(HandEvent::PostBlind {
            role: small_blind,
            amount: hand.bets[small_blind],
        });
        self.log.push(HandEvent::PostBlind {
            role: big_blind,
            amount: hand.bets[big_blind],
        });
        for role in [big_blind, small_blind] {
            self.log.push(HandEvent::DealHole {
                role,
                cards: holes[role],
            });
        }

        self.hand = Some(hand);
        Ok(true)
    }

    /// Apply an action for the role to act and log it.
    pub fn apply(&mut self, action: Action) -> Result<()> {
        let hand = self.hand.as_mut().ok_or(HoldemError::HandOver)?;
        let role = hand.to_act;
        let street = hand.street;

        hand.apply(action)?;
        let outcome = hand.outcome;

        self.log.push(HandEvent::Act(ActionRecord::new(role, action, street)));
        if let Some(outcome) = outcome {
            self.record_outcome(outcome);
        }
        Ok(())
    }

    /// Deal the next street, or score the showdown on the final street.
    ///
    /// Call once the current betting round is good.
    pub fn deal_or_showdown<E: Evaluator + ?Sized>(&mut self, evaluator: &E) -> Result<()> {
        let hand = self
            .hand
            .as_mut()
            .filter(|hand| !hand.hand_over)
            .ok_or(HoldemError::HandOver)?;

        if hand.is_final_street() {
            let scores = Seats::from_fn(|role| evaluator.evaluate(&hand.board, &hand.holes[role]));
            let outcome = hand.settle_showdown(scores);
            self.record_outcome(outcome);
        } else {
            let cards = self.deck.draw(hand.cards_for_next_street())?;
            hand.advance_street(&cards);
            self.log.push(HandEvent::DealStreet {
                street: hand.street,
                cards,
            });
        }
        Ok(())
    }

    /// Fold the last hand's log into history.
    pub fn finish(&mut self) {
        self.archive_hand();
        info!(
            "session over after {} hands: {} {}, {} {}",
            self.hands_played,
            self.names[Role::P0],
            self.stacks[Role::P0],
            self.names[Role::P1],
            self.stacks[Role::P1]
        );
    }

    fn record_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Folded { winner, pot } | Outcome::Showdown { winner, pot } => {
                info!("hand {}: {} wins {}", self.hands_played, self.names[winner], pot);
                self.log.push(HandEvent::HandWon {
                    role: winner,
                    amount: pot,
                });
            }
            Outcome::Split { shares } => {
                info!(
                    "hand {}: split pot {}/{}",
                    self.hands_played,
                    shares[Role::P0],
                    shares[Role::P1]
                );
                self.log.push(HandEvent::SplitPot { shares });
            }
        }
    }

    fn archive_hand(&mut self) {
        let outcome = match self.hand.take() {
            Some(hand) => {
                self.stacks = hand.stacks;
                hand.outcome
            }
            None => None,
        };

        if self.log.is_empty() {
            return;
        }

        let number = if self.game_over {
            self.hands_played + 1
        } else {
            self.hands_played
        };
        self.history.push_back(HandRecord {
            number,
            big_blind: self.big_blind,
            events: std::mem::take(&mut self.log),
            outcome,
        });
    }
}

impl std::fmt::Display for TableState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Hands Played: {}", self.hands_played)?;

        let stacks = self.stacks();
        for (role, stack) in stacks.iter() {
            write!(f, "{} {}: {}", role, self.names[role], stack)?;
            if let Some(hand) = &self.hand {
                write!(f, " [{}] bet {}", cards_label(&hand.holes[role]), hand.bets[role])?;
                if role == hand.big_blind {
                    write!(f, " (bb)")?;
                }
            }
            writeln!(f)?;
        }

        if let Some(hand) = &self.hand {
            writeln!(f, "Board: {}", cards_label(&hand.board))?;
            write!(f, "Pot: {}", hand.pot)?;
        }
        Ok(())
    }
}
