//! Session loop.
//!
//! A [`Session`] owns the table, both providers, the evaluator and the RNG
//! used for strategy draws. Each hand alternates between asking the acting
//! role's provider for a policy and advancing the board once the betting
//! round is good, until a fold or showdown pays out the pot.
//!
//! ```no_run
//! use limit_holdem::core::TableConfig;
//! use limit_holdem::driver::Session;
//! use limit_holdem::players::{CallingStation, UniformRandom};
//!
//! let config = TableConfig::default().with_seed(7);
//! let mut session = Session::new(config, Box::new(UniformRandom), Box::new(CallingStation));
//! session.play_hands(100).unwrap();
//! let table = session.finish();
//! println!("{table}");
//! ```

use log::info;

use crate::betting::{Outcome, TableState};
use crate::cards::{Evaluator, HandRanker};
use crate::core::{Chips, GameRng, HoldemError, Result, Role, Seats, TableConfig};
use crate::players::ActionProvider;

/// A heads-up session between two providers.
pub struct Session<E: Evaluator = HandRanker> {
    table: TableState,
    providers: Seats<Box<dyn ActionProvider>>,
    evaluator: E,
    rng: GameRng,
}

impl Session<HandRanker> {
    /// Seat two providers, scoring showdowns with [`HandRanker`].
    #[must_use]
    pub fn new(
        config: TableConfig,
        p0: Box<dyn ActionProvider>,
        p1: Box<dyn ActionProvider>,
    ) -> Self {
        Self::with_evaluator(config, p0, p1, HandRanker)
    }
}

impl<E: Evaluator> Session<E> {
    /// Seat two providers with a custom evaluator.
    ///
    /// Dealing and strategy draws use separate streams forked from
    /// `config.seed`.
    #[must_use]
    pub fn with_evaluator(
        config: TableConfig,
        p0: Box<dyn ActionProvider>,
        p1: Box<dyn ActionProvider>,
        evaluator: E,
    ) -> Self {
        let mut rng = GameRng::new(config.seed);
        let deck_rng = rng.fork();
        let names = Seats::from_fn(|role| role.to_string());

        Self {
            table: TableState::new(config, names, deck_rng),
            providers: Seats::new(p0, p1),
            evaluator,
            rng,
        }
    }

    /// Set the seat names shown in logs and snapshots.
    #[must_use]
    pub fn with_names(mut self, p0: impl Into<String>, p1: impl Into<String>) -> Self {
        self.table.names = Seats::new(p0.into(), p1.into());
        self
    }

    /// The table being played.
    #[must_use]
    pub fn table(&self) -> &TableState {
        &self.table
    }

    /// Play one hand to completion.
    ///
    /// Returns `None` without dealing if a blind could not be posted,
    /// which ends the session.
    pub fn play_hand(&mut self) -> Result<Option<Outcome>> {
        if !self.table.new_hand()? {
            return Ok(None);
        }

        loop {
            let Some(hand) = self.table.hand().filter(|hand| !hand.hand_over) else {
                return Ok(self.table.hand().and_then(|hand| hand.outcome));
            };

            if hand.pot_is_good() {
                self.table.deal_or_showdown(&self.evaluator)?;
                continue;
            }

            let role = hand.to_act;
            let legal = hand.available_actions(role);
            let policy = self.providers[role].policy(&self.table, role)?;
            let action = policy
                .resolve(&legal, &mut self.rng)?
                .ok_or(HoldemError::NoDecision { role })?;

            self.table.apply(action)?;
        }
    }

    /// Play up to `n` hands, stopping early if a role busts.
    ///
    /// Returns the number of hands completed.
    pub fn play_hands(&mut self, n: u32) -> Result<u32> {
        let mut played = 0;
        while played < n {
            match self.play_hand()? {
                Some(_) => played += 1,
                None => {
                    info!("session ended early after {played} hands");
                    break;
                }
            }
        }
        Ok(played)
    }

    /// End the session and hand back the table with its full history.
    #[must_use]
    pub fn finish(mut self) -> TableState {
        self.table.finish();
        self.table
    }

    /// Current stacks.
    #[must_use]
    pub fn stacks(&self) -> Seats<Chips> {
        self.table.stacks()
    }

    /// Net chips won by `role` so far.
    #[must_use]
    pub fn net(&self, role: Role) -> i64 {
        i64::from(self.stacks()[role]) - i64::from(self.table.config.starting_stack)
    }
}
