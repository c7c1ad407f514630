//! Interactive provider reading choices from the terminal.

use dialoguer::Select;

use super::ActionProvider;
use crate::betting::TableState;
use crate::cards::cards_label;
use crate::core::{HoldemError, Result, Role};
use crate::policy::Policy;

/// Prompts for one of the legal actions and plays it verbatim.
#[derive(Clone, Copy, Debug, Default)]
pub struct Human;

impl ActionProvider for Human {
    fn policy(&mut self, table: &TableState, role: Role) -> Result<Policy> {
        let hand = table.current_hand()?;
        let legal = hand.available_actions(role);
        let choices: Vec<String> = legal.iter().map(ToString::to_string).collect();

        println!("\n{hand}");
        let selection = Select::new()
            .with_prompt(format!("You hold {}", cards_label(&hand.holes[role])))
            .items(&choices)
            .default(0)
            .interact()
            .map_err(|e| HoldemError::Input(e.to_string()))?;

        legal
            .get(selection)
            .copied()
            .map(Policy::Fixed)
            .ok_or_else(|| HoldemError::Input(format!("no action at index {selection}")))
    }
}
