//! Tree-building parameters.

use serde::{Deserialize, Serialize};

use crate::core::{HoldemError, Result};

/// Shape of the extensive-form tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Betting rounds to expand before every branch ends in a payoff.
    pub n_rounds: u16,

    /// Chance outcomes per street transition.
    pub nps: u32,

    /// Raises allowed per street. 0 disables raising.
    pub raise_cap: u8,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            n_rounds: 4,
            nps: 3,
            raise_cap: 3,
        }
    }
}

impl TreeConfig {
    /// Create a config with the default raise cap.
    #[must_use]
    pub fn new(n_rounds: u16, nps: u32) -> Self {
        Self {
            n_rounds,
            nps,
            ..Self::default()
        }
    }

    /// Set the number of betting rounds.
    #[must_use]
    pub fn with_rounds(mut self, n_rounds: u16) -> Self {
        self.n_rounds = n_rounds;
        self
    }

    /// Set the number of chance outcomes between rounds.
    #[must_use]
    pub fn with_nps(mut self, nps: u32) -> Self {
        self.nps = nps;
        self
    }

    /// Set the most raises allowed in one round.
    #[must_use]
    pub fn with_raise_cap(mut self, raise_cap: u8) -> Self {
        self.raise_cap = raise_cap;
        self
    }

    /// Check the configuration can produce a well-formed tree.
    pub fn validate(&self) -> Result<()> {
        if self.nps == 0 {
            return Err(HoldemError::InvalidConfig(
                "nps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let config = TreeConfig::default()
            .with_rounds(2)
            .with_nps(5)
            .with_raise_cap(0);

        assert_eq!(config, TreeConfig { n_rounds: 2, nps: 5, raise_cap: 0 });
        assert_eq!(TreeConfig::new(3, 2).raise_cap, 3);
    }

    #[test]
    fn test_validate() {
        assert!(TreeConfig::default().validate().is_ok());
        assert!(matches!(
            TreeConfig::new(2, 0).validate(),
            Err(HoldemError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_json() {
        let config = TreeConfig::new(3, 4);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<TreeConfig>(&json).unwrap(), config);
    }
}
