//! Seat identification and per-seat data storage.
//!
//! ## Role
//!
//! Heads-up play has exactly two seats, `Role::P0` and `Role::P1`.
//! `Role::other()` is the "1 - role" used throughout the betting rules.
//!
//! ## Seats
//!
//! A fixed pair of values indexed by `Role`, used for stacks, bets,
//! hole cards and names.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at a heads-up table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    P0,
    P1,
}

impl Role {
    /// Both roles, in index order.
    pub const ALL: [Role; 2] = [Role::P0, Role::P1];

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Role::P0 => 0,
            Role::P1 => 1,
        }
    }

    /// The opponent's seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Role::P0 => Role::P1,
            Role::P1 => Role::P0,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{}", self.index())
    }
}

/// Per-seat data with O(1) access by `Role`.
///
/// ```
/// use limit_holdem::core::{Role, Seats};
///
/// let mut stacks = Seats::with_value(200u32);
/// stacks[Role::P1] -= 2;
/// assert_eq!(stacks[Role::P0], 200);
/// assert_eq!(stacks[Role::P1], 198);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seats<T> {
    data: [T; 2],
}

impl<T> Seats<T> {
    /// Create from explicit values for `P0` and `P1`.
    pub const fn new(p0: T, p1: T) -> Self {
        Self { data: [p0, p1] }
    }

    /// Create with values from a factory function.
    pub fn from_fn(factory: impl Fn(Role) -> T) -> Self {
        Self {
            data: [factory(Role::P0), factory(Role::P1)],
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Iterate over (Role, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &T)> {
        Role::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<Role> for Seats<T> {
    type Output = T;

    fn index(&self, role: Role) -> &Self::Output {
        &self.data[role.index()]
    }
}

impl<T> IndexMut<Role> for Seats<T> {
    fn index_mut(&mut self, role: Role) -> &mut Self::Output {
        &mut self.data[role.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_basics() {
        assert_eq!(Role::P0.index(), 0);
        assert_eq!(Role::P1.index(), 1);
        assert_eq!(Role::P0.other(), Role::P1);
        assert_eq!(Role::P1.other(), Role::P0);
        assert_eq!(format!("{}", Role::P1), "p1");
    }

    #[test]
    fn test_seats_from_fn() {
        let seats = Seats::from_fn(|r| r.index() as u32 * 10);
        assert_eq!(seats[Role::P0], 0);
        assert_eq!(seats[Role::P1], 10);
    }

    #[test]
    fn test_seats_mutation() {
        let mut seats = Seats::new(true, false);
        seats[Role::P1] = true;
        seats[Role::P0] = false;
        assert_eq!(seats, Seats::new(false, true));
    }

    #[test]
    fn test_seats_iter() {
        let seats = Seats::new(3, 4);
        let pairs: Vec<_> = seats.iter().collect();
        assert_eq!(pairs, vec![(Role::P0, &3), (Role::P1, &4)]);
        assert_eq!(seats.values().sum::<i32>(), 7);
    }

    #[test]
    fn test_seats_serialization() {
        let seats = Seats::new(1u32, 2u32);
        let json = serde_json::to_string(&seats).unwrap();
        let deserialized: Seats<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(seats, deserialized);
    }
}
