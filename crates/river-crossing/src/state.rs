//! World state for the river crossing puzzle.
//!
//! A [`State`] is a snapshot of how many cannibals and missionaries stand on
//! each bank and which bank holds the boat. States are small `Copy` values;
//! the search creates new ones for every move instead of mutating.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::hash::{Hash, Hasher};

/// Bank of the river the boat is moored at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoatSide {
    West,
    East,
}

impl BoatSide {
    pub fn opposite(self) -> BoatSide {
        match self {
            BoatSide::West => BoatSide::East,
            BoatSide::East => BoatSide::West,
        }
    }
}

/// Direction of a single boat trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossingDirection {
    /// West to East
    Send,
    /// East to West
    Return,
}

impl CrossingDirection {
    /// Direction of a trip that leaves from `side`
    pub fn departing_from(side: BoatSide) -> Self {
        match side {
            BoatSide::West => CrossingDirection::Send,
            BoatSide::East => CrossingDirection::Return,
        }
    }
}

/// Passengers carried by one boat trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crossing {
    pub direction: CrossingDirection,
    pub cannibals: u32,
    pub missionaries: u32,
}

impl std::fmt::Display for Crossing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self.direction {
            CrossingDirection::Send => "SEND",
            CrossingDirection::Return => "RETURN",
        };
        write!(
            f,
            "{} {} CANNIBALS {} MISSIONARIES",
            verb, self.cannibals, self.missionaries
        )
    }
}

/// Snapshot of both banks and the boat.
///
/// Equality and hashing only look at the boat side and the West bank counts.
/// The East bank is implied because totals never change during a run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub cannibals_west: u32,
    pub missionaries_west: u32,
    pub cannibals_east: u32,
    pub missionaries_east: u32,
    pub boat: BoatSide,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.boat == other.boat
            && self.cannibals_west == other.cannibals_west
            && self.missionaries_west == other.missionaries_west
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.boat.hash(state);
        self.cannibals_west.hash(state);
        self.missionaries_west.hash(state);
    }
}

impl State {
    pub fn new(
        cannibals_west: u32,
        missionaries_west: u32,
        boat: BoatSide,
        cannibals_east: u32,
        missionaries_east: u32,
    ) -> Self {
        Self {
            cannibals_west,
            missionaries_west,
            cannibals_east,
            missionaries_east,
            boat,
        }
    }

    /// Everyone and the boat on the West bank
    pub fn initial(cannibals: u32, missionaries: u32) -> Self {
        Self::new(cannibals, missionaries, BoatSide::West, 0, 0)
    }

    /// Everyone and the boat on the East bank
    pub fn goal(cannibals: u32, missionaries: u32) -> Self {
        Self::new(0, 0, BoatSide::East, cannibals, missionaries)
    }

    pub fn total_cannibals(&self) -> u32 {
        self.cannibals_west + self.cannibals_east
    }

    pub fn total_missionaries(&self) -> u32 {
        self.missionaries_west + self.missionaries_east
    }

    /// (cannibals, missionaries) on the given bank
    pub fn bank(&self, side: BoatSide) -> (u32, u32) {
        match side {
            BoatSide::West => (self.cannibals_west, self.missionaries_west),
            BoatSide::East => (self.cannibals_east, self.missionaries_east),
        }
    }

    /// Check that no bank with missionaries on it has more cannibals than
    /// missionaries. A bank holding only cannibals is always safe.
    pub fn is_state_safe(&self) -> bool {
        is_group_safe(self.cannibals_west, self.missionaries_west)
            && is_group_safe(self.cannibals_east, self.missionaries_east)
    }

    /// Check that the boat load moving from `self` to `next` is safe.
    ///
    /// The load is the change on the departure bank, i.e. the bank holding
    /// the boat in `self`. The boat obeys the same rule as a bank.
    pub fn is_action_safe(&self, next: &State) -> bool {
        let (cannibals_before, missionaries_before) = self.bank(self.boat);
        let (cannibals_after, missionaries_after) = next.bank(self.boat);

        let cannibals_aboard = cannibals_before.abs_diff(cannibals_after);
        let missionaries_aboard = missionaries_before.abs_diff(missionaries_after);

        is_group_safe(cannibals_aboard, missionaries_aboard)
    }

    /// Generate every safe state reachable with one boat trip.
    ///
    /// Loads are enumerated with the cannibal count as the outer loop and the
    /// missionary count as the inner loop, both ascending.
    pub fn generate_expansions(&self, boat_capacity: u32) -> SmallVec<[State; 8]> {
        let mut expansions = SmallVec::new();
        let (cannibals_here, missionaries_here) = self.bank(self.boat);

        for i in 0..=cannibals_here {
            for j in 0..=missionaries_here {
                let load = i + j;
                if load == 0 || load > boat_capacity {
                    continue;
                }

                let next = self.transfer(i, j);
                if next.is_state_safe() && self.is_action_safe(&next) {
                    expansions.push(next);
                }
            }
        }

        expansions
    }

    /// Describe the trip that led from `prev` to this state
    pub fn action(&self, prev: &State, direction: CrossingDirection) -> Crossing {
        let (cannibals, missionaries) = match direction {
            CrossingDirection::Send => (
                self.cannibals_east.abs_diff(prev.cannibals_east),
                self.missionaries_east.abs_diff(prev.missionaries_east),
            ),
            CrossingDirection::Return => (
                self.cannibals_west.abs_diff(prev.cannibals_west),
                self.missionaries_west.abs_diff(prev.missionaries_west),
            ),
        };

        Crossing {
            direction,
            cannibals,
            missionaries,
        }
    }

    // Move passengers off the boat's bank and flip the boat. Callers keep the
    // counts within what the bank holds.
    fn transfer(&self, cannibals: u32, missionaries: u32) -> State {
        match self.boat {
            BoatSide::West => State::new(
                self.cannibals_west - cannibals,
                self.missionaries_west - missionaries,
                BoatSide::East,
                self.cannibals_east + cannibals,
                self.missionaries_east + missionaries,
            ),
            BoatSide::East => State::new(
                self.cannibals_west + cannibals,
                self.missionaries_west + missionaries,
                BoatSide::West,
                self.cannibals_east - cannibals,
                self.missionaries_east - missionaries,
            ),
        }
    }
}

fn is_group_safe(cannibals: u32, missionaries: u32) -> bool {
    missionaries == 0 || cannibals <= missionaries
}

/// Board rendering: a cannibal row above a missionary row, West column first.
///
/// ```text
/// CC   ~~ C
/// M    ~~ MM
/// ```
impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.total_cannibals().max(self.total_missionaries()) as usize;
        let rows = [
            ("C", self.cannibals_west, self.cannibals_east),
            ("M", self.missionaries_west, self.missionaries_east),
        ];

        for (index, (glyph, west, east)) in rows.into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            let west = glyph.repeat(west as usize);
            let east = glyph.repeat(east as usize);
            let line = format!("{:<width$} ~~ {}", west, east, width = width);
            write!(f, "{}", line.trim_end())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boat_side_opposite() {
        assert_eq!(BoatSide::West.opposite(), BoatSide::East);
        assert_eq!(BoatSide::East.opposite(), BoatSide::West);
    }

    #[test]
    fn test_equality_ignores_east_counts() {
        let a = State::new(1, 2, BoatSide::West, 2, 1);
        let b = State::new(1, 2, BoatSide::West, 5, 5);
        let c = State::new(1, 2, BoatSide::East, 2, 1);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_state_safety() {
        assert!(State::initial(3, 3).is_state_safe());
        // Cannibals alone on a bank endanger nobody
        assert!(State::new(3, 0, BoatSide::West, 0, 3).is_state_safe());
        assert!(!State::new(2, 1, BoatSide::West, 1, 2).is_state_safe());
        assert!(!State::new(1, 2, BoatSide::East, 2, 1).is_state_safe());
    }

    #[test]
    fn test_action_safety_counts_departure_bank() {
        let before = State::initial(3, 3);

        // Two cannibals and one missionary aboard: missionary outnumbered
        let outnumbered = State::new(1, 2, BoatSide::East, 2, 1);
        assert!(!before.is_action_safe(&outnumbered));

        let balanced = State::new(2, 2, BoatSide::East, 1, 1);
        assert!(before.is_action_safe(&balanced));

        let only_cannibals = State::new(1, 3, BoatSide::East, 2, 0);
        assert!(before.is_action_safe(&only_cannibals));

        let back = State::new(2, 3, BoatSide::West, 1, 0);
        let after_return = State::new(1, 3, BoatSide::East, 2, 0);
        assert!(after_return.is_action_safe(&back));
    }

    #[test]
    fn test_generate_expansions_order() {
        let start = State::initial(2, 2);
        let expansions = start.generate_expansions(2);

        // Sending a single missionary leaves the other one outnumbered
        assert_eq!(
            expansions.as_slice(),
            &[
                State::new(2, 0, BoatSide::East, 0, 2),
                State::new(1, 2, BoatSide::East, 1, 0),
                State::new(1, 1, BoatSide::East, 1, 1),
                State::new(0, 2, BoatSide::East, 2, 0),
            ]
        );
    }

    #[test]
    fn test_generate_expansions_respects_capacity() {
        let start = State::initial(3, 3);
        for next in start.generate_expansions(1) {
            let (c, m) = next.bank(BoatSide::East);
            assert_eq!(c + m, 1);
        }
        assert!(start.generate_expansions(0).is_empty());
    }

    #[test]
    fn test_expansions_are_safe_and_conserve_totals() {
        let start = State::initial(4, 5);
        for next in start.generate_expansions(3) {
            assert!(next.is_state_safe());
            assert!(start.is_action_safe(&next));
            assert_eq!(next.total_cannibals(), 4);
            assert_eq!(next.total_missionaries(), 5);
            assert_eq!(next.boat, BoatSide::East);
        }
    }

    #[test]
    fn test_action_description() {
        let prev = State::initial(3, 3);
        let next = State::new(2, 2, BoatSide::East, 1, 1);
        let send = next.action(&prev, CrossingDirection::Send);
        assert_eq!(send.to_string(), "SEND 1 CANNIBALS 1 MISSIONARIES");

        let back = State::new(2, 3, BoatSide::West, 1, 0);
        let ret = back.action(&next, CrossingDirection::Return);
        assert_eq!(ret.to_string(), "RETURN 0 CANNIBALS 1 MISSIONARIES");
    }

    #[test]
    fn test_board_rendering() {
        let state = State::new(2, 1, BoatSide::East, 1, 2);
        assert_eq!(state.to_string(), "CC  ~~ C\nM   ~~ MM");

        let empty_east = State::initial(1, 2);
        assert_eq!(empty_east.to_string(), "C  ~~\nMM ~~");
    }
}
