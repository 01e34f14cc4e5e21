//! Candidate routes through the state space.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::state::{Crossing, CrossingDirection, State};

/// An ordered, cycle-free sequence of states starting at the initial state.
///
/// A path of length `L` describes `L - 1` crossings. Each path owns its
/// states outright, so extending a clone never touches the original.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    states: Vec<State>,
}

impl Path {
    /// Create an empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path holding only the starting state
    pub fn from_initial(state: State) -> Self {
        Self {
            states: vec![state],
        }
    }

    pub fn contains(&self, state: &State) -> bool {
        self.states.contains(state)
    }

    /// Append `state` unless it is already on the path.
    ///
    /// Returns whether the state was appended.
    pub fn add(&mut self, state: State) -> bool {
        if self.contains(&state) {
            return false;
        }
        self.states.push(state);
        true
    }

    /// Clone with `state` appended, or `None` if that would revisit a state
    pub fn extended_with(&self, state: State) -> Option<Self> {
        if self.contains(&state) {
            return None;
        }
        let mut path = self.clone();
        path.states.push(state);
        Some(path)
    }

    pub fn terminal_state(&self) -> Result<&State> {
        self.states.last().ok_or(SearchError::EmptyPath)
    }

    /// Number of states, including the initial one
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn crossing_count(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    /// Boat trips between consecutive states, in order
    pub fn crossings(&self) -> impl Iterator<Item = Crossing> + '_ {
        self.states.windows(2).map(|pair| {
            let direction = CrossingDirection::departing_from(pair[0].boat);
            pair[1].action(&pair[0], direction)
        })
    }
}

/// Route rendering: the first board, then each crossing followed by the board
/// it produces.
impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(first) = self.states.first() else {
            return write!(f, "The path is empty");
        };

        writeln!(f, "{}", first)?;
        for (crossing, state) in self.crossings().zip(&self.states[1..]) {
            writeln!(f)?;
            writeln!(f, "{}", crossing)?;
            writeln!(f, "{}", state)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::BoatSide;

    fn two_step_path() -> Path {
        let mut path = Path::from_initial(State::initial(1, 1));
        path.add(State::new(0, 0, BoatSide::East, 1, 1));
        path
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut path = Path::from_initial(State::initial(2, 2));
        let next = State::new(1, 1, BoatSide::East, 1, 1);

        assert!(path.add(next));
        assert!(!path.add(next));
        // Equal under the West-bank key even with different East counts
        assert!(!path.add(State::new(2, 2, BoatSide::West, 9, 9)));
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn test_terminal_state() {
        let path = two_step_path();
        assert_eq!(
            path.terminal_state(),
            Ok(&State::new(0, 0, BoatSide::East, 1, 1))
        );
        assert_eq!(Path::new().terminal_state(), Err(SearchError::EmptyPath));
    }

    #[test]
    fn test_extension_does_not_touch_parent_or_siblings() {
        let parent = Path::from_initial(State::initial(2, 2));
        let a = parent
            .extended_with(State::new(1, 1, BoatSide::East, 1, 1))
            .unwrap();
        let mut b = parent
            .extended_with(State::new(0, 2, BoatSide::East, 2, 0))
            .unwrap();
        b.add(State::new(1, 2, BoatSide::West, 1, 0));

        assert_eq!(parent.len(), 1);
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 3);
        assert!(!a.contains(&State::new(0, 2, BoatSide::East, 2, 0)));
        assert!(parent.extended_with(State::initial(2, 2)).is_none());
    }

    #[test]
    fn test_crossings() {
        let path = two_step_path();
        let crossings: Vec<_> = path.crossings().collect();

        assert_eq!(path.crossing_count(), 1);
        assert_eq!(
            crossings,
            vec![Crossing {
                direction: CrossingDirection::Send,
                cannibals: 1,
                missionaries: 1,
            }]
        );
    }

    #[test]
    fn test_route_rendering() {
        assert_eq!(Path::new().to_string(), "The path is empty");
        assert_eq!(
            two_step_path().to_string(),
            "C ~~\nM ~~\n\nSEND 1 CANNIBALS 1 MISSIONARIES\n  ~~ C\n  ~~ M\n"
        );
    }
}
