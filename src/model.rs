use std::fmt;

use crate::error::{PuzzleError, Result};

/// Goal quantity of the classic three-jug puzzle. Only a default: the
/// solver always takes the target as an explicit parameter.
pub const DEFAULT_TARGET: usize = 4;

/// A bounded vessel holding a measured amount of water.
///
/// Instances are immutable: a pour produces two new containers and leaves
/// its operands untouched. `fill <= capacity` always holds, enforced at
/// construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Container {
    capacity: usize,
    fill: usize,
}

impl Container {
    pub fn new(capacity: usize, fill: usize) -> Result<Self> {
        if fill > capacity {
            return Err(PuzzleError::InvalidState { capacity, fill });
        }
        Ok(Self { capacity, fill })
    }

    pub fn get_capacity(&self) -> usize {
        self.capacity
    }

    pub fn get_fill(&self) -> usize {
        self.fill
    }

    pub fn get_space(&self) -> usize {
        self.capacity - self.fill
    }

    pub fn is_empty(&self) -> bool {
        self.fill == 0
    }

    pub fn is_full(&self) -> bool {
        self.fill == self.capacity
    }

    pub fn is_goal(&self, target: usize) -> bool {
        self.fill == target
    }

    /// How much water would actually move in a pour into `other`:
    /// bounded by this container's fill and the other's remaining space.
    pub fn get_pourable_amount(&self, other: &Container) -> usize {
        self.fill.min(other.get_space())
    }

    /// Pour as much as possible into `other`, returning the resulting
    /// `(source, destination)` pair as new containers.
    ///
    /// An empty source or a full destination moves nothing, and the pair
    /// is structurally equal to the inputs.
    pub fn pour_into(&self, other: &Container) -> (Container, Container) {
        let amount = self.get_pourable_amount(other);
        (
            Container {
                capacity: self.capacity,
                fill: self.fill - amount,
            },
            Container {
                capacity: other.capacity,
                fill: other.fill + amount,
            },
        )
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.fill, self.capacity)
    }
}

/// One full configuration of all containers at a point in the search.
///
/// Container order is significant: positions identify container roles, so
/// equality (and hashing, for the visited set) is positional, not
/// multiset-based.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    containers: Vec<Container>,
}

impl PuzzleState {
    /// Builds a state from `(capacity, fill)` pairs, validating each pair
    /// through [`Container::new`].
    pub fn new(configurations: &[(usize, usize)]) -> Result<Self> {
        let containers = configurations
            .iter()
            .map(|&(capacity, fill)| Container::new(capacity, fill))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { containers })
    }

    pub fn get_containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// True iff any container holds exactly `target`.
    pub fn is_goal(&self, target: usize) -> bool {
        self.containers.iter().any(|c| c.is_goal(target))
    }

    /// Derives the state reached by pouring position `from` into position
    /// `to`. The two positions must be distinct and in range; everything
    /// else is copied unchanged. The result is free-standing — attaching
    /// it to a search tree is the caller's concern.
    pub fn apply_pour(&self, from: usize, to: usize) -> Result<PuzzleState> {
        let count = self.containers.len();
        if from == to || from >= count || to >= count {
            return Err(PuzzleError::InvalidIndex { from, to, count });
        }
        let mut containers = self.containers.clone();
        let (source, destination) = self.containers[from].pour_into(&self.containers[to]);
        containers[from] = source;
        containers[to] = destination;
        Ok(PuzzleState { containers })
    }

    pub fn get_text_representation(&self) -> String {
        let parts: Vec<String> = self.containers.iter().map(|c| c.to_string()).collect();
        parts.join(" ")
    }
}

impl Default for PuzzleState {
    /// The classic three-jug puzzle: 3 and 5 empty, 8 full.
    fn default() -> Self {
        Self {
            containers: vec![
                Container {
                    capacity: 3,
                    fill: 0,
                },
                Container {
                    capacity: 5,
                    fill: 0,
                },
                Container {
                    capacity: 8,
                    fill: 8,
                },
            ],
        }
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_text_representation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_rejects_overfill() {
        assert_eq!(
            Container::new(1, 2),
            Err(PuzzleError::InvalidState {
                capacity: 1,
                fill: 2
            })
        );
    }

    #[test]
    fn construction_accepts_full_and_empty() {
        assert!(Container::new(5, 5).is_ok());
        assert!(Container::new(5, 0).is_ok());
        assert!(Container::new(0, 0).is_ok());
    }

    #[test]
    fn space_is_capacity_minus_fill() {
        let c = Container::new(3, 1).unwrap();
        assert_eq!(c.get_space(), 2);
    }

    #[test]
    fn container_equality_is_structural() {
        let c = Container::new(5, 4).unwrap();
        assert_ne!(c, Container::new(6, 4).unwrap());
        assert_ne!(c, Container::new(5, 5).unwrap());
        assert_eq!(c, Container::new(5, 4).unwrap());
    }

    #[test]
    fn pour_conserves_total_volume() {
        let a = Container::new(5, 5).unwrap();
        let b = Container::new(3, 0).unwrap();
        let (a2, b2) = a.pour_into(&b);
        assert_eq!(a.get_fill() + b.get_fill(), a2.get_fill() + b2.get_fill());
        assert_eq!(a2.get_fill(), 2);
        assert_eq!(b2.get_fill(), 3);
    }

    #[test]
    fn pour_from_empty_changes_nothing() {
        let a = Container::new(3, 0).unwrap();
        let b = Container::new(5, 1).unwrap();
        let (a2, b2) = a.pour_into(&b);
        assert_eq!(a2, a);
        assert_eq!(b2, b);
    }

    #[test]
    fn pour_into_full_changes_nothing() {
        let a = Container::new(3, 3).unwrap();
        let b = Container::new(5, 5).unwrap();
        let (a2, b2) = a.pour_into(&b);
        assert_eq!(a2, a);
        assert_eq!(b2, b);
    }

    #[test]
    fn pour_leaves_operands_untouched() {
        let a = Container::new(5, 5).unwrap();
        let b = Container::new(3, 0).unwrap();
        let _ = a.pour_into(&b);
        assert_eq!(a.get_fill(), 5);
        assert_eq!(b.get_fill(), 0);
    }

    #[test]
    fn state_equality_is_order_sensitive() {
        let a = PuzzleState::new(&[(3, 0), (5, 5)]).unwrap();
        let b = PuzzleState::new(&[(5, 5), (3, 0)]).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, PuzzleState::new(&[(3, 0), (5, 5)]).unwrap());
    }

    #[test]
    fn empty_states_are_trivially_equal() {
        let a = PuzzleState::new(&[]).unwrap();
        let b = PuzzleState::new(&[]).unwrap();
        assert_eq!(a, b);
        assert!(!a.is_goal(0));
    }

    #[test]
    fn state_goal_is_any_container_at_target() {
        let s = PuzzleState::new(&[(3, 0), (5, 4)]).unwrap();
        assert!(s.is_goal(4));
        assert!(s.is_goal(0));
        assert!(!s.is_goal(2));
    }

    #[test]
    fn state_construction_propagates_container_error() {
        assert_eq!(
            PuzzleState::new(&[(3, 0), (2, 4)]),
            Err(PuzzleError::InvalidState {
                capacity: 2,
                fill: 4
            })
        );
    }

    #[test]
    fn apply_pour_moves_water_between_positions() {
        let s = PuzzleState::new(&[(3, 3), (5, 1)]).unwrap();
        let next = s.apply_pour(0, 1).unwrap();
        assert_eq!(next, PuzzleState::new(&[(3, 0), (5, 4)]).unwrap());
        // Source state is unchanged.
        assert_eq!(s, PuzzleState::new(&[(3, 3), (5, 1)]).unwrap());
    }

    #[test]
    fn apply_pour_rejects_self_and_out_of_range() {
        let s = PuzzleState::new(&[(3, 0), (5, 5)]).unwrap();
        assert_eq!(
            s.apply_pour(1, 1),
            Err(PuzzleError::InvalidIndex {
                from: 1,
                to: 1,
                count: 2
            })
        );
        assert_eq!(
            s.apply_pour(0, 2),
            Err(PuzzleError::InvalidIndex {
                from: 0,
                to: 2,
                count: 2
            })
        );
    }

    #[test]
    fn default_puzzle_is_three_containers() {
        let s = PuzzleState::default();
        assert_eq!(s, PuzzleState::new(&[(3, 0), (5, 0), (8, 8)]).unwrap());
    }

    #[test]
    fn text_representation_lists_fill_over_capacity() {
        let s = PuzzleState::new(&[(3, 0), (5, 4)]).unwrap();
        assert_eq!(s.get_text_representation(), "0/3 4/5");
    }
}
