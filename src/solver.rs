use std::collections::HashSet;

use tracing::debug;

use crate::error::Result;
use crate::model::PuzzleState;

pub type NodeId = usize;

#[derive(Clone, Debug)]
struct Node {
    state: PuzzleState,
    /// Back-index only; ownership stays with the arena.
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// The explored network of puzzle states, built lazily by the solver.
///
/// Nodes live in an arena indexed by [`NodeId`], with the root at index 0.
/// A separate canonical-form set mirrors every state in the arena so
/// network membership is O(1) instead of a walk over the whole tree; the
/// parent back-indices are kept purely for trace reconstruction.
pub struct SearchTree {
    nodes: Vec<Node>,
    seen: HashSet<PuzzleState>,
}

impl SearchTree {
    pub const ROOT: NodeId = 0;

    pub fn new(root: PuzzleState) -> Self {
        let mut seen = HashSet::new();
        seen.insert(root.clone());
        Self {
            nodes: vec![Node {
                state: root,
                parent: None,
                children: Vec::new(),
            }],
            seen,
        }
    }

    /// Number of states explored so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        false // there is always a root
    }

    pub fn get_state(&self, id: NodeId) -> &PuzzleState {
        &self.nodes[id].state
    }

    pub fn get_parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    pub fn get_children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    /// Follows parent links from `id` up to the parentless root.
    pub fn top_ancestor(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(parent) = self.nodes[current].parent {
            current = parent;
        }
        current
    }

    /// True iff a state structurally equal to `candidate` exists in the
    /// subtree rooted at `id`.
    pub fn contains_in_tree(&self, id: NodeId, candidate: &PuzzleState) -> bool {
        if self.nodes[id].state == *candidate {
            return true;
        }
        self.nodes[id]
            .children
            .iter()
            .any(|&child| self.contains_in_tree(child, candidate))
    }

    /// Membership against the entire explored network.
    ///
    /// Equivalent to `contains_in_tree(top_ancestor(..), candidate)`, but
    /// answered from the canonical-form set. A pour can regenerate a state
    /// first reached via a sibling branch, so the whole network is the
    /// right scope — local-subtree checks would not terminate reversible
    /// pour loops.
    pub fn network_contains(&self, candidate: &PuzzleState) -> bool {
        self.seen.contains(candidate)
    }

    /// Derives a candidate for every ordered pair of distinct positions
    /// and attaches the ones not already present anywhere in the network.
    /// Returns the number of children actually appended.
    ///
    /// States with fewer than two containers expand to zero children.
    pub fn expand(&mut self, id: NodeId) -> Result<usize> {
        let count = self.nodes[id].state.len();
        let mut appended = 0;
        for from in 0..count {
            for to in 0..count {
                if from == to {
                    continue;
                }
                let candidate = self.nodes[id].state.apply_pour(from, to)?;
                if self.network_contains(&candidate) {
                    continue;
                }
                let child = self.nodes.len();
                self.seen.insert(candidate.clone());
                self.nodes.push(Node {
                    state: candidate,
                    parent: Some(id),
                    children: Vec::new(),
                });
                self.nodes[id].children.push(child);
                appended += 1;
            }
        }
        debug!("expanded node {id} into {appended} new states");
        Ok(appended)
    }

    /// The parent chain of `id` as states, root first. Reads as the pour
    /// history from the initial configuration down to `id`.
    pub fn trace(&self, id: NodeId) -> Vec<&PuzzleState> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current {
            path.push(&self.nodes[node].state);
            current = self.nodes[node].parent;
        }
        path.reverse();
        path
    }
}

/// Depth-first solvability search over a lazily built [`SearchTree`].
///
/// The goal quantity is an explicit parameter. At each node the goal test
/// runs before expansion and expansion before recursion; children are
/// visited in insertion order with a short-circuit on the first solved
/// branch.
pub struct Solver {
    target: usize,
    tree: SearchTree,
    solution: Option<NodeId>,
}

impl Solver {
    pub fn new(initial: PuzzleState, target: usize) -> Solver {
        Solver {
            target,
            tree: SearchTree::new(initial),
            solution: None,
        }
    }

    pub fn get_target(&self) -> usize {
        self.target
    }

    pub fn get_tree(&self) -> &SearchTree {
        &self.tree
    }

    /// Whether any reachable configuration puts `target` units in some
    /// container. On success the solution trace is logged and retained
    /// for [`Solver::solution_trace`].
    pub fn is_solvable(&mut self) -> Result<bool> {
        self.solve_from(SearchTree::ROOT)
    }

    fn solve_from(&mut self, id: NodeId) -> Result<bool> {
        if self.tree.get_state(id).is_goal(self.target) {
            self.solution = Some(id);
            self.print_trace(id);
            return Ok(true);
        }
        if self.tree.expand(id)? == 0 {
            // No new, non-duplicate children: dead end.
            return Ok(false);
        }
        let children = self.tree.get_children(id).to_vec();
        for child in children {
            if self.solve_from(child)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// The root-to-goal pour sequence, available after a successful
    /// [`Solver::is_solvable`] run.
    pub fn solution_trace(&self) -> Option<Vec<&PuzzleState>> {
        self.solution.map(|id| self.tree.trace(id))
    }

    fn print_trace(&self, id: NodeId) {
        for state in self.tree.trace(id) {
            debug!("{}", state.get_text_representation());
        }
    }
}
