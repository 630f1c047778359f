use rustc_hash::FxHashMap;

use crate::arena::enumerate;
use crate::graph::Graph;
use crate::resources::{infallible, Budget, Unbounded};
use crate::state::{GameState, Turn};

pub type NodeId = usize;

#[derive(Clone, Debug)]
pub struct Node {
    pub state: GameState,
    /// The state mentions a vertex with no adjacency entry. Off-board nodes have no successors
    /// and are not part of the state space proper.
    pub off_board: bool,
    pub succ: Vec<NodeId>,
    pub pred: Vec<NodeId>,
}

/// The turn-based state graph of the game on one normalized graph.
///
/// Ids `0..board_len()` are the on-board states in [`enumerate::board_states`] order; off-board
/// successor targets follow in order of first appearance.
#[derive(Clone, Debug)]
pub struct MoveGraph {
    pub nodes: Vec<Node>,
    index: FxHashMap<GameState, NodeId>,
    board_len: usize,
}

impl MoveGraph {
    /// Build the move graph of an already normalized graph.
    pub fn build(graph: &Graph) -> Self {
        infallible(MoveGraphBuilder::new(graph).try_build(&mut Unbounded))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of on-board states.
    #[inline]
    pub fn board_len(&self) -> usize {
        self.board_len
    }

    #[inline]
    pub fn off_board_len(&self) -> usize {
        self.nodes.len() - self.board_len
    }

    #[inline]
    pub fn is_off_board(&self, id: NodeId) -> bool {
        id >= self.board_len
    }

    pub fn id_of(&self, state: &GameState) -> Option<NodeId> {
        self.index.get(state).copied()
    }

    #[inline]
    pub fn state(&self, id: NodeId) -> GameState {
        self.nodes[id].state
    }

    /// Successors of an on-board state; `None` for states outside the graph or off the board.
    pub fn successors(&self, state: &GameState) -> Option<impl Iterator<Item = GameState> + '_> {
        let id = self.id_of(state).filter(|&id| !self.is_off_board(id))?;
        Some(self.nodes[id].succ.iter().map(move |&s| self.nodes[s].state))
    }

    /// On-board states in id order.
    pub fn board_states(&self) -> impl Iterator<Item = GameState> + '_ {
        self.nodes[..self.board_len].iter().map(|n| n.state)
    }

    pub fn count_turn(&self, turn: Turn) -> usize {
        self.board_states().filter(|s| s.turn == turn).count()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.succ.len()).sum()
    }
}

pub struct MoveGraphBuilder<'g> {
    pub graph: &'g Graph,
}

impl<'g> MoveGraphBuilder<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Enumerate all on-board states and connect each to the states one legal move away.
    ///
    /// For the state `(x, y, Cop)` and every neighbor `z` of `x` there is an edge to
    /// `(z, y, Robber)`; for `(y, x, Robber)` an edge to `(y, z, Cop)`. The graph is expected to
    /// be normalized already, otherwise passing is not always legal.
    pub fn try_build<B: Budget>(&self, budget: &mut B) -> Result<MoveGraph, B::Error> {
        let graph = self.graph;
        let board_len = enumerate::board_state_count(graph);
        budget.bump_states("move_graph", board_len)?;

        let mut nodes: Vec<Node> = Vec::with_capacity(board_len);
        let mut index: FxHashMap<GameState, NodeId> = FxHashMap::default();
        index.reserve(board_len);

        for state in enumerate::board_states(graph) {
            index.insert(state, nodes.len());
            nodes.push(Node {
                state,
                off_board: false,
                succ: Vec::new(),
                pred: Vec::new(),
            });
        }
        debug_assert_eq!(nodes.len(), board_len);

        // Fill edges.
        for id in 0..board_len {
            let state = nodes[id].state;
            let moves = graph.neighbors(state.mover()).unwrap_or(&[]);
            budget.bump_edges("move_graph", moves.len())?;

            let mut succ_ids: Vec<NodeId> = Vec::with_capacity(moves.len());
            for &to in moves {
                let next = state.advance(to);
                let next_id = match index.get(&next) {
                    Some(&nid) => nid,
                    None => {
                        let nid = nodes.len();
                        index.insert(next, nid);
                        nodes.push(Node {
                            state: next,
                            off_board: true,
                            succ: Vec::new(),
                            pred: Vec::new(),
                        });
                        nid
                    }
                };
                succ_ids.push(next_id);
            }

            // Determinise the successor list.
            succ_ids.sort_unstable();
            succ_ids.dedup();

            for &s in &succ_ids {
                nodes[s].pred.push(id);
            }
            nodes[id].succ = succ_ids;
        }

        let moves = MoveGraph {
            nodes,
            index,
            board_len,
        };
        tracing::info!(
            vertices = graph.vertex_count(),
            states = moves.board_len(),
            off_board = moves.off_board_len(),
            edges = moves.edge_count(),
            "built move graph"
        );
        Ok(moves)
    }
}
