//! Property tests over small random graphs, dangling neighbors included.

use cop_win::arena::MoveGraph;
use cop_win::solve::relax::Relaxation;
use cop_win::solve::{attractor, relax, strategy};
use cop_win::{Graph, Length, Turn};
use proptest::prelude::*;

/// Up to six key vertices `0..n`; neighbors are drawn from `0..n + 2`, so some are dangling.
fn arb_graph() -> impl Strategy<Value = Graph> {
    (0i64..6).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(0..n + 2, 0..4), n as usize).prop_map(|adj| {
            Graph::from_adjacency(
                adj.into_iter()
                    .enumerate()
                    .map(|(v, ns)| (v as i64, ns)),
            )
        })
    })
}

proptest! {
    #[test]
    fn normalization_is_idempotent(g in arb_graph()) {
        let once = g.normalized();
        prop_assert_eq!(once.normalized(), once);
    }

    #[test]
    fn normalized_keys_have_self_loops(g in arb_graph()) {
        let n = g.normalized();
        prop_assert!(n.is_reflexive());
        for v in n.vertices() {
            prop_assert!(n.neighbors(v).unwrap().contains(&v));
        }
        prop_assert_eq!(n.vertex_count(), g.vertex_count());
    }

    #[test]
    fn turns_split_the_state_space_evenly(g in arb_graph()) {
        let moves = MoveGraph::build(&g.normalized());
        let v = g.vertex_count();
        prop_assert_eq!(moves.count_turn(Turn::Cop), v * v);
        prop_assert_eq!(moves.count_turn(Turn::Robber), v * v);
    }

    #[test]
    fn successors_move_only_the_player_to_move(g in arb_graph()) {
        let n = g.normalized();
        let moves = MoveGraph::build(&n);
        for s in moves.board_states() {
            let legal = n.neighbors(s.mover()).unwrap();
            let succ: Vec<_> = moves.successors(&s).unwrap().collect();
            for t in succ {
                prop_assert_eq!(t.turn, s.turn.other());
                match s.turn {
                    Turn::Cop => {
                        prop_assert_eq!(t.robber, s.robber);
                        prop_assert!(legal.contains(&t.cop));
                    }
                    Turn::Robber => {
                        prop_assert_eq!(t.cop, s.cop);
                        prop_assert!(legal.contains(&t.robber));
                    }
                }
            }
        }
    }

    #[test]
    fn captured_states_have_length_zero(g in arb_graph()) {
        let moves = MoveGraph::build(&g.normalized());
        let table = relax::solve(&moves);
        for (s, l) in table.iter() {
            if s.is_capture() {
                prop_assert_eq!(l, Length::ZERO);
            } else {
                prop_assert_ne!(l, Length::ZERO);
            }
        }
    }

    #[test]
    fn relaxation_is_monotone(g in arb_graph()) {
        let moves = MoveGraph::build(&g.normalized());
        let mut relax = Relaxation::new(&moves);
        let mut prev = relax.lengths().to_vec();
        while !relax.is_converged() {
            relax.pass();
            for (before, after) in prev.iter().zip(relax.lengths()) {
                prop_assert!(after <= before);
                if before.is_finite() {
                    prop_assert_eq!(after, before);
                }
            }
            prev = relax.lengths().to_vec();
        }
    }

    #[test]
    fn attractor_matches_relaxation(g in arb_graph()) {
        let moves = MoveGraph::build(&g.normalized());
        let r = relax::solve(&moves);
        let a = attractor::solve(&moves);
        for id in 0..moves.len() {
            prop_assert_eq!(r.length_of(id), a.length_of(id), "state {}", moves.state(id));
        }
        prop_assert_eq!(r.is_cop_win(), cop_win::is_cop_win(&g));
    }

    #[test]
    fn principal_line_spends_exactly_the_table_length(g in arb_graph()) {
        let moves = MoveGraph::build(&g.normalized());
        let table = relax::solve(&moves);
        for (s, l) in table.iter() {
            let Some(n) = l.finite() else {
                prop_assert!(strategy::principal_line(&table, &s).is_none());
                continue;
            };
            let line = strategy::principal_line(&table, &s).unwrap();
            let cop_moves = line
                .iter()
                .filter(|t| t.turn == Turn::Cop && !t.is_capture() && moves.successors(t).is_some())
                .count() as u32;
            prop_assert_eq!(cop_moves, n, "from {}", s);
        }
    }
}
