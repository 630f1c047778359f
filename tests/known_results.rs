use cop_win::arena::MoveGraph;
use cop_win::solve::{attractor, relax};
use cop_win::{is_cop_win, scenarios, GameState, Graph, Length, Turn};

#[test]
fn single_vertex_is_cop_win() {
    let g = scenarios::single_vertex();
    assert!(is_cop_win(&g));

    let moves = MoveGraph::build(&g.normalized());
    let table = relax::solve(&moves);
    assert_eq!(moves.board_len(), 2);
    assert!(table.iter().all(|(_, l)| l == Length::ZERO));
}

#[test]
fn path_like_graph_is_cop_win() {
    let g = scenarios::path_like();
    assert!(is_cop_win(&g));

    let moves = MoveGraph::build(&g.normalized());
    let table = relax::solve(&moves);
    assert_eq!(
        table.get(&GameState::new(1, 3, Turn::Cop)),
        Some(Length::Finite(1))
    );
    assert_eq!(
        table.get(&GameState::new(3, 1, Turn::Robber)),
        Some(Length::Finite(1))
    );
    assert_eq!(table.longest_capture(), Some(1));
}

#[test]
fn one_pitfall_graph_is_cop_win() {
    let g = scenarios::one_pitfall();
    assert!(is_cop_win(&g));

    let moves = MoveGraph::build(&g.normalized());
    let table = relax::solve(&moves);
    assert_eq!(moves.board_len(), 72);
    assert_eq!(moves.off_board_len(), 12);
    assert_eq!(
        table.get(&GameState::new(1, 1, Turn::Cop)),
        Some(Length::ZERO)
    );
    assert_eq!(table.unresolved().count(), 0);
    assert_eq!(
        table.get(&GameState::new(3, 1, Turn::Cop)),
        Some(Length::Finite(2))
    );
    assert_eq!(table.longest_capture(), Some(2));
}

#[test]
fn directed_triangle_resolves_every_state() {
    let g = scenarios::directed_triangle();
    let moves = MoveGraph::build(&g.normalized());
    let table = relax::solve(&moves);

    assert_eq!(moves.off_board_len(), 0);
    for (s, l) in table.iter() {
        let expected = if s.is_capture() {
            Length::ZERO
        } else {
            Length::Finite(1)
        };
        assert_eq!(l, expected, "state {s}");
    }
    assert!(is_cop_win(&g));
}

#[test]
fn classical_families() {
    for n in 1..=6 {
        assert!(is_cop_win(&scenarios::path(n)), "path {n}");
        assert!(is_cop_win(&scenarios::complete(n)), "complete {n}");
    }
    assert!(is_cop_win(&scenarios::star(5)));
    assert!(is_cop_win(&scenarios::cycle(3)));
    assert!(!is_cop_win(&scenarios::cycle(4)));
    assert!(!is_cop_win(&scenarios::cycle(5)));
}

#[test]
fn empty_graph_is_vacuously_cop_win() {
    assert!(is_cop_win(&Graph::new()));
}

#[test]
fn all_states_semantics_is_stricter_than_a_chosen_start() {
    // One-way edge 0 -> 1: a cop starting on 0 catches anyone, a cop starting on 1 is stuck.
    let g = Graph::from_adjacency([(0, vec![1]), (1, vec![])]);
    assert!(!is_cop_win(&g));

    let moves = MoveGraph::build(&g.normalized());
    let table = attractor::solve(&moves);
    assert_eq!(table.cop_start(), Some(0));
    assert_eq!(
        table.get(&GameState::new(1, 0, Turn::Cop)),
        Some(Length::Infinite)
    );

    let isolated = Graph::undirected(0..2, &[]);
    let moves = MoveGraph::build(&isolated.normalized());
    assert_eq!(attractor::solve(&moves).cop_start(), None);
}

#[test]
fn dangling_vertex_is_an_escape_hatch_that_counts_as_capture() {
    // Cop on 1 cannot reach a robber on 2, but the move 1 -> 3 leaves the board.
    let g = Graph::from_adjacency([(1, vec![3]), (2, vec![])]);
    let moves = MoveGraph::build(&g.normalized());
    let table = relax::solve(&moves);
    assert_eq!(
        table.get(&GameState::new(1, 2, Turn::Cop)),
        Some(Length::Finite(1))
    );
    // Cop stuck on 2 (self-loop only) never catches a robber on 1 who stays put.
    assert_eq!(
        table.get(&GameState::new(2, 1, Turn::Cop)),
        Some(Length::Infinite)
    );
}

#[test]
fn input_graph_is_not_mutated() {
    let g = scenarios::path_like();
    let before = g.clone();
    let _ = is_cop_win(&g);
    assert_eq!(g, before);
    assert!(!g.is_reflexive());
}
