use crate::node::Node;
use crate::solver::{ordered, simplify_all, solve, SolverError};

#[test]
fn rejects_wrong_card_counts() {
    assert_eq!(solve(5, &[]).err(), Some(SolverError::WrongCardCount(0)));
    assert_eq!(
        solve(5, &[1, 2]).err(),
        Some(SolverError::WrongCardCount(2))
    );
    assert_eq!(
        solve(5, &[1, 2, 3, 4, 5, 6]).err(),
        Some(SolverError::WrongCardCount(6))
    );
}

#[test]
fn solves_three_card_puzzles() {
    let solutions: Vec<Node> = solve(6, &[1, 2, 3]).unwrap().collect();
    assert!(!solutions.is_empty());
    for solution in &solutions {
        assert_eq!(solution.value(), 6, "for {}", solution);
    }
}

#[test]
fn solves_four_card_puzzles() {
    for (target, cards) in [
        (23, [16, 1, 1, 8]),
        (18, [15, 21, 8, 5]),
        (24, [1, 3, 4, 3]),
        (19, [1, 7, 2, 3]),
    ] {
        let mut solver = solve(target, &cards).unwrap();
        assert!(solver.next().is_some(), "{} from {:?}", target, cards);
    }
}

#[test]
fn solves_five_card_puzzles() {
    for (target, cards) in [
        (23, [16, 4, 1, 1, 8]),
        (18, [15, 21, 8, 5, 5]),
        (17, [2, 2, 2, 3, 5]),
        (18, [15, 8, 8, 5, 5]),
    ] {
        let mut solver = solve(target, &cards).unwrap();
        assert!(solver.next().is_some(), "{} from {:?}", target, cards);
    }
}

#[test]
fn every_yielded_node_evaluates_to_the_target() {
    let solutions: Vec<Node> = solve(23, &[16, 4, 1, 1, 8]).unwrap().collect();
    assert!(!solutions.is_empty());
    for solution in &solutions {
        assert_eq!(solution.value(), 23, "for {}", solution);
    }
}

#[test]
fn an_unsolvable_puzzle_yields_nothing() {
    let mut solver = solve(97, &[1, 1, 1]).unwrap();
    assert!(solver.next().is_none());
}

#[test]
fn simplify_reduces_to_30_distinct_solutions() {
    let solutions = simplify_all(solve(11, &[2, 4, 7, 8, 17]).unwrap());
    assert_eq!(solutions.len(), 30);
}

#[test]
fn simplify_reduces_to_8_distinct_solutions() {
    let solutions = simplify_all(solve(23, &[3, 4, 11, 13, 20]).unwrap());
    assert_eq!(solutions.len(), 8);
}

#[test]
fn simplify_all_is_idempotent() {
    let once = simplify_all(solve(23, &[3, 4, 11, 13, 20]).unwrap());
    let twice = simplify_all(once.iter().cloned());
    assert_eq!(once, twice);
}

#[test]
fn simplify_all_preserves_every_value() {
    for solution in simplify_all(solve(11, &[2, 4, 7, 8, 17]).unwrap()) {
        assert_eq!(solution.value(), 11, "for {}", solution);
    }
}

#[test]
fn ordered_sorts_by_ascending_complexity() {
    let solutions = ordered(simplify_all(solve(23, &[3, 4, 11, 13, 20]).unwrap()));
    assert_eq!(solutions.len(), 8);
    for pair in solutions.windows(2) {
        assert!(pair[0].complexity() <= pair[1].complexity());
    }
}

#[test]
fn pulling_one_solution_does_not_exhaust_the_solver() {
    let mut solver = solve(11, &[2, 4, 7, 8, 17]).unwrap();
    let first = solver.next().expect("puzzle is solvable");
    assert_eq!(first.value(), 11);
    // The cursor stays where it was; the rest of the space is still there.
    assert!(solver.next().is_some());
}

#[test]
fn repeated_cards_reach_the_same_solution_set_as_the_full_table() {
    // With a pair in the hand the solver runs on 60 deduplicated rows;
    // the distinct solution set must not change because of it.
    let solutions = simplify_all(solve(23, &[16, 4, 1, 1, 8]).unwrap());
    assert!(!solutions.is_empty());
    for solution in &solutions {
        assert_eq!(solution.value(), 23);
    }
}
