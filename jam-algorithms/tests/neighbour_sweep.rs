use jam_algorithms::moons_umbrellas::neighbour_sweep::*;
use jam_challenges::moons_umbrellas::{
    evaluate, Challenge, CostModel, Sequence, Symbol, CJ, JC,
};

fn mural(s: &str) -> Sequence {
    s.parse().unwrap()
}

fn minimize_str(cj_cost: i64, jc_cost: i64, s: &str) -> i64 {
    minimize(&CostModel::new(cj_cost, jc_cost), &mural(s)).unwrap()
}

#[test]
fn test_cost_roles() {
    let roles = CostRoles::new(&CostModel::new(4, 2));
    assert_eq!(roles.expensive_combo, CJ);
    assert_eq!(roles.expensive_cost, 4);
    assert_eq!(roles.cheaper_combo, JC);
    assert_eq!(roles.cheaper_cost, 2);
    assert!(!roles.has_bonus());

    let roles = CostRoles::new(&CostModel::new(-3, 1));
    assert_eq!(roles.expensive_combo, JC);
    assert_eq!(roles.cheaper_combo, CJ);
    assert_eq!(roles.cheaper_cost, -3);
    assert!(roles.has_bonus());

    // ties rank C->J as the expensive direction
    let roles = CostRoles::new(&CostModel::new(3, 3));
    assert_eq!(roles.expensive_combo, CJ);
    assert_eq!(roles.cheaper_combo, JC);
}

#[test]
fn test_candidate_cost() {
    use Symbol::*;
    let roles = CostRoles::new(&CostModel::new(2, -5));
    assert_eq!(roles.candidate_cost(Some(J), C, None), Some(-5));
    assert_eq!(roles.candidate_cost(None, J, Some(C)), Some(-5));
    assert_eq!(roles.candidate_cost(Some(C), C, Some(J)), Some(0));
    assert_eq!(roles.candidate_cost(Some(C), J, None), Some(2));
    assert_eq!(roles.candidate_cost(Some(J), J, Some(C)), Some(-5));
    assert_eq!(roles.candidate_cost(None, C, None), None);
    assert_eq!(roles.candidate_cost(Some(Unknown), C, Some(Unknown)), None);

    let roles = CostRoles::new(&CostModel::new(4, 2));
    assert_eq!(roles.candidate_cost(Some(J), C, None), Some(2));
    assert_eq!(roles.candidate_cost(Some(C), J, Some(C)), Some(4));
    assert_eq!(roles.candidate_cost(Some(J), C, Some(C)), Some(0));
}

#[test]
fn test_pick_symbol() {
    assert_eq!(pick_symbol(Some(0), Some(0)), Symbol::C);
    assert_eq!(pick_symbol(Some(5), Some(5)), Symbol::C);

    assert_eq!(pick_symbol(Some(0), Some(2)), Symbol::C);
    assert_eq!(pick_symbol(Some(2), Some(0)), Symbol::J);
    assert_eq!(pick_symbol(Some(2), Some(3)), Symbol::C);
    assert_eq!(pick_symbol(Some(3), Some(2)), Symbol::J);

    assert_eq!(pick_symbol(Some(-3), Some(0)), Symbol::C);
    assert_eq!(pick_symbol(Some(1), Some(-3)), Symbol::J);
    assert_eq!(pick_symbol(Some(-1), Some(-3)), Symbol::J);

    assert_eq!(pick_symbol(None, Some(2)), Symbol::Unknown);
    assert_eq!(pick_symbol(Some(2), None), Symbol::Unknown);
    assert_eq!(pick_symbol(None, None), Symbol::Unknown);
}

#[test]
fn test_infer_pass_sees_updated_left_neighbour() {
    let roles = CostRoles::new(&CostModel::new(2, 5));
    let mut seq = mural("J??");
    assert_eq!(infer_pass(&roles, &mut seq), 2);
    assert_eq!(seq, mural("JJJ"));
}

#[test]
fn test_infer_pass_lags_on_right_neighbour() {
    let roles = CostRoles::new(&CostModel::new(2, 5));
    let mut seq = mural("??J");
    assert_eq!(infer_pass(&roles, &mut seq), 1);
    assert_eq!(seq, mural("?JJ"));
    assert_eq!(infer_pass(&roles, &mut seq), 1);
    assert_eq!(seq, mural("JJJ"));
}

#[test]
fn test_infer_pass_without_constraints() {
    let roles = CostRoles::new(&CostModel::new(2, 5));
    let mut seq = mural("????");
    assert_eq!(infer_pass(&roles, &mut seq), 0);
    assert_eq!(seq, mural("????"));
}

#[test]
fn test_resolve_in_place_stall_defaults_to_c() {
    let roles = CostRoles::new(&CostModel::new(2, 5));
    let mut seq = mural("???");
    assert_eq!(resolve_in_place(&roles, &mut seq), 2);
    assert_eq!(seq, mural("CCC"));

    let mut single = mural("?");
    assert_eq!(resolve_in_place(&roles, &mut single), 1);
    assert_eq!(single, mural("C"));

    let mut empty = mural("");
    assert_eq!(resolve_in_place(&roles, &mut empty), 0);

    let mut resolved = mural("CJ");
    assert_eq!(resolve_in_place(&roles, &mut resolved), 0);
    assert_eq!(resolved, mural("CJ"));
}

#[test]
fn test_resolve_keeps_known_slots() {
    let roles = CostRoles::new(&CostModel::new(-2, 7));
    let original = mural("?C??J?C?");
    let mut seq = original.clone();
    resolve_in_place(&roles, &mut seq);
    assert!(seq.is_resolved());
    for (given, placed) in original.iter().zip(seq.iter()) {
        if given.is_known() {
            assert_eq!(given, placed);
        }
    }
}

#[test]
fn test_bonus_alternative() {
    let roles = CostRoles::new(&CostModel::new(2, -5));
    assert_eq!(
        bonus_alternative(&roles, &mural("??JJ??")),
        Some(mural("JCJJ??"))
    );
    assert_eq!(bonus_alternative(&roles, &mural("C?JJ??")), None);
    assert_eq!(bonus_alternative(&roles, &mural("?CJJ??")), None);
    assert_eq!(bonus_alternative(&roles, &mural("?")), None);

    let roles = CostRoles::new(&CostModel::new(-1, 3));
    assert_eq!(bonus_alternative(&roles, &mural("??")), Some(mural("CJ")));

    let roles = CostRoles::new(&CostModel::new(2, 5));
    assert_eq!(bonus_alternative(&roles, &mural("??JJ??")), None);
}

#[test]
fn test_minimize() {
    assert_eq!(minimize_str(2, 3, "CJ?CC?"), 5);
    assert_eq!(minimize_str(4, 2, "CJCJ"), 10);
    assert_eq!(minimize_str(1, 3, "C?J"), 1);
    assert_eq!(minimize_str(2, 5, "??J???"), 0);
    assert_eq!(minimize_str(2, 5, "??????"), 0);
}

#[test]
fn test_minimize_negative() {
    assert_eq!(minimize_str(2, -5, "??JJ??"), -8);
    assert_eq!(minimize_str(100, -5, "??JJ??"), -5);
    assert_eq!(minimize_str(2, -5, "???CJ???"), -11);
}

#[test]
fn test_minimize_edges() {
    assert_eq!(minimize_str(2, 3, ""), 0);
    assert_eq!(minimize_str(2, 3, "?"), 0);
    assert_eq!(minimize_str(-2, -3, "??"), -3);
}

#[test]
fn test_resolve_with_bonus_toggle() {
    let model = CostModel::new(2, -5);
    let seq = mural("??JJ??");

    let with_bonus = resolve_with(&model, &seq, &Options::default()).unwrap();
    assert_eq!(with_bonus.cost, -8);
    assert_eq!(with_bonus.mural, mural("JCJJCC"));

    let without_bonus = resolve_with(
        &model,
        &seq,
        &Options {
            explore_bonus: false,
        },
    )
    .unwrap();
    assert_eq!(without_bonus.cost, -5);
    assert_eq!(without_bonus.mural, mural("JJJJCC"));
}

#[test]
fn test_resolved_input_is_evaluated_as_is() {
    let model = CostModel::new(4, -2);
    for s in ["CJCJ", "JJJ", "C", "JCCJ"] {
        let seq = mural(s);
        assert_eq!(minimize(&model, &seq), evaluate(&model, &seq));
    }
}

#[test]
fn test_deterministic() {
    let model = CostModel::new(3, -4);
    let seq = mural("??C?J??J?");
    let first = resolve_with(&model, &seq, &Options::default()).unwrap();
    for _ in 0..5 {
        assert_eq!(resolve_with(&model, &seq, &Options::default()).unwrap(), first);
    }
}

#[test]
fn test_solve_challenge() {
    let challenge: Challenge = "2 -5 ???CJ???".parse().unwrap();
    let solution = solve_challenge(&challenge).unwrap().unwrap();
    assert_eq!(solution.cost, -11);
    assert!(challenge.verify_solution(&solution).is_ok());
}
