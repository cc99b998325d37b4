//! Neighbour sweep for Moons & Umbrellas
//!
//! # Description
//! Unknown slots are filled from their neighbours, one left to right sweep at a
//! time. A slot resolved during a sweep is visible to its right neighbour in the
//! same sweep, while right neighbours are only seen as they stood before the
//! sweep, so runs of unknowns shrink by repeated passes. When a pass resolves
//! nothing (the whole mural is unknown) the first unknown slot defaults to `C`.
//!
//! Two leading unknowns next to a negative directional cost get a second
//! attempt that starts the mural with the paying combo, and the cheaper of the
//! two resolutions wins.
use anyhow::Result;
use jam_challenges::moons_umbrellas::{
    evaluate, Challenge, Combo, CostModel, Sequence, Solution, Symbol, CJ, JC,
};
use jam_challenges::ChallengeResult;
use tracing::{debug, trace};

/// Directional costs ranked for one resolution. Ties rank `C→J` as expensive.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CostRoles {
    pub expensive_combo: Combo,
    pub expensive_cost: i64,
    pub cheaper_combo: Combo,
    pub cheaper_cost: i64,
}

impl CostRoles {
    pub fn new(model: &CostModel) -> Self {
        if model.cj_cost >= model.jc_cost {
            Self {
                expensive_combo: CJ,
                expensive_cost: model.cj_cost,
                cheaper_combo: JC,
                cheaper_cost: model.jc_cost,
            }
        } else {
            Self {
                expensive_combo: JC,
                expensive_cost: model.jc_cost,
                cheaper_combo: CJ,
                cheaper_cost: model.cj_cost,
            }
        }
    }

    pub fn has_bonus(&self) -> bool {
        self.cheaper_cost < 0
    }

    /// Cost of placing `symbol` between `prev` and `next`, or `None` when neither
    /// neighbour constrains the slot yet.
    pub fn candidate_cost(
        &self,
        prev: Option<Symbol>,
        symbol: Symbol,
        next: Option<Symbol>,
    ) -> Option<i64> {
        let pairs = [prev.map(|p| (p, symbol)), next.map(|n| (symbol, n))];
        let forms = |combo: Combo| pairs.contains(&Some(combo));

        if self.has_bonus() && forms(self.cheaper_combo) {
            Some(self.cheaper_cost)
        } else if forms((symbol, symbol)) {
            Some(0)
        } else if forms(self.expensive_combo) {
            Some(self.expensive_cost)
        } else if forms(self.cheaper_combo) {
            Some(self.cheaper_cost)
        } else {
            None
        }
    }
}

pub fn pick_symbol(c_cost: Option<i64>, j_cost: Option<i64>) -> Symbol {
    match (c_cost, j_cost) {
        (Some(c), Some(j)) if c <= j => Symbol::C,
        (Some(_), Some(_)) => Symbol::J,
        _ => Symbol::Unknown,
    }
}

/// One left to right sweep over `mural`. Returns how many slots were resolved.
pub fn infer_pass(roles: &CostRoles, mural: &mut Sequence) -> usize {
    let mut changed = 0;
    for ndx in 0..mural.len() {
        if mural[ndx].is_known() {
            continue;
        }
        // right neighbours have not been visited yet, so they still hold their pre-sweep value
        let prev = ndx.checked_sub(1).map(|p| mural[p]);
        let next = mural.get(ndx + 1).copied();

        let c_cost = roles.candidate_cost(prev, Symbol::C, next);
        let j_cost = roles.candidate_cost(prev, Symbol::J, next);
        let symbol = pick_symbol(c_cost, j_cost);
        trace!(
            "ndx={} prev={:?} next={:?} C->{:?} J->{:?} picked={}",
            ndx,
            prev,
            next,
            c_cost,
            j_cost,
            symbol
        );

        if symbol.is_known() {
            mural[ndx] = symbol;
            changed += 1;
        }
    }
    changed
}

/// Runs sweeps until `mural` has no unknown slots left. Returns the number of passes.
pub fn resolve_in_place(roles: &CostRoles, mural: &mut Sequence) -> usize {
    let mut pass_num = 0;
    loop {
        let unknowns_start = mural.unknown_count();
        if unknowns_start == 0 {
            return pass_num;
        }
        pass_num += 1;
        infer_pass(roles, mural);

        let unknowns_end = mural.unknown_count();
        debug!(
            "After pass={}, mural={} start?={} end?={}",
            pass_num, mural, unknowns_start, unknowns_end
        );
        if unknowns_start == unknowns_end {
            if let Some(ndx) = mural.first_unknown() {
                debug!("Pass {} stalled, defaulting ndx={} to 'C'", pass_num, ndx);
                mural[ndx] = Symbol::C;
            }
        }
    }
}

/// Copy of `mural` opening with the cheaper combo, when that combo pays a bonus
/// and the first two slots are free to take it.
pub fn bonus_alternative(roles: &CostRoles, mural: &Sequence) -> Option<Sequence> {
    if !roles.has_bonus() || mural.len() < 2 || mural[0].is_known() || mural[1].is_known() {
        return None;
    }
    let mut alternative = mural.clone();
    alternative[0] = roles.cheaper_combo.0;
    alternative[1] = roles.cheaper_combo.1;
    Some(alternative)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Options {
    pub explore_bonus: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            explore_bonus: true,
        }
    }
}

pub fn resolve_with(
    model: &CostModel,
    mural: &Sequence,
    options: &Options,
) -> ChallengeResult<Solution> {
    debug!(
        "Minimizing cost for: cj_cost={} jc_cost={} mural={}",
        model.cj_cost, model.jc_cost, mural
    );
    let roles = CostRoles::new(model);
    let alternative = match options.explore_bonus {
        true => bonus_alternative(&roles, mural),
        false => None,
    };

    let mut resolved = mural.clone();
    let passes = resolve_in_place(&roles, &mut resolved);
    let cost = evaluate(model, &resolved)?;
    debug!(
        "Minimized mural: {} with cost={} after {} passes",
        resolved, cost, passes
    );
    let solution = Solution {
        mural: resolved,
        cost,
    };

    match alternative {
        Some(alternative) => {
            debug!("Detected bonus opportunity, trying mural={}", alternative);
            // leading slots are known now, so this cannot recurse again
            let bonus_solution = resolve_with(model, &alternative, options)?;
            debug!(
                "orig_cost={} ; bonus_cost={}",
                solution.cost, bonus_solution.cost
            );
            Ok(match bonus_solution.cost < solution.cost {
                true => bonus_solution,
                false => solution,
            })
        }
        None => Ok(solution),
    }
}

/// Minimum total cost reachable from `mural` under `model`.
pub fn minimize(model: &CostModel, mural: &Sequence) -> ChallengeResult<i64> {
    resolve_with(model, mural, &Options::default()).map(|solution| solution.cost)
}

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    let solution = resolve_with(&challenge.cost_model, &challenge.mural, &Options::default())?;
    Ok(Some(solution))
}
