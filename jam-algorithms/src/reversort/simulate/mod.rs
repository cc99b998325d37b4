//! Straight simulation of Reversort: at step `i` reverse `list[i..=j]`, where
//! `j` holds the lowest remaining value. Each reversal costs its length.
use anyhow::Result;
use jam_challenges::reversort::{Challenge, Solution};
use tracing::debug;

pub fn solve_challenge(challenge: &Challenge) -> Result<Option<Solution>> {
    debug!("Processing list: {:?}", challenge.list);
    let mut list = challenge.list.clone();
    let mut reversals = Vec::with_capacity(list.len().saturating_sub(1));
    let mut total_cost = 0u64;

    for i in 0..list.len().saturating_sub(1) {
        let j = i + lowest_position(&list[i..]);
        list[i..=j].reverse();

        let cost = (j - i + 1) as u64;
        debug!("i={} j={}: cost={} . current={:?}", i + 1, j + 1, cost, list);
        reversals.push(j);
        total_cost += cost;
    }

    Ok(Some(Solution {
        reversals,
        cost: total_cost,
    }))
}

fn lowest_position(values: &[u32]) -> usize {
    let mut lowest_ndx = 0;
    for (ndx, &value) in values.iter().enumerate() {
        if value < values[lowest_ndx] {
            lowest_ndx = ndx;
        }
    }
    lowest_ndx
}
