use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Track {
    pub length: usize,
}

impl Default for Track {
    fn default() -> Self {
        Self { length: 7 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Position `j` picked at each step `i`; `list[i..=j]` gets reversed.
    pub reversals: Vec<usize>,
    pub cost: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub list: Vec<u32>,
}

impl Challenge {
    pub fn new(list: Vec<u32>) -> Result<Self> {
        let mut sorted = list.clone();
        sorted.sort_unstable();
        if sorted
            .iter()
            .enumerate()
            .any(|(i, &value)| value as usize != i + 1)
        {
            return Err(anyhow!(
                "List {:?} must be a permutation of 1..={}",
                list,
                list.len()
            ));
        }
        Ok(Self { list })
    }

    /// Parses a case made of a `"<len>"` line followed by the space separated list.
    pub fn parse(len_line: &str, list_line: &str) -> Result<Self> {
        let list_len = len_line
            .trim()
            .parse::<usize>()
            .map_err(|e| anyhow!("Invalid list length '{}': {}", len_line.trim(), e))?;
        let list = list_line
            .split_whitespace()
            .map(|value| {
                value
                    .parse::<u32>()
                    .map_err(|e| anyhow!("Invalid list value '{}': {}", value, e))
            })
            .collect::<Result<Vec<u32>>>()?;
        if list.len() != list_len {
            return Err(anyhow!(
                "Declared list length ({}) does not match actual length ({})",
                list_len,
                list.len()
            ));
        }
        Self::new(list)
    }

    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<Self> {
        if track.length == 0 {
            return Err(anyhow!("Track length must be at least 1"));
        }
        let mut rng = SmallRng::from_seed(seed.clone());
        let mut list = (1..=track.length as u32).collect::<Vec<u32>>();
        list.shuffle(&mut rng);
        Ok(Self { list })
    }

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            let expected_steps = self.list.len().saturating_sub(1);
            if solution.reversals.len() != expected_steps {
                return Err(anyhow!(
                    "Invalid number of reversals. Expected: {}, Actual: {}",
                    expected_steps,
                    solution.reversals.len()
                ));
            }
            let mut list = self.list.clone();
            let mut cost = 0u64;
            for (i, &j) in solution.reversals.iter().enumerate() {
                if j < i || j >= list.len() {
                    return Err(anyhow!("Reversal {} ends out of bounds at {}", i, j));
                }
                let lowest = list[i..].iter().min().copied();
                if lowest != Some(list[j]) {
                    return Err(anyhow!(
                        "Reversal {} must end at the lowest remaining value ({:?}) but ends at {}",
                        i,
                        lowest,
                        list[j]
                    ));
                }
                list[i..=j].reverse();
                cost += (j - i + 1) as u64;
            }
            if list.windows(2).any(|w| w[0] > w[1]) {
                return Err(anyhow!("List {:?} is not sorted after reversals", list));
            }
            if cost != solution.cost {
                return Err(anyhow!(
                    "Reported cost ({}) does not match cost of reversals ({})",
                    solution.cost,
                    cost
                ));
            }
            Ok(())
        }
    );
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self
            .list
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{}\n{}", self.list.len(), values)
    }
}
