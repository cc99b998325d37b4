use crate::{ChallengeError, ChallengeResult};
use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{Deref, DerefMut},
    str::FromStr,
};
use tracing::trace;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    C,
    J,
    #[serde(rename = "?")]
    Unknown,
}

impl Symbol {
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            'C' => Ok(Symbol::C),
            'J' => Ok(Symbol::J),
            '?' => Ok(Symbol::Unknown),
            _ => Err(anyhow!("Invalid symbol '{}'. Expected one of 'C', 'J' or '?'", c)),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::C => 'C',
            Symbol::J => 'J',
            Symbol::Unknown => '?',
        }
    }

    pub fn is_known(self) -> bool {
        self != Symbol::Unknown
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An ordered pair of adjacent symbols.
pub type Combo = (Symbol, Symbol);

pub const CJ: Combo = (Symbol::C, Symbol::J);
pub const JC: Combo = (Symbol::J, Symbol::C);

/// Fixed-length mural. Slots can be overwritten through `DerefMut<Target = [Symbol]>`,
/// but the length is set at construction and never changes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "String", into = "String")]
pub struct Sequence(Vec<Symbol>);

impl Sequence {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }

    pub fn unknown_count(&self) -> usize {
        self.0.iter().filter(|s| !s.is_known()).count()
    }

    pub fn first_unknown(&self) -> Option<usize> {
        self.0.iter().position(|s| !s.is_known())
    }

    pub fn is_resolved(&self) -> bool {
        self.0.iter().all(|s| s.is_known())
    }

    pub fn pairs(&self) -> impl Iterator<Item = Combo> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }
}

impl Deref for Sequence {
    type Target = [Symbol];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Sequence {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.0.iter() {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let symbols = s
            .chars()
            .map(Symbol::from_char)
            .collect::<Result<Vec<_>>>()
            .map_err(|e| anyhow!("Invalid mural '{}': {}", s, e))?;
        Ok(Self(symbols))
    }
}

impl TryFrom<String> for Sequence {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Sequence> for String {
    fn from(value: Sequence) -> Self {
        value.to_string()
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct CostModel {
    pub cj_cost: i64,
    pub jc_cost: i64,
}

impl CostModel {
    pub fn new(cj_cost: i64, jc_cost: i64) -> Self {
        Self { cj_cost, jc_cost }
    }

    /// Cost charged for `combo` appearing as two adjacent slots.
    pub fn pair_cost(&self, combo: Combo) -> i64 {
        match combo {
            CJ => self.cj_cost,
            JC => self.jc_cost,
            _ => 0,
        }
    }
}

/// Total adjacency cost of a fully resolved mural.
pub fn evaluate(model: &CostModel, sequence: &Sequence) -> ChallengeResult<i64> {
    if !sequence.is_resolved() {
        return Err(ChallengeError::InvalidInput {
            sequence: sequence.to_string(),
        });
    }
    let cost: i64 = sequence.pairs().map(|combo| model.pair_cost(combo)).sum();
    trace!("Evaluated mural={} cost={}", sequence, cost);
    Ok(cost)
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Track {
    pub length: usize,
    pub unknown_percent: u32,
    pub min_cost: i64,
    pub max_cost: i64,
}

impl Default for Track {
    fn default() -> Self {
        Self {
            length: 10,
            unknown_percent: 50,
            min_cost: -100,
            max_cost: 100,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub mural: Sequence,
    pub cost: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub cost_model: CostModel,
    pub mural: Sequence,
}

impl Challenge {
    pub fn new(cost_model: CostModel, mural: Sequence) -> Self {
        Self { cost_model, mural }
    }

    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<Self> {
        if track.length == 0 {
            return Err(anyhow!("Track length must be at least 1"));
        }
        if track.unknown_percent > 100 {
            return Err(anyhow!(
                "Track unknown_percent ({}) must be at most 100",
                track.unknown_percent
            ));
        }
        if track.min_cost > track.max_cost {
            return Err(anyhow!(
                "Track min_cost ({}) is greater than max_cost ({})",
                track.min_cost,
                track.max_cost
            ));
        }

        let mut rng = SmallRng::from_seed(seed.clone());
        let cost_model = CostModel::new(
            rng.gen_range(track.min_cost..=track.max_cost),
            rng.gen_range(track.min_cost..=track.max_cost),
        );
        let symbols = (0..track.length)
            .map(|_| {
                if rng.gen_range(0..100) < track.unknown_percent {
                    Symbol::Unknown
                } else if rng.gen_bool(0.5) {
                    Symbol::C
                } else {
                    Symbol::J
                }
            })
            .collect();

        Ok(Self {
            cost_model,
            mural: Sequence::new(symbols),
        })
    }

    pub fn evaluate_cost(&self, mural: &Sequence) -> ChallengeResult<i64> {
        evaluate(&self.cost_model, mural)
    }

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            if solution.mural.len() != self.mural.len() {
                return Err(anyhow!(
                    "Invalid mural length. Expected: {}, Actual: {}",
                    self.mural.len(),
                    solution.mural.len()
                ));
            }
            if let Some(ndx) = self
                .mural
                .iter()
                .zip(solution.mural.iter())
                .position(|(given, placed)| given.is_known() && given != placed)
            {
                return Err(anyhow!(
                    "Mural slot {} was '{}' but solution changed it to '{}'",
                    ndx,
                    self.mural[ndx],
                    solution.mural[ndx]
                ));
            }
            let cost = self.evaluate_cost(&solution.mural)?;
            if cost != solution.cost {
                return Err(anyhow!(
                    "Reported cost ({}) does not match evaluated cost ({})",
                    solution.cost,
                    cost
                ));
            }
            Ok(())
        }
    );
}

impl FromStr for Challenge {
    type Err = anyhow::Error;

    /// Parses a `"<cj_cost> <jc_cost> <mural>"` case line.
    fn from_str(line: &str) -> Result<Self> {
        let parts = line.split_whitespace().collect::<Vec<&str>>();
        if parts.len() != 3 {
            return Err(anyhow!(
                "Expected '<cj_cost> <jc_cost> <mural>' but got '{}'",
                line.trim()
            ));
        }
        let cj_cost = parts[0]
            .parse::<i64>()
            .map_err(|e| anyhow!("Invalid cj_cost '{}': {}", parts[0], e))?;
        let jc_cost = parts[1]
            .parse::<i64>()
            .map_err(|e| anyhow!("Invalid jc_cost '{}': {}", parts[1], e))?;
        Ok(Self {
            cost_model: CostModel::new(cj_cost, jc_cost),
            mural: parts[2].parse()?,
        })
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.cost_model.cj_cost, self.cost_model.jc_cost, self.mural
        )
    }
}
