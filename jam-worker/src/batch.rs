use anyhow::{anyhow, Context, Result};
use jam_algorithms::moons_umbrellas::neighbour_sweep::{self, Options};
use jam_challenges::{moons_umbrellas, reversort};
use jam_utils::{dejsonify, derive_seed, jsonify};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    io::{BufRead, Lines, Write},
    str::FromStr,
};
use tracing::{debug, info};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChallengeKind {
    MoonsUmbrellas,
    Reversort,
}

impl FromStr for ChallengeKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "c001" | "moons_umbrellas" => Ok(ChallengeKind::MoonsUmbrellas),
            "c002" | "reversort" => Ok(ChallengeKind::Reversort),
            _ => Err(anyhow!(
                "Unsupported challenge '{}'. Expected 'moons_umbrellas' or 'reversort'",
                s
            )),
        }
    }
}

impl fmt::Display for ChallengeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChallengeKind::MoonsUmbrellas => write!(f, "moons_umbrellas"),
            ChallengeKind::Reversort => write!(f, "reversort"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    pub format: OutputFormat,
    pub explore_bonus: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            explore_bonus: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CaseResult {
    pub case: usize,
    pub cost: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mural: Option<String>,
}

impl fmt::Display for CaseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Case #{}: {}", self.case, self.cost)
    }
}

/// Non-blank lines of a case file, tracking line numbers for error messages.
struct CaseLines<R> {
    lines: Lines<R>,
    line_num: usize,
}

impl<R: BufRead> CaseLines<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_num: 0,
        }
    }

    fn next_line(&mut self, what: &str) -> Result<String> {
        loop {
            let line = self
                .lines
                .next()
                .ok_or_else(|| anyhow!("Unexpected end of input while reading {}", what))??;
            self.line_num += 1;
            if !line.trim().is_empty() {
                return Ok(line);
            }
        }
    }
}

/// Reads a case count followed by that many cases from `reader`, solves each one
/// and writes one result per case to `writer`. The first failing case aborts the batch.
pub fn run_batch<R, W>(
    kind: ChallengeKind,
    reader: R,
    writer: &mut W,
    options: &BatchOptions,
) -> Result<Vec<CaseResult>>
where
    R: BufRead,
    W: Write,
{
    let mut lines = CaseLines::new(reader);
    let count_line = lines.next_line("case count")?;
    let num_tests = count_line
        .trim()
        .parse::<usize>()
        .map_err(|e| anyhow!("Invalid case count '{}': {}", count_line.trim(), e))?;
    info!("Processing {} {} cases", num_tests, kind);

    let mut results = Vec::with_capacity(num_tests);
    for case in 1..=num_tests {
        let result = solve_case(kind, case, &mut lines, options)
            .with_context(|| format!("Case #{} (line {}) failed", case, lines.line_num))?;
        write_result(writer, &result, options.format)?;
        results.push(result);
    }
    writer.flush()?;
    Ok(results)
}

fn solve_case<R: BufRead>(
    kind: ChallengeKind,
    case: usize,
    lines: &mut CaseLines<R>,
    options: &BatchOptions,
) -> Result<CaseResult> {
    let what = format!("case #{}", case);
    match kind {
        ChallengeKind::MoonsUmbrellas => {
            let challenge = lines.next_line(&what)?.parse::<moons_umbrellas::Challenge>()?;
            let solution = neighbour_sweep::resolve_with(
                &challenge.cost_model,
                &challenge.mural,
                &Options {
                    explore_bonus: options.explore_bonus,
                },
            )?;
            challenge.verify_solution(&solution)?;
            debug!("Case #{}: {} -> {}", case, challenge, solution.mural);
            Ok(CaseResult {
                case,
                cost: solution.cost,
                mural: Some(solution.mural.to_string()),
            })
        }
        ChallengeKind::Reversort => {
            let len_line = lines.next_line(&what)?;
            let list_line = lines.next_line(&what)?;
            let challenge = reversort::Challenge::parse(&len_line, &list_line)?;
            let solution = jam_algorithms::reversort::solve_challenge(&challenge)?
                .ok_or_else(|| anyhow!("No solution found"))?;
            challenge.verify_solution(&solution)?;
            Ok(CaseResult {
                case,
                cost: i64::try_from(solution.cost)?,
                mural: None,
            })
        }
    }
}

fn write_result<W: Write>(writer: &mut W, result: &CaseResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(writer, "{}", result)?,
        OutputFormat::Json => writeln!(writer, "{}", jsonify(result)?)?,
    }
    Ok(())
}

/// Parses `Case #<n>: <cost>` lines. Blank lines are skipped.
pub fn parse_answers<R: BufRead>(reader: R) -> Result<Vec<CaseResult>> {
    let mut answers = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let parsed = line
            .strip_prefix("Case #")
            .and_then(|rest| rest.split_once(':'))
            .and_then(|(case, cost)| {
                Some((
                    case.trim().parse::<usize>().ok()?,
                    cost.trim().parse::<i64>().ok()?,
                ))
            });
        match parsed {
            Some((case, cost)) => answers.push(CaseResult {
                case,
                cost,
                mural: None,
            }),
            None => {
                return Err(anyhow!(
                    "Line {}: expected 'Case #<n>: <cost>' but got '{}'",
                    line_num + 1,
                    line
                ))
            }
        }
    }
    Ok(answers)
}

/// Describes every case where `results` and `answers` disagree on the cost.
pub fn compare_answers(results: &[CaseResult], answers: &[CaseResult]) -> Vec<String> {
    let mut mismatches = Vec::new();
    if results.len() != answers.len() {
        mismatches.push(format!(
            "Expected {} answers but got {}",
            results.len(),
            answers.len()
        ));
    }
    for result in results {
        match answers.iter().find(|answer| answer.case == result.case) {
            Some(answer) if answer.cost == result.cost => {}
            Some(answer) => mismatches.push(format!(
                "Case #{}: expected {} but answer says {}",
                result.case, result.cost, answer.cost
            )),
            None => mismatches.push(format!("Case #{}: missing answer", result.case)),
        }
    }
    mismatches
}

/// Writes a case file of `num_cases` random instances. `track` is an optional
/// json object overriding the challenge's default `Track`.
pub fn generate_cases(
    kind: ChallengeKind,
    seed: &[u8; 32],
    num_cases: usize,
    track: Option<&str>,
) -> Result<String> {
    let mut output = format!("{}\n", num_cases);
    for index in 0..num_cases {
        let case_seed = derive_seed(seed, index as u64);
        let case = match kind {
            ChallengeKind::MoonsUmbrellas => {
                let track = load_track::<moons_umbrellas::Track>(track)?;
                moons_umbrellas::Challenge::generate_instance(&case_seed, &track)?.to_string()
            }
            ChallengeKind::Reversort => {
                let track = load_track::<reversort::Track>(track)?;
                reversort::Challenge::generate_instance(&case_seed, &track)?.to_string()
            }
        };
        output.push_str(&case);
        output.push('\n');
    }
    Ok(output)
}

fn load_track<T>(track: Option<&str>) -> Result<T>
where
    T: for<'de> Deserialize<'de> + Default,
{
    match track {
        Some(track) => dejsonify::<T>(track).map_err(|e| anyhow!("Failed to parse track: {}", e)),
        None => Ok(T::default()),
    }
}
