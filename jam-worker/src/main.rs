use anyhow::{anyhow, Result};
use clap::{arg, ArgMatches, Command};
use jam_utils::seed_from_str;
use jam_worker::{
    compare_answers, generate_cases, init_logging, load_settings, parse_answers, run_batch,
    BatchOptions, ChallengeKind, OutputFormat, WorkerSettings,
};
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
};
use tracing::info;

fn cli() -> Command {
    Command::new("jam-worker")
        .about("Solves, generates or verifies case files")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("solve")
                .about("Solves every case in a case file")
                .arg(
                    arg!(<CHALLENGE> "Challenge name ('moons_umbrellas' or 'reversort') or id")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<INPUT> "Path to a case file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--settings [SETTINGS] "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--log [FILTER] "Log filter directive, overrides settings")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(--json "Print one json object per case"))
                .arg(arg!(--debug "Enable debug logs for the jam crates")),
        )
        .subcommand(
            Command::new("generate")
                .about("Prints a case file of seeded random instances")
                .arg(
                    arg!(<CHALLENGE> "Challenge name ('moons_umbrellas' or 'reversort') or id")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SEED> "A string used in seed generation")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--cases [CASES] "Number of cases to generate")
                        .default_value("10")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--track [TRACK] "Track json overriding the challenge defaults")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("verify")
                .about("Checks an answers file against the solver's output")
                .arg(
                    arg!(<CHALLENGE> "Challenge name ('moons_umbrellas' or 'reversort') or id")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<INPUT> "Path to a case file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<ANSWERS> "Path to a file of 'Case #<n>: <cost>' lines")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--settings [SETTINGS] "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(--debug "Enable debug logs for the jam crates")),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("solve", sub_m)) => solve(sub_m),
        Some(("generate", sub_m)) => generate(sub_m),
        Some(("verify", sub_m)) => verify(sub_m),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn solve(sub_m: &ArgMatches) -> Result<()> {
    let kind = challenge_kind(sub_m)?;
    let settings = settings(sub_m)?;
    let log = sub_m
        .get_one::<String>("log")
        .cloned()
        .unwrap_or_else(|| settings.log.clone());
    init_logging(&log, sub_m.get_flag("debug"))?;

    let options = BatchOptions {
        format: match sub_m.get_flag("json") || settings.json {
            true => OutputFormat::Json,
            false => OutputFormat::Text,
        },
        explore_bonus: settings.explore_bonus,
    };
    let input = open_input(required(sub_m, "INPUT")?)?;
    let stdout = io::stdout();
    let results = run_batch(kind, input, &mut stdout.lock(), &options)?;
    info!("Solved {} cases", results.len());
    Ok(())
}

fn generate(sub_m: &ArgMatches) -> Result<()> {
    let kind = challenge_kind(sub_m)?;
    let seed = seed_from_str(required(sub_m, "SEED")?);
    let num_cases = sub_m.get_one::<usize>("cases").copied().unwrap_or(10);
    let track = sub_m.get_one::<String>("track").map(String::as_str);
    print!("{}", generate_cases(kind, &seed, num_cases, track)?);
    Ok(())
}

fn verify(sub_m: &ArgMatches) -> Result<()> {
    let kind = challenge_kind(sub_m)?;
    let settings = settings(sub_m)?;
    init_logging(&settings.log, sub_m.get_flag("debug"))?;

    let options = BatchOptions {
        format: OutputFormat::Text,
        explore_bonus: settings.explore_bonus,
    };
    let input = open_input(required(sub_m, "INPUT")?)?;
    let results = run_batch(kind, input, &mut io::sink(), &options)?;
    let answers = parse_answers(open_input(required(sub_m, "ANSWERS")?)?)?;

    let mismatches = compare_answers(&results, &answers);
    if mismatches.is_empty() {
        println!("All {} answers are correct", results.len());
        Ok(())
    } else {
        for mismatch in mismatches.iter() {
            eprintln!("{}", mismatch);
        }
        Err(anyhow!("{} answers are incorrect", mismatches.len()))
    }
}

fn required<'a>(sub_m: &'a ArgMatches, name: &str) -> Result<&'a str> {
    sub_m
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("Missing argument {}", name))
}

fn challenge_kind(sub_m: &ArgMatches) -> Result<ChallengeKind> {
    required(sub_m, "CHALLENGE")?.parse()
}

fn settings(sub_m: &ArgMatches) -> Result<WorkerSettings> {
    match sub_m.get_one::<String>("settings") {
        Some(settings) => load_settings(settings),
        None => Ok(WorkerSettings::default()),
    }
}

fn open_input(path: &str) -> Result<Box<dyn BufRead>> {
    if path == "-" {
        Ok(Box::new(BufReader::new(io::stdin())))
    } else {
        let file = File::open(path).map_err(|e| anyhow!("Failed to open '{}': {}", path, e))?;
        Ok(Box::new(BufReader::new(file)))
    }
}
