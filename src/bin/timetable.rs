use anyhow::{Context, Result};
use clap::{arg, value_parser, Command};
use log::{LevelFilter, Log, Metadata, Record};
use std::{fs, path::PathBuf, process::ExitCode};
use u_timetable::catalog::{sample, CatalogSpec};
use u_timetable::ga::GaConfig;
use u_timetable::scheduler::{GeneticScheduler, Solution};

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn cli() -> Command {
    Command::new("timetable")
        .about("Generates a weekly class timetable with a genetic algorithm")
        .arg(
            arg!(--catalog [PATH] "Catalog JSON file (courses, teachers, rooms, days, time_slots)")
                .value_parser(value_parser!(PathBuf))
                .conflicts_with("sample"),
        )
        .arg(
            arg!(--sample [NAME] "Built-in catalog used when no file is given")
                .value_parser(["small", "curriculum"]),
        )
        .arg(
            arg!(--population [N] "Individuals per generation [default: 100]")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            arg!(--generations [N] "Generation budget [default: 1000]")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            arg!(--"mutation-rate" [RATE] "Probability that a child is mutated [default: 0.05]")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            arg!(--"elitism-rate" [RATE] "Fraction of best individuals kept each generation [default: 0.1]")
                .value_parser(value_parser!(f64)),
        )
        .arg(arg!(--seed [SEED] "Random seed").value_parser(value_parser!(u64)))
        .arg(
            arg!(--"time-limit-ms" [MS] "Wall-clock limit in milliseconds")
                .value_parser(value_parser!(u64)),
        )
        .arg(arg!(--"best-effort" "Print the best timetable when no optimum is found"))
        .arg(arg!(-v --verbose "Log GA progress to stderr"))
}

fn load_spec(matches: &clap::ArgMatches) -> Result<CatalogSpec> {
    if let Some(path) = matches.get_one::<PathBuf>("catalog") {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let spec = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse catalog {}", path.display()))?;
        return Ok(spec);
    }
    Ok(match matches.get_one::<String>("sample").map(String::as_str) {
        Some("curriculum") => sample::curriculum(),
        _ => sample::small(),
    })
}

fn init_logging(verbose: bool) -> Result<()> {
    log::set_logger(&LOGGER).context("failed to install logger")?;
    log::set_max_level(if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    });
    Ok(())
}

fn main() -> Result<ExitCode> {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"))?;

    let spec = load_spec(&matches)?;

    let mut config = GaConfig::default();
    if let Some(&n) = matches.get_one::<usize>("population") {
        config = config.with_population_size(n);
    }
    if let Some(&n) = matches.get_one::<usize>("generations") {
        config = config.with_num_generations(n);
    }
    if let Some(&rate) = matches.get_one::<f64>("mutation-rate") {
        config = config.with_mutation_rate(rate);
    }
    if let Some(&rate) = matches.get_one::<f64>("elitism-rate") {
        config = config.with_elitism_rate(rate);
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config = config.with_seed(seed);
    }
    if let Some(&ms) = matches.get_one::<u64>("time-limit-ms") {
        config = config.with_time_limit_ms(ms);
    }

    let scheduler = GeneticScheduler::from_spec(spec, config)?;

    match scheduler.solve() {
        Solution::Optimal {
            schedule,
            generation,
        } => {
            println!("Optimal timetable found at generation {generation}.\n");
            print!("{}", scheduler.grid(&schedule));
            Ok(ExitCode::SUCCESS)
        }
        Solution::NotFound {
            best,
            best_fitness,
            generations,
            termination,
        } => {
            println!(
                "No optimal timetable after {generations} generations ({termination:?}); best fitness {best_fitness}."
            );
            if matches.get_flag("best-effort") {
                println!("\nBest timetable found, {}:\n", scheduler.breakdown(&best));
                print!("{}", scheduler.grid(&best));
            } else {
                println!("Adjust the catalog or GA parameters, or rerun with --best-effort.");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
