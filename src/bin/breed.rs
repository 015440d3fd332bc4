use anyhow::Context;
use clap::Parser;
use fx_breeding_ga::{
    Config, Engine,
    engine::{Deadline, Never, Report, Terminated},
    models::Program,
};
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

/// Breed a population of rats toward a target mean weight.
#[derive(Parser, Debug)]
#[command(name = "breed", long_about = None)]
struct Cli {
    /// JSON file with a base configuration; flags below override it
    #[arg(long, env = "BREED_CONFIG")]
    config: Option<PathBuf>,

    /// Target mean weight in grams
    #[arg(long, env = "BREED_TARGET_GOAL")]
    target_goal: Option<f64>,
    /// Individuals retained per generation (rounded up to even)
    #[arg(long, env = "BREED_POPULATION_SIZE")]
    population_size: Option<usize>,
    #[arg(long, env = "BREED_INITIAL_MIN")]
    initial_min: Option<i64>,
    #[arg(long, env = "BREED_INITIAL_MAX")]
    initial_max: Option<i64>,
    #[arg(long, env = "BREED_INITIAL_MODE")]
    initial_mode: Option<i64>,
    #[arg(long, env = "BREED_MUTATION_PROBABILITY")]
    mutation_probability: Option<f64>,
    #[arg(long, env = "BREED_MUTATION_MIN_SCALE")]
    mutation_min_scale: Option<f64>,
    #[arg(long, env = "BREED_MUTATION_MAX_SCALE")]
    mutation_max_scale: Option<f64>,
    /// Pups per breeding pair
    #[arg(long, env = "BREED_LITTER_SIZE")]
    litter_size: Option<usize>,
    #[arg(long, env = "BREED_LITTERS_PER_YEAR")]
    litters_per_year: Option<u32>,
    #[arg(long, env = "BREED_GENERATION_LIMIT")]
    generation_limit: Option<u32>,

    /// Seed for a reproducible run
    #[arg(long, env = "BREED_SEED")]
    seed: Option<u64>,
    /// Give up after this many seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => Config::default(),
        };

        macro_rules! apply {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = self.$field {
                    config.$field = value;
                })*
            };
        }
        apply!(
            target_goal,
            population_size,
            initial_min,
            initial_max,
            initial_mode,
            mutation_probability,
            mutation_min_scale,
            mutation_max_scale,
            litter_size,
            litters_per_year,
            generation_limit,
        );

        Ok(config)
    }

    fn level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn print_report(report: &Report) {
    println!("Average weight per generation = {:?}", report.history);
    println!("Final population fitness = {:.4}", report.fitness);
    println!("Conclusion = {:?}", report.conclusion);
    println!("\nNumber of generations = {}", report.generations);
    println!("Number of years = {:.1}", report.years);
    println!(
        "\nRuntime for this program was {} seconds",
        report.runtime.as_secs_f64()
    );
}

fn main() -> anyhow::Result<()> {
    dotenv::from_filename(".env.local").ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.level()).init();

    let program = Program::new(&cli.config()?).context("invalid breeding program")?;
    let engine = Engine::new(&program);

    let terminated: Box<dyn Terminated> = match cli.timeout_secs {
        Some(secs) => Box::new(Deadline::after(Duration::from_secs(secs))),
        None => Box::new(Never),
    };

    let report = match cli.seed {
        Some(seed) => engine.run(&mut StdRng::seed_from_u64(seed), terminated.as_ref())?,
        None => engine.run(&mut rand::rng(), terminated.as_ref())?,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}
