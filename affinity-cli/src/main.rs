//! Affinity CLI
//!
//! Command-line front end for the mining pipeline: dataset discovery,
//! Apriori mining with threshold fallback, rule ranking, result files,
//! and the run report.

use std::path::Path;

use clap::{ArgAction, Parser, Subcommand};

use affinity_core::config::{AffinityConfig, CliOverrides};
use affinity_core::errors::{AffinityErrorCode, PipelineError};
use affinity_core::tracing::init_tracing;
use affinity_io::dataset::load_transactions;
use affinity_io::report::create_reporter;
use affinity_io::writers::write_outputs;
use affinity_mining::{MiningParams, MiningPipeline};

#[derive(Parser)]
#[command(name = "affinity")]
#[command(about = "Affinity - frequent itemset and association rule mining", long_about = None)]
struct Cli {
    /// Project config file (default: affinity.toml in the working directory)
    #[arg(short, long)]
    config: Option<String>,

    /// Verbose mode (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Machine-readable JSON output
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the mining pipeline end to end
    Run {
        /// Directory searched for transaction files
        #[arg(long)]
        data_dir: Option<String>,

        /// Directory for result files
        #[arg(long)]
        output_dir: Option<String>,

        /// Primary minimum support threshold
        #[arg(long)]
        min_support: Option<f64>,

        /// Fallback minimum support threshold
        #[arg(long)]
        fallback_support: Option<f64>,

        /// Largest itemset size to mine
        #[arg(long)]
        max_size: Option<usize>,

        /// Minimum lift for kept rules
        #[arg(long)]
        min_lift: Option<f64>,

        /// Generate rules of every size, not just item pairs
        #[arg(long)]
        all_rules: bool,

        /// Number of rules in the top-rules export
        #[arg(long)]
        top_rules: Option<usize>,
    },

    /// Resolve the configuration, validate it, and print the result
    ValidateConfig,
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose > 0 {
        let level = if cli.verbose == 1 { "debug" } else { "trace" };
        std::env::set_var("AFFINITY_LOG", level);
    }
    init_tracing();

    if let Err(error) = execute(cli) {
        eprintln!("{}", error.format_with_code());
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<(), PipelineError> {
    match cli.command {
        Commands::Run {
            data_dir,
            output_dir,
            min_support,
            fallback_support,
            max_size,
            min_lift,
            all_rules,
            top_rules,
        } => {
            let overrides = CliOverrides {
                config_file: cli.config,
                data_dir,
                output_dir,
                primary_min_support: min_support,
                fallback_min_support: fallback_support,
                max_itemset_size: max_size,
                min_lift,
                only_pairs: if all_rules { Some(false) } else { None },
                top_rules,
            };
            run_pipeline(&overrides, cli.json)
        }
        Commands::ValidateConfig => {
            let overrides = CliOverrides {
                config_file: cli.config,
                ..Default::default()
            };
            validate_config(&overrides, cli.json)
        }
    }
}

fn run_pipeline(overrides: &CliOverrides, json: bool) -> Result<(), PipelineError> {
    let config = AffinityConfig::load(Path::new("."), Some(overrides))?;

    let params = MiningParams::from_config(&config.mining);
    let dataset = load_transactions(&config.data)?;
    let run_date = chrono::Local::now().format("%Y-%m-%d").to_string();

    let outcome = MiningPipeline::new(params).run(&dataset.transactions, &run_date)?;

    let output_dir = Path::new(config.output.effective_output_dir());
    let paths = write_outputs(&outcome, output_dir, config.output.effective_top_rules())?;

    let format = if json { "json" } else { "console" };
    if let Some(reporter) = create_reporter(format) {
        match reporter.generate(&outcome) {
            Ok(text) => println!("{text}"),
            Err(message) => tracing::warn!(%message, "report generation failed"),
        }
    }
    if !json {
        for path in &paths {
            println!("  wrote {}", path.display());
        }
    }
    Ok(())
}

fn validate_config(overrides: &CliOverrides, json: bool) -> Result<(), PipelineError> {
    let config = AffinityConfig::load(Path::new("."), Some(overrides))?;
    MiningParams::from_config(&config.mining).validate()?;

    if json {
        match serde_json::to_string_pretty(&config) {
            Ok(text) => println!("{text}"),
            Err(error) => tracing::error!(%error, "config serialization failed"),
        }
    } else {
        println!("✓ configuration valid");
        print!("{}", config.to_toml()?);
    }
    Ok(())
}
