//! olas-vote: plan and check nominee vote batches offline.

use anyhow::{bail, Context};
use clap::Parser;
use olas_types::MAX_WEIGHT_BPS;
use olas_vote_flow::{init_logging, VoteConfig};
use olas_voting::{
    reconcile, Allocation, AllocationSet, CapSimulation, RoundingDrift, UserVotes, VoteOperation,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "olas-vote", about = "Olas nominee vote planner")]
struct Cli {
    /// Path to a TOML configuration file. CLI flags and env vars override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, global = true, env = "OLAS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, global = true, env = "OLAS_LOG_FORMAT")]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct PlanArgs {
    /// JSON array of `{ address, chainId, weight }` allocations.
    #[arg(long)]
    allocations: PathBuf,

    /// JSON object mapping `chain:address` to the user's prior vote.
    /// Defaults to no prior votes.
    #[arg(long)]
    votes: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Print the ordered vote operations as JSON.
    Plan(PlanArgs),
    /// Print the running total after each operation and the rounding drift.
    /// Fails if any step would exceed the per-user cap.
    Check(PlanArgs),
    /// Print the effective configuration as TOML.
    Config,
}

/// Normalized allocations together with the operations reconciled from them.
#[derive(Debug)]
struct Planned {
    allocations: AllocationSet,
    prior: UserVotes,
    operations: Vec<VoteOperation>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_logging(config.log_format()?, &config.log_level)?;

    match cli.command {
        Command::Plan(args) => {
            let planned = plan(&config, &args)?;
            println!("{}", serde_json::to_string_pretty(&planned.operations)?);
        }
        Command::Check(args) => {
            let planned = plan(&config, &args)?;
            let simulation = CapSimulation::run(&planned.prior, &planned.operations);
            let drift = RoundingDrift::measure(&planned.allocations);
            print!("{}", render_check(&simulation, &drift));
            if let Some(step) = simulation.first_breach() {
                bail!(
                    "operation {} would raise the total to {} bp, above the {} bp cap",
                    step + 1,
                    simulation.steps()[step].running_total,
                    MAX_WEIGHT_BPS
                );
            }
        }
        Command::Config => {
            print!("{}", config.to_toml_string()?);
        }
    }
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<VoteConfig> {
    let mut config = match &cli.config {
        Some(path) => VoteConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => VoteConfig::default(),
    };
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.log_format = format.clone();
    }
    Ok(config)
}

fn plan(config: &VoteConfig, args: &PlanArgs) -> anyhow::Result<Planned> {
    let allocations: Vec<Allocation> = read_json(&args.allocations)?;
    let prior: UserVotes = match &args.votes {
        Some(path) => read_json(path)?,
        None => UserVotes::empty(),
    };

    let allocations = config.retainer().allocate(AllocationSet::new(allocations)?);
    let operations = reconcile(&allocations, &prior);
    tracing::info!(
        nominees = allocations.len(),
        prior = prior.len(),
        operations = operations.len(),
        "planned vote batch"
    );

    Ok(Planned {
        allocations,
        prior,
        operations,
    })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

fn render_check(simulation: &CapSimulation, drift: &RoundingDrift) -> String {
    let mut out = format!("start: {} bp\n", simulation.start());
    for (i, step) in simulation.steps().iter().enumerate() {
        let marker = if step.running_total.get() > MAX_WEIGHT_BPS {
            "  OVER CAP"
        } else {
            ""
        };
        out.push_str(&format!(
            "{:>3}. {} -> {} bp  total {} bp{}\n",
            i + 1,
            step.operation.nominee(),
            step.operation.weight,
            step.running_total,
            marker
        ));
    }
    out.push_str(&format!(
        "requested {} allocated {} bp, lost to rounding {} bp\n",
        drift.requested, drift.allocated, drift.lost
    ));
    out
}
