use anyhow::{bail, Context};
use bpv::scenarios::{self, Scenario, Suite};
use bpv::{Config, Executor, MockWebapp, ResetPolicy};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bpv", about = "brainpro validation — end-to-end scenarios against a mock webapp")]
struct Cli {
    /// Config file layered over the built-in defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write debug logs to /tmp/bpv-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the scenario catalogue.
    List,
    /// Run scenarios and print a report. Exits 1 if any scenario failed.
    Run {
        /// Only run this suite (documentation|review, or 13|16).
        #[arg(long)]
        suite: Option<Suite>,
        /// Only run these scenarios (`name` or `suite/name`). Repeatable.
        #[arg(long = "scenario")]
        scenarios: Vec<String>,
        /// Override the fixture reset policy (fresh|reset|keep).
        #[arg(long)]
        reset: Option<ResetPolicy>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Manage the mock webapp directly.
    Fixture {
        #[command(subcommand)]
        action: FixtureAction,
    },
}

#[derive(Subcommand)]
enum FixtureAction {
    /// Write a pristine copy, replacing any existing one.
    Materialize,
    /// Discard changes since the initial commit.
    Reset,
    /// Delete the scratch directory.
    Teardown,
    /// Show the path and any uncommitted changes.
    Status,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn init_logging(debug: bool) -> anyhow::Result<()> {
    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/bpv-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("bpv debug log started — tail -f /tmp/bpv-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }
    Ok(())
}

fn select(suite: Option<Suite>, names: &[String]) -> anyhow::Result<Vec<&'static Scenario>> {
    let mut selected: Vec<&'static Scenario> = scenarios::catalogue()
        .into_iter()
        .filter(|s| suite.map_or(true, |wanted| s.suite == wanted))
        .collect();

    if !names.is_empty() {
        for name in names {
            if scenarios::find(name).is_none() {
                bail!("unknown scenario: {name} (see `bpv list`)");
            }
        }
        selected.retain(|s| names.iter().any(|n| n == s.name || *n == s.id()));
    }
    if selected.is_empty() {
        bail!("no scenarios selected");
    }
    Ok(selected)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug)?;
    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;

    match cli.command {
        Command::List => {
            for s in scenarios::catalogue() {
                let kind = if s.mutates_fixture() { "edits" } else { "reads" };
                println!("[{:>2}] {:<32} {:<5}  {}", s.suite.number(), s.id(), kind, s.description);
            }
        }
        Command::Run {
            suite,
            scenarios: names,
            reset,
            format,
        } => {
            let selected = select(suite, &names)?;
            let mut executor = Executor::new(config);
            if let Some(policy) = reset {
                executor = executor.with_policy(policy);
            }
            let report = executor.run_all(&selected).await;
            match format {
                Format::Text => print!("{}", report.to_text()),
                Format::Json => println!("{}", report.to_json()?),
            }
            if report.has_failures() {
                std::process::exit(1);
            }
        }
        Command::Fixture { action } => {
            let dir = &config.fixture.scratch_dir;
            match action {
                FixtureAction::Materialize => {
                    let webapp = MockWebapp::materialize(dir)?;
                    println!("materialized {}", webapp.path().display());
                }
                FixtureAction::Reset => {
                    MockWebapp::prepare(dir, ResetPolicy::Reset)?;
                    println!("reset {}", dir.display());
                }
                FixtureAction::Teardown => {
                    MockWebapp::open(dir)?.teardown()?;
                    println!("removed {}", dir.display());
                }
                FixtureAction::Status => {
                    let webapp = MockWebapp::open(dir)?;
                    let changed = webapp.changed_paths()?;
                    println!("{}", webapp.path().display());
                    if changed.is_empty() {
                        println!("clean");
                    }
                    for path in changed {
                        println!("  modified: {path}");
                    }
                }
            }
        }
    }
    Ok(())
}
