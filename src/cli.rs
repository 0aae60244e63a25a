use std::path::{Path, PathBuf};

mod init;
mod line;
mod show;
mod terminal;

use anyhow::Context;
use clap::ArgAction;
use init::Init;
use line::Line;
use show::Show;
use succession::{FamilyTree, Scenario, Succession};

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the family scenario file
    #[arg(short, long, default_value = "family.toml", global = true)]
    file: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::Line(Line::default()))
            .run(&self.file)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Write an example family scenario
    Init(Init),

    /// Print the family tree
    Show(Show),

    /// Print the line of succession (default)
    ///
    /// Extra deaths and a coronation can be applied on top of the events
    /// recorded in the scenario file.
    Line(Line),
}

impl Command {
    fn run(self, file: &Path) -> anyhow::Result<()> {
        match self {
            Self::Init(command) => command.run(file)?,
            Self::Show(command) => command.run(file)?,
            Self::Line(command) => command.run(file)?,
        }
        Ok(())
    }
}

/// Succession rule as accepted on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Rule {
    /// Birth order only
    #[default]
    Absolute,
    /// The founding royal's gender first, then birth order
    GenderPreference,
}

impl From<Rule> for Succession {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::Absolute => Self::Absolute,
            Rule::GenderPreference => Self::GenderPreference,
        }
    }
}

/// Loads the scenario at `file`, optionally overriding its succession rule.
fn load_scenario(file: &Path, rule: Option<Rule>) -> anyhow::Result<Scenario> {
    let mut scenario = Scenario::load(file).with_context(|| {
        format!(
            "Could not load a family from {} (run 'succession init' to create one)",
            file.display()
        )
    })?;

    if let Some(rule) = rule {
        scenario.config.set_succession(rule.into());
    }

    Ok(scenario)
}

/// Loads and builds the family described at `file`.
fn load_family(file: &Path, rule: Option<Rule>) -> anyhow::Result<FamilyTree> {
    let scenario = load_scenario(file, rule)?;
    let family = scenario.build()?;
    tracing::info!(
        "Loaded {} royals from {}",
        family.traverse().count(),
        file.display()
    );
    Ok(family)
}
