use std::path::Path;

use clap::Parser;
use serde::Serialize;
use succession::{FamilyTree, Gender, PersonId, scenario::resolve};
use tracing::instrument;

use super::{Rule, terminal::Paint};

#[derive(Debug, Parser, Default)]
#[command(about = "Print the line of succession")]
pub struct Line {
    /// Crown this royal ("First Last" or first name) before computing the
    /// line
    #[arg(long, value_name = "NAME")]
    crown: Option<String>,

    /// Record the death of this royal first (repeatable)
    #[arg(long, value_name = "NAME")]
    kill: Vec<String>,

    /// Override the succession rule recorded in the scenario
    #[arg(long, value_enum)]
    succession: Option<Rule>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,

    /// Print names only, one per line, for scripting
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// The computed line, ready for output.
#[derive(Debug, Serialize)]
struct Report {
    succession: String,
    ruler: Option<String>,
    line: Vec<Heir>,
}

#[derive(Debug, Serialize)]
struct Heir {
    position: usize,
    name: String,
    gender: Gender,
    id: PersonId,
}

impl Line {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, file: &Path) -> anyhow::Result<()> {
        let mut family = super::load_family(file, self.succession)?;
        let report = self.report(&mut family)?;

        match self.output {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Table if self.quiet => {
                for heir in &report.line {
                    println!("{}", heir.name);
                }
            }
            OutputFormat::Table => Self::output_table(&report),
        }

        Ok(())
    }

    /// Applies the requested deaths and coronation, then computes the line.
    fn report(&self, family: &mut FamilyTree) -> anyhow::Result<Report> {
        for name in &self.kill {
            let royal = resolve(family, name)?;
            family.kill(royal)?;
        }
        if let Some(name) = &self.crown {
            let royal = resolve(family, name)?;
            family.crown(royal)?;
        }

        let line = family
            .line_of_succession()?
            .into_iter()
            .enumerate()
            .map(|(index, person)| Heir {
                position: index + 1,
                name: person.to_string(),
                gender: person.gender(),
                id: person.id(),
            })
            .collect();

        Ok(Report {
            succession: family.succession().to_string(),
            ruler: family.ruler().map(|id| family.royal(id).to_string()),
            line,
        })
    }

    fn output_table(report: &Report) {
        let ruler = report.ruler.as_deref().unwrap_or("nobody");
        println!(
            "{}",
            format!(
                "Line of succession ({} primogeniture), ruler: {ruler}",
                report.succession
            )
            .heading()
        );

        if report.line.is_empty() {
            println!("{}", "Nobody is left to inherit the crown.".warning());
            return;
        }

        let width = report.line.len().to_string().len();
        for heir in &report.line {
            let entry = format!("{:>width$}. {} ({})", heir.position, heir.name, heir.gender);
            if heir.position == 1 && report.ruler.as_deref() == Some(heir.name.as_str()) {
                println!("  {}", entry.crowned());
            } else {
                println!("  {entry}");
            }
        }
    }
}
