use std::path::Path;

use clap::Parser;
use succession::{FamilyTree, NodeId};
use tracing::instrument;

use super::{
    Rule,
    terminal::{Paint, supports_color},
};

#[derive(Debug, Parser)]
#[command(about = "Print the family tree, one royal per line")]
pub struct Show {
    /// Override the succession rule recorded in the scenario
    #[arg(long, value_enum)]
    succession: Option<Rule>,
}

impl Show {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, file: &Path) -> anyhow::Result<()> {
        let family = super::load_family(file, self.succession)?;

        println!(
            "{}",
            format!("Royal family ({} primogeniture)", family.succession()).heading()
        );
        print!("{}", render(&family, supports_color()));

        Ok(())
    }
}

/// Renders the family outline, marking the ruler and the dead.
///
/// Without colour support the plain display forms are kept, with a textual
/// marker appended to the ruler and to dead royals.
fn render(family: &FamilyTree, color: bool) -> String {
    family
        .traverse()
        .map(|id| {
            let indent = "    ".repeat(family.depth(id));
            format!("{indent}{}\n", label(family, id, color))
        })
        .collect()
}

fn label(family: &FamilyTree, id: NodeId, color: bool) -> String {
    let text = family.display_node(id).to_string();
    let crowned = family.ruler() == Some(id);
    let dead = !family.royal(id).is_alive();

    match (crowned, dead, color) {
        (true, _, true) => text.crowned(),
        (_, true, true) => text.deceased(),
        (true, _, false) => format!("{text} [ruler]"),
        (_, true, false) => format!("{text} [dead]"),
        _ => text,
    }
}
