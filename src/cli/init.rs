use std::path::Path;

use succession::{Scenario, scenario};
use tracing::instrument;

use super::Rule;

#[derive(Debug, clap::Parser)]
pub struct Init {
    /// Succession rule of the new family
    #[arg(long, value_enum, default_value_t = Rule::Absolute)]
    succession: Rule,
}

impl Init {
    #[instrument]
    pub fn run(self, file: &Path) -> anyhow::Result<()> {
        if file.exists() {
            anyhow::bail!(
                "Family already exists (found existing {})",
                file.display()
            );
        }

        let mut scenario: Scenario = scenario::EXAMPLE.parse()?;
        scenario.config.set_succession(self.succession.into());
        scenario
            .save(file)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", file.display()))?;

        println!("Created an example family in {}", file.display());
        println!("  Succession: {}", scenario.config.succession());
        println!();
        println!("Next steps:");
        println!("  succession show");
        println!("  succession line --crown Artemis");

        Ok(())
    }
}
