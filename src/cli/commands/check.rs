//! Implementation of the `heft check` command.

use anyhow::{anyhow, Result};
use clap::Args;
use std::path::PathBuf;

use crate::cli::output::{output, CommandOutput};
use crate::infrastructure::design_file::load_record;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Breakdown record file (YAML, or JSON when the extension is .json)
    pub record: PathBuf,

    /// Absolute tolerance for every roll-up sum
    #[arg(long, default_value_t = 1e-6)]
    pub tolerance: f64,
}

#[derive(Debug, serde::Serialize)]
pub struct CheckOutput {
    pub path: PathBuf,
    pub tolerance: f64,
    pub zero_fuel_weight: f64,
    pub max_takeoff: f64,
    pub physically_valid: bool,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "{}: all roll-ups hold within {:e}",
            self.path.display(),
            self.tolerance
        )];
        if !self.physically_valid {
            lines.push(format!(
                "Warning: max_takeoff {} is below zero_fuel_weight {}",
                self.max_takeoff, self.zero_fuel_weight
            ));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: CheckArgs, json_mode: bool) -> Result<()> {
    let record = load_record(&args.record)?;
    record
        .check_rollup(args.tolerance)
        .map_err(|violation| anyhow!("Roll-up check failed: {violation}"))?;

    output(
        &CheckOutput {
            path: args.record,
            tolerance: args.tolerance,
            zero_fuel_weight: record.zero_fuel_weight,
            max_takeoff: record.max_takeoff,
            physically_valid: record.is_physically_valid(),
        },
        json_mode,
    );
    Ok(())
}
