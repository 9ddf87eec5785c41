//! Interactive prompts using dialoguer

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input, Select};

use crate::pipeline::{FeatureRecord, FeatureRecordBuilder, FeatureSpec, FEATURES};

/// Prompt for every measurement the builder is still missing, in feature
/// order, and finalize the record. Fields already seeded from flags are
/// shown but not re-asked.
pub fn complete_record(mut builder: FeatureRecordBuilder) -> Result<FeatureRecord> {
    let values = builder.values();
    for (i, (value, spec)) in values.iter().zip(FEATURES.iter()).enumerate() {
        match value {
            Some(v) => {
                println!(
                    "    {} {} = {} {}",
                    style("·").dim(),
                    spec.label,
                    style(v).yellow(),
                    style("(from flag)").dim()
                );
            }
            None => {
                let v = prompt_feature(spec)?;
                builder.set(i, v);
            }
        }
    }
    builder.build()
}

/// Ask for a single feature value, enforcing its declared range.
fn prompt_feature(spec: &FeatureSpec) -> Result<f64> {
    println!("    {}", style(spec.help).dim());

    // The day/night flag is the one enumerated field
    if spec.name == "daynight_N" {
        let choice = Select::new()
            .with_prompt(spec.label)
            .items(&["Night (0)", "Day (1)"])
            .default(0)
            .interact()?;
        return Ok(choice as f64);
    }

    let prompt = match spec.unit {
        Some(unit) => format!("{} ({}) {}", spec.label, unit, spec.range_label()),
        None => format!("{} {}", spec.label, spec.range_label()),
    };

    let range_err = format!("Value must be within {}", spec.range_label());
    let spec = *spec;
    let value = Input::<f64>::new()
        .with_prompt(prompt)
        .default(spec.default)
        .validate_with(move |input: &f64| -> Result<(), String> {
            if spec.in_range(*input) {
                Ok(())
            } else {
                Err(range_err.clone())
            }
        })
        .interact_text()?;

    Ok(value)
}

/// Ask whether to run another prediction in this session.
pub fn confirm_another() -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt("Run another prediction?")
        .default(false)
        .interact()?;
    Ok(confirmed)
}
