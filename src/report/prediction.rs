//! Prediction result panel

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::{style, Emoji};

use crate::pipeline::{Prediction, RiskLabel, DECISION_THRESHOLD};

static CLEAR: Emoji<'_, '_> = Emoji("🌤️  ", "");
static FLAME: Emoji<'_, '_> = Emoji("🔥 ", "!! ");

/// Terminal rendering of one prediction outcome.
#[derive(Debug, Clone, Copy)]
pub struct PredictionReport {
    prediction: Prediction,
}

impl PredictionReport {
    pub fn new(prediction: Prediction) -> Self {
        Self { prediction }
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("PREDICTION RESULTS").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        let probability_cell =
            Cell::new(format!("{:.2}%", self.prediction.probability * 100.0))
                .add_attribute(Attribute::Bold)
                .fg(match self.prediction.label {
                    RiskLabel::Unlikely => Color::Green,
                    RiskLabel::Likely => Color::Red,
                });

        table.add_row(vec![
            Cell::new("Probability of wildfire occurrence"),
            probability_cell,
        ]);
        table.add_row(vec![
            Cell::new("Decision threshold"),
            Cell::new(format!("{:.0}%", DECISION_THRESHOLD * 100.0)),
        ]);
        table.add_row(vec![
            Cell::new("Risk label"),
            Cell::new(self.prediction.label.as_u8()),
        ]);

        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        println!();
        match self.prediction.label {
            RiskLabel::Unlikely => {
                println!(
                    "    {}{}",
                    CLEAR,
                    style("It is unlikely that a wildfire will occur.")
                        .green()
                        .bold()
                );
            }
            RiskLabel::Likely => {
                println!(
                    "    {}{}",
                    FLAME,
                    style("A wildfire is likely to occur.").red().bold()
                );
                println!(
                    "    {} Move to safety immediately, call emergency services,",
                    style("Guidance:").red().bold()
                );
                println!("    and do {} attempt to fight the fire.", style("not").bold());
            }
        }
        println!();
    }
}
