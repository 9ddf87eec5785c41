//! Probability thresholding into a binary risk label

use std::fmt;

/// Probability cutoff above which the risk label is set.
///
/// The fitted model operates at 0.4, not the conventional 0.5; the lower
/// cutoff trades false alarms for fewer missed fires. Must stay exactly 0.4
/// to reproduce the trained system's behavior.
pub const DECISION_THRESHOLD: f64 = 0.4;

/// Binary wildfire risk label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLabel {
    /// Probability at or below the threshold
    Unlikely,
    /// Probability strictly above the threshold
    Likely,
}

impl RiskLabel {
    /// Numeric form of the label (0 or 1).
    pub fn as_u8(&self) -> u8 {
        match self {
            RiskLabel::Unlikely => 0,
            RiskLabel::Likely => 1,
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLabel::Unlikely => write!(f, "unlikely"),
            RiskLabel::Likely => write!(f, "likely"),
        }
    }
}

/// Apply the decision rule: `label = 1 if probability > 0.4 else 0`.
///
/// Total and stateless; a probability of exactly 0.4 maps to `Unlikely`.
pub fn classify(probability: f64) -> RiskLabel {
    if probability > DECISION_THRESHOLD {
        RiskLabel::Likely
    } else {
        RiskLabel::Unlikely
    }
}

/// Outcome of one prediction request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Class-1 (wildfire occurrence) probability in [0, 1]
    pub probability: f64,
    /// Thresholded binary label
    pub label: RiskLabel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_threshold_is_unlikely() {
        assert_eq!(classify(0.4), RiskLabel::Unlikely);
    }

    #[test]
    fn test_just_above_threshold_is_likely() {
        assert_eq!(classify(0.4 + f64::EPSILON), RiskLabel::Likely);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify(0.0), RiskLabel::Unlikely);
        assert_eq!(classify(1.0), RiskLabel::Likely);
    }

    #[test]
    fn test_threshold_is_not_half() {
        assert_eq!(DECISION_THRESHOLD, 0.4);
        assert_eq!(classify(0.45), RiskLabel::Likely);
    }

    #[test]
    fn test_label_numeric_form() {
        assert_eq!(RiskLabel::Unlikely.as_u8(), 0);
        assert_eq!(RiskLabel::Likely.as_u8(), 1);
    }
}
