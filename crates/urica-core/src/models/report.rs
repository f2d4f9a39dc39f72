use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::stage::Stage;

/// Raw score and derived mean for a single stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StageScore {
    /// Sum of the 7 item responses keyed to the stage. Range [7, 35].
    pub raw: u16,
    /// (raw + 7) / 7, the instrument's published normalization. Range [2, 6].
    pub mean: f64,
}

/// The one-shot output of the score calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreReport {
    pub precontemplation: StageScore,
    pub contemplation: StageScore,
    pub action: StageScore,
    pub maintenance: StageScore,
    /// Contemplation, action and maintenance means, minus the
    /// precontemplation mean.
    pub readiness_score: f64,
}

/// Informational reading of the readiness score. Never enforced by the
/// calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Readiness {
    Ready,
    NotReady,
}

impl Readiness {
    pub fn label(self) -> &'static str {
        match self {
            Readiness::Ready => "Ready for change",
            Readiness::NotReady => "Not ready for change",
        }
    }
}

impl ScoreReport {
    pub fn stage(&self, stage: Stage) -> &StageScore {
        match stage {
            Stage::Precontemplation => &self.precontemplation,
            Stage::Contemplation => &self.contemplation,
            Stage::Action => &self.action,
            Stage::Maintenance => &self.maintenance,
        }
    }

    /// A readiness score above zero reads as ready for change.
    pub fn readiness(&self) -> Readiness {
        if self.readiness_score > 0.0 {
            Readiness::Ready
        } else {
            Readiness::NotReady
        }
    }

    /// Format the report as structured text, one line per stage.
    pub fn to_structured_text(&self) -> String {
        let mut output = String::from("## URICA\n\n");
        for stage in Stage::ALL {
            let score = self.stage(stage);
            output.push_str(&format!(
                "- {}: raw {}, mean {:.2}\n",
                stage.name(),
                score.raw,
                score.mean,
            ));
        }
        output.push_str(&format!(
            "\nReadiness score: {:.2} ({})\n",
            self.readiness_score,
            self.readiness().label(),
        ));
        output
    }
}
