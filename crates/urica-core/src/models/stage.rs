use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The four stages of change measured by the instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Stage {
    Precontemplation,
    Contemplation,
    Action,
    Maintenance,
}

impl Stage {
    /// All stages, in instrument order.
    pub const ALL: [Stage; 4] = [
        Stage::Precontemplation,
        Stage::Contemplation,
        Stage::Action,
        Stage::Maintenance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Precontemplation => "precontemplation",
            Stage::Contemplation => "contemplation",
            Stage::Action => "action",
            Stage::Maintenance => "maintenance",
        }
    }

    /// Capitalized name for report rendering.
    pub fn name(self) -> &'static str {
        match self {
            Stage::Precontemplation => "Precontemplation",
            Stage::Contemplation => "Contemplation",
            Stage::Action => "Action",
            Stage::Maintenance => "Maintenance",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
