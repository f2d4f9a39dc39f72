//! The score calculator: one pure function from a completed response set to
//! a structured report.

use urica_core::models::{ResponseSet, ScoreReport, Stage, StageScore};

use crate::error::InvalidInputError;
use crate::instrument::{ITEM_COUNT, ITEMS_PER_STAGE, RESPONSE_MAX, RESPONSE_MIN, stage_items};

/// Score a completed assessment.
///
/// Sums each stage's seven keyed items into a raw score, derives the stage
/// mean as (raw + 7) / 7 — the "+7" offset is the instrument's published
/// convention — and combines the means into the readiness score. Fails with
/// [`InvalidInputError`] before any computation if the set is not exactly 32
/// responses in [1, 5].
pub fn score(responses: &ResponseSet) -> Result<ScoreReport, InvalidInputError> {
    validate(responses)?;

    let answers = responses.as_slice();
    let stage_score = |stage: Stage| -> StageScore {
        let raw: u16 = stage_items(stage)
            .iter()
            .map(|&item| u16::from(answers[item as usize - 1]))
            .sum();
        StageScore {
            raw,
            mean: f64::from(raw + 7) / ITEMS_PER_STAGE as f64,
        }
    };

    let precontemplation = stage_score(Stage::Precontemplation);
    let contemplation = stage_score(Stage::Contemplation);
    let action = stage_score(Stage::Action);
    let maintenance = stage_score(Stage::Maintenance);

    let readiness_score =
        contemplation.mean + action.mean + maintenance.mean - precontemplation.mean;

    Ok(ScoreReport {
        precontemplation,
        contemplation,
        action,
        maintenance,
        readiness_score,
    })
}

fn validate(responses: &ResponseSet) -> Result<(), InvalidInputError> {
    if responses.len() != ITEM_COUNT {
        return Err(InvalidInputError::WrongLength {
            actual: responses.len(),
        });
    }
    for (idx, &value) in responses.as_slice().iter().enumerate() {
        if value < RESPONSE_MIN || value > RESPONSE_MAX {
            return Err(InvalidInputError::OutOfRange {
                item: idx + 1,
                value,
            });
        }
    }
    Ok(())
}
