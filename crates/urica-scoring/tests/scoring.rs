use urica_core::models::{Readiness, ResponseSet, Stage};
use urica_scoring::instrument::{ITEM_COUNT, stage_items};
use urica_scoring::{InvalidInputError, score};

fn uniform(value: u8) -> ResponseSet {
    ResponseSet::new(vec![value; ITEM_COUNT])
}

#[test]
fn all_threes_scores_the_documented_midpoint() {
    let report = score(&uniform(3)).unwrap();
    for stage in Stage::ALL {
        assert_eq!(report.stage(stage).raw, 21);
        assert_eq!(report.stage(stage).mean, 4.0);
    }
    assert_eq!(report.readiness_score, 4.0);
}

#[test]
fn all_ones_scores_the_floor() {
    let report = score(&uniform(1)).unwrap();
    for stage in Stage::ALL {
        assert_eq!(report.stage(stage).raw, 7);
        assert_eq!(report.stage(stage).mean, 2.0);
    }
    assert_eq!(report.readiness_score, 2.0);
}

#[test]
fn all_fives_scores_the_ceiling() {
    let report = score(&uniform(5)).unwrap();
    for stage in Stage::ALL {
        assert_eq!(report.stage(stage).raw, 35);
        assert_eq!(report.stage(stage).mean, 6.0);
    }
    assert_eq!(report.readiness_score, 6.0);
}

#[test]
fn hand_computed_mixed_case() {
    // Precontemplation items at 1, everything else at 5: precontemplation
    // raw 7 -> mean 2.0, the other stages raw 35 -> mean 6.0, so readiness
    // is 6 + 6 + 6 - 2 = 16.
    let mut answers = vec![5u8; ITEM_COUNT];
    for item in stage_items(Stage::Precontemplation) {
        answers[item as usize - 1] = 1;
    }

    let report = score(&ResponseSet::new(answers)).unwrap();
    assert_eq!(report.precontemplation.raw, 7);
    assert_eq!(report.precontemplation.mean, 2.0);
    assert_eq!(report.contemplation.raw, 35);
    assert_eq!(report.action.raw, 35);
    assert_eq!(report.maintenance.raw, 35);
    assert_eq!(report.readiness_score, 16.0);
}

#[test]
fn raw_scores_stay_in_range_and_sum_over_the_keyed_items() {
    // Non-uniform but valid: cycle 1..=5 across the 32 items.
    let answers: Vec<u8> = (0..ITEM_COUNT).map(|i| (i % 5) as u8 + 1).collect();
    let report = score(&ResponseSet::new(answers.clone())).unwrap();

    let mut raw_sum = 0u16;
    for stage in Stage::ALL {
        let entry = report.stage(stage);
        assert!((7..=35).contains(&entry.raw));
        assert_eq!(entry.mean, f64::from(entry.raw + 7) / 7.0);
        raw_sum += entry.raw;
    }

    let keyed_sum: u16 = Stage::ALL
        .iter()
        .flat_map(|&stage| stage_items(stage))
        .map(|item| u16::from(answers[item as usize - 1]))
        .sum();
    assert_eq!(raw_sum, keyed_sum);
}

#[test]
fn scoring_is_deterministic() {
    let answers: Vec<u8> = (0..ITEM_COUNT).map(|i| (i % 5) as u8 + 1).collect();
    let set = ResponseSet::new(answers);

    let first = score(&set).unwrap();
    let second = score(&set).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.readiness_score.to_bits(),
        second.readiness_score.to_bits()
    );
}

#[test]
fn rejects_short_and_long_vectors() {
    for len in [31, 33] {
        let err = score(&ResponseSet::new(vec![3; len])).unwrap_err();
        assert_eq!(err, InvalidInputError::WrongLength { actual: len });
        assert!(err.to_string().contains("expected exactly 32"));
    }
}

#[test]
fn rejects_out_of_range_response_naming_the_item() {
    for (position, bad) in [(0usize, 0u8), (17, 6)] {
        let mut answers = vec![3u8; ITEM_COUNT];
        answers[position] = bad;

        let err = score(&ResponseSet::new(answers)).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::OutOfRange {
                item: position + 1,
                value: bad,
            }
        );
        assert!(err.to_string().contains(&format!("item {}", position + 1)));
    }
}

#[test]
fn readiness_interpretation_uses_the_zero_cutoff() {
    // Lowest reachable readiness: precontemplation maxed, everything else
    // floored, giving 2 + 2 + 2 - 6 = 0.
    let mut answers = vec![1u8; ITEM_COUNT];
    for item in stage_items(Stage::Precontemplation) {
        answers[item as usize - 1] = 5;
    }

    let report = score(&ResponseSet::new(answers)).unwrap();
    assert_eq!(report.readiness_score, 0.0);
    assert_eq!(report.readiness(), Readiness::NotReady);

    let ready = score(&uniform(3)).unwrap();
    assert_eq!(ready.readiness(), Readiness::Ready);
}
