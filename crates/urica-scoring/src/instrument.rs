//! Static definition of the URICA instrument: the 32 items, the five-point
//! response scale, and the published scoring key.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use urica_core::models::Stage;

/// Number of questionnaire items.
pub const ITEM_COUNT: usize = 32;

/// Number of scored items per stage.
pub const ITEMS_PER_STAGE: usize = 7;

/// Inclusive bounds of the Likert response scale.
pub const RESPONSE_MIN: u8 = 1;
pub const RESPONSE_MAX: u8 = 5;

/// Labels for responses 1 through 5.
pub const SCALE_LABELS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Undecided",
    "Agree",
    "Strongly Agree",
];

/// The published scoring key: for each stage, the 1-based numbers of the
/// seven items whose responses sum into that stage's raw score.
///
/// The four sets are pairwise disjoint. Items 4, 9, 20 and 31 are not
/// scored, per the instrument's 28-item scoring convention.
pub const fn stage_items(stage: Stage) -> [u8; ITEMS_PER_STAGE] {
    match stage {
        Stage::Precontemplation => [1, 5, 11, 13, 23, 26, 29],
        Stage::Contemplation => [2, 8, 12, 15, 19, 21, 24],
        Stage::Action => [3, 7, 10, 14, 17, 25, 30],
        Stage::Maintenance => [6, 16, 18, 22, 27, 28, 32],
    }
}

/// One questionnaire item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// 1-based item number, the position shown to the respondent.
    pub number: u8,
    pub text: String,
    /// The stage this item is scored under, or `None` for the four unscored
    /// items.
    pub stage: Option<Stage>,
}

/// The whole instrument as one serializable record, for administering UIs.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Definition {
    pub id: String,
    pub name: String,
    pub scale_labels: Vec<String>,
    pub items: Vec<Item>,
}

const ITEM_TEXTS: [&str; ITEM_COUNT] = [
    "As far as I'm concerned, I don't have any problems that need changing.",
    "I think I might be ready for some self-improvement.",
    "I am doing something about the problems that had been bothering me.",
    "It might be worthwhile to work on my problem.",
    "I'm not the problem one. It doesn't make much sense for me to be here.",
    "It worries me that I might slip back on a problem I have already changed, \
     so I am here to seek help.",
    "I am finally doing some work on my problem.",
    "I've been thinking that I might want to change something about myself.",
    "I have been successful in working on my problem but I'm not sure I can \
     keep up the effort on my own.",
    "At times my problem is difficult, but I'm working on it.",
    "Being here is pretty much a waste of time for me because the problem \
     doesn't have anything to do with me.",
    "I'm hoping this place will help me to better understand myself.",
    "I guess I have faults, but there's nothing that I really need to change.",
    "I am really working hard to change.",
    "I have a problem and I really think I should work on it.",
    "I'm not following through with what I had already changed as well as I \
     had hoped, and I'm here to prevent a relapse of the problem.",
    "Even though I'm not always successful in changing, I am at least working \
     on my problem.",
    "I thought once I had resolved my problem I would be free of it, but \
     sometimes I still find myself struggling with it.",
    "I wish I had more ideas on how to solve the problem.",
    "I have started working on my problems but I would like help.",
    "Maybe this place will be able to help me.",
    "I may need a boost right now to help me maintain the changes I've \
     already made.",
    "I may be part of the problem, but I don't really think I am.",
    "I hope that someone here will have some good advice for me.",
    "Anyone can talk about changing; I'm actually doing something about it.",
    "All this talk about psychology is boring. Why can't people just forget \
     about their problems?",
    "I'm here to prevent myself from having a relapse of my problem.",
    "It is frustrating, but I feel I might be having a recurrence of a \
     problem I thought I had resolved.",
    "I have worries but so does the next guy. Why spend time thinking about \
     them?",
    "I am actively working on my problem.",
    "I would rather cope with my faults than try to change them.",
    "After all I had done to try to change my problem, every now and again it \
     comes back to haunt me.",
];

/// The 32 items in instrument order.
pub fn items() -> &'static [Item] {
    static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
        ITEM_TEXTS
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                let number = (idx + 1) as u8;
                Item {
                    number,
                    text: (*text).to_string(),
                    stage: Stage::ALL
                        .into_iter()
                        .find(|stage| stage_items(*stage).contains(&number)),
                }
            })
            .collect()
    });
    &ITEMS
}

/// The full instrument definition.
pub fn definition() -> Definition {
    Definition {
        id: "urica".to_string(),
        name: "URICA".to_string(),
        scale_labels: SCALE_LABELS.iter().map(|label| label.to_string()).collect(),
        items: items().to_vec(),
    }
}
