use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A complete set of questionnaire answers, in item order: index i holds the
/// response to item i+1.
///
/// The wire shape is a plain JSON array of numbers. Construction does not
/// validate; the score calculator checks length and range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ResponseSet(Vec<u8>);

impl ResponseSet {
    pub fn new(responses: Vec<u8>) -> Self {
        Self(responses)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for ResponseSet {
    fn from(responses: Vec<u8>) -> Self {
        Self(responses)
    }
}
