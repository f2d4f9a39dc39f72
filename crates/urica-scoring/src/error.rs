use thiserror::Error;

use crate::instrument::{ITEM_COUNT, RESPONSE_MAX, RESPONSE_MIN};

/// The single error kind surfaced by the score calculator.
///
/// Validation happens before any computation; no partial report is ever
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("expected exactly {} responses, got {actual}", ITEM_COUNT)]
    WrongLength { actual: usize },

    #[error(
        "item {item}: response {value} is outside range [{}, {}]",
        RESPONSE_MIN,
        RESPONSE_MAX
    )]
    OutOfRange {
        /// 1-based item number.
        item: usize,
        value: u8,
    },
}
