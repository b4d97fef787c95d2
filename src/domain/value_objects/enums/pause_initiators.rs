use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The party that triggered a pause or resume. Fixed by the invoking code
/// path (buyer manage-token routes vs. seller authenticated routes), never
/// parsed from request input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PauseInitiator {
    Buyer,
    Seller,
}

impl Display for PauseInitiator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let initiator = match self {
            PauseInitiator::Buyer => "buyer",
            PauseInitiator::Seller => "seller",
        };
        write!(f, "{}", initiator)
    }
}
