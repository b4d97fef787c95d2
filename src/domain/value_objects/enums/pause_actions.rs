use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PauseAction {
    Pause,
    Resume,
}

impl Display for PauseAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let action = match self {
            PauseAction::Pause => "pause",
            PauseAction::Resume => "resume",
        };
        write!(f, "{}", action)
    }
}
