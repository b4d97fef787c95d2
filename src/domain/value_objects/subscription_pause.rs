use chrono::{DateTime, Utc};

use crate::domain::value_objects::{
    enums::{pause_actions::PauseAction, pause_initiators::PauseInitiator},
    notification_emails::{self, NotificationCommand},
};

/// The pause-related slice of a subscription row. `paused_at` is non-null
/// exactly when the membership is paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseState {
    pub paused_at: Option<DateTime<Utc>>,
    pub user_requested_pause_at: Option<DateTime<Utc>>,
}

/// Result of a successful transition: the state to persist and the emails to
/// enqueue. Produced without any I/O.
#[derive(Debug, Clone, PartialEq)]
pub struct PauseTransition {
    pub state: PauseState,
    pub notifications: Vec<NotificationCommand>,
}

impl PauseState {
    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Applies a pause or resume. Returns `None` when the subscription is
    /// already in the requested state, so a repeated click neither rewrites
    /// the timestamps nor emails anyone twice.
    ///
    /// `user_requested_pause_at` is written only by a buyer-initiated pause
    /// and survives resumes as a marker of the most recent buyer request.
    pub fn apply(
        &self,
        action: PauseAction,
        initiator: PauseInitiator,
        seller_notifications_enabled: bool,
        now: DateTime<Utc>,
    ) -> Option<PauseTransition> {
        let state = match action {
            PauseAction::Pause => {
                if self.is_paused() {
                    return None;
                }
                PauseState {
                    paused_at: Some(now),
                    user_requested_pause_at: match initiator {
                        PauseInitiator::Buyer => Some(now),
                        PauseInitiator::Seller => self.user_requested_pause_at,
                    },
                }
            }
            PauseAction::Resume => {
                if !self.is_paused() {
                    return None;
                }
                PauseState {
                    paused_at: None,
                    user_requested_pause_at: self.user_requested_pause_at,
                }
            }
        };

        Some(PauseTransition {
            state,
            notifications: notification_emails::commands_for(
                action,
                initiator,
                seller_notifications_enabled,
            ),
        })
    }
}
