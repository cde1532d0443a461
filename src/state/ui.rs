#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::cart::MutationOutcome;

/// Kind of modal alert, driving its styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Error,
}

/// A modal alert. `redirect` is followed only when the alert is dismissed,
/// so the login-required prompt is read before the browser navigates away.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    pub redirect: Option<String>,
}

/// Shared modal state; at most one alert is shown at a time.
#[derive(Clone, Debug, Default)]
pub struct AlertState {
    pub current: Option<Alert>,
}

impl AlertState {
    pub fn show(&mut self, alert: Alert) {
        self.current = Some(alert);
    }

    /// Close the alert, yielding the redirect target to follow, if any.
    pub fn dismiss(&mut self) -> Option<String> {
        self.current.take().and_then(|alert| alert.redirect)
    }
}

/// Map a cart mutation outcome onto the alert to show, if any: a server
/// failure becomes an error alert, login-required an info alert that
/// redirects to the login page on dismissal.
pub fn alert_for(outcome: &MutationOutcome) -> Option<Alert> {
    match outcome {
        MutationOutcome::Updated { .. } => None,
        MutationOutcome::Failed { message } => Some(Alert {
            kind: AlertKind::Error,
            message: message.clone(),
            redirect: None,
        }),
        MutationOutcome::LoginRequired { message } => Some(Alert {
            kind: AlertKind::Info,
            message: message.clone(),
            redirect: Some("/login".to_owned()),
        }),
    }
}
