use eh_auth::SessionTokens;
use eh_core::{ActionResult, FormData};

/// What happens to the session cookies alongside a redirect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    Keep,
    Set(SessionTokens),
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub location: String,
    pub session: SessionUpdate,
}

impl Redirect {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            session: SessionUpdate::Keep,
        }
    }

    pub fn with_session(location: impl Into<String>, session: SessionUpdate) -> Self {
        Self {
            location: location.into(),
            session,
        }
    }
}

/// Result of one action invocation.
///
/// Navigation is a value here, never an early exit the caller has to catch.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Ok(ActionResult),
    Redirect(Redirect),
    Error(ActionResult),
}

/// Intermediate step of an action; `Err` short-circuits with a finished outcome
pub type Step<T> = Result<T, ActionOutcome>;

impl ActionOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Ok(ActionResult::success(message))
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Error(ActionResult::failure(message))
    }

    pub fn redirect(location: impl Into<String>) -> Self {
        Self::Redirect(Redirect::to(location))
    }

    /// Metric label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok(_) => "ok",
            Self::Redirect(_) => "redirect",
            Self::Error(result) if result.errors.is_some() => "invalid",
            Self::Error(_) => "error",
        }
    }

    pub fn result(&self) -> Option<&ActionResult> {
        match self {
            Self::Ok(result) | Self::Error(result) => Some(result),
            Self::Redirect(_) => None,
        }
    }

    pub fn redirect_target(&self) -> Option<&Redirect> {
        match self {
            Self::Redirect(redirect) => Some(redirect),
            _ => None,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Echoed form values of a rejected submission
    pub fn form_data(&self) -> Option<&FormData> {
        self.result().and_then(|r| r.form_data.as_ref())
    }
}
