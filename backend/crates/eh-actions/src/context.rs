use crate::{ActionMetrics, ActionOutcome, Step, redaction};

use eh_auth::{JwtValidator, SessionContext};
use eh_client::{BackendClient, ClientResult};
use eh_config::Environment;
use eh_core::{LOGIN_ROUTE, Role};

use std::sync::Arc;

use log::{debug, info, warn};

pub const NOT_ALLOWED_MESSAGE: &str = "You are not allowed to perform this action";

/// Everything an action needs, passed in explicitly per request
#[derive(Clone)]
pub struct ActionContext {
    pub client: BackendClient,
    pub session: SessionContext,
    /// Decodes tokens handed out on login
    pub validator: Arc<JwtValidator>,
    pub environment: Environment,
}

impl ActionContext {
    pub fn new(
        client: BackendClient,
        session: SessionContext,
        validator: Arc<JwtValidator>,
        environment: Environment,
    ) -> Self {
        Self {
            client,
            session,
            validator,
            environment,
        }
    }

    /// Same resources, different session
    pub fn with_session(&self, session: SessionContext) -> Self {
        Self {
            session,
            ..self.clone()
        }
    }

    /// Access token of a signed-in visitor, else a redirect to login
    pub fn require_session(&self) -> Step<&str> {
        self.session
            .access_token()
            .filter(|_| self.session.is_authenticated())
            .ok_or_else(|| ActionOutcome::redirect(LOGIN_ROUTE))
    }

    /// Access token of a visitor holding one of `allowed`
    pub fn require_role(&self, allowed: &[Role]) -> Step<&str> {
        let token = self.require_session()?;
        match self.session.role() {
            Some(role) if allowed.contains(&role) => Ok(token),
            _ => {
                debug!(
                    "{} refused: requires one of {:?}",
                    self.session.log_label(),
                    allowed
                );
                Err(ActionOutcome::failure(NOT_ALLOWED_MESSAGE))
            }
        }
    }

    /// Turn a backend failure into an error outcome carrying `generic` in
    /// production
    pub fn backend<T>(&self, result: ClientResult<T>, generic: &str) -> Step<T> {
        result.map_err(|e| {
            warn!("{} backend call failed: {}", self.session.log_label(), e);
            ActionOutcome::failure(redaction::failure_message(self.environment, &e, generic))
        })
    }

    /// Run an action body, then count and log its outcome
    pub async fn observe<Fut>(&self, action: &'static str, step: Fut) -> ActionOutcome
    where
        Fut: Future<Output = Step<ActionOutcome>>,
    {
        let outcome = match step.await {
            Ok(outcome) | Err(outcome) => outcome,
        };

        ActionMetrics::record(action, &outcome);
        let who = self.session.log_label();
        match &outcome {
            ActionOutcome::Ok(result) => info!("{} {} succeeded: {}", who, action, result.message),
            ActionOutcome::Redirect(redirect) => {
                info!("{} {} redirecting to {}", who, action, redirect.location)
            }
            ActionOutcome::Error(result) => {
                debug!("{} {} failed: {}", who, action, result.message)
            }
        }

        outcome
    }
}

impl std::fmt::Debug for ActionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionContext")
            .field("backend", &self.client.base_url())
            .field("session", &self.session.log_label())
            .field("environment", &self.environment)
            .finish()
    }
}
