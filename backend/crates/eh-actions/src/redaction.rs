//! Failure message policy for backend errors.

use eh_client::ClientError;
use eh_config::Environment;

const MAX_DETAIL_CHARS: usize = 200;

/// Message shown for a failed backend call: the underlying error text in
/// development, the action's generic message in production.
pub fn failure_message(environment: Environment, err: &ClientError, generic: &str) -> String {
    if environment.is_development() {
        truncate_detail(err.detail())
    } else {
        generic.to_string()
    }
}

fn truncate_detail(detail: &str) -> String {
    let detail = detail.trim();
    if detail.is_empty() {
        return "Request failed".to_string();
    }
    detail.chars().take(MAX_DETAIL_CHARS).collect()
}
