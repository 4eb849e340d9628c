//! Person - root identity record of the marketplace.

use crate::{PersonStatus, Profile, Role};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity record with exactly one role-specific profile.
///
/// The backend nests the profile under the key named after the role
/// (`user`, `host` or `admin`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub status: PersonStatus,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub need_password_change: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<Profile>,
}

impl Person {
    /// The profile belonging to this person's role, if the backend sent it
    pub fn profile(&self) -> Option<&Profile> {
        match self.role {
            Role::User => self.user.as_ref(),
            Role::Host => self.host.as_ref(),
            Role::Admin => self.admin.as_ref(),
        }
    }

    /// Display name from the profile, falling back to the email address
    pub fn display_name(&self) -> &str {
        self.profile()
            .map(|p| p.name.as_str())
            .unwrap_or(self.email.as_str())
    }

    /// Check the natural-key relation: the role's profile exists, carries the
    /// same email, and no profile of another role is attached.
    pub fn profile_matches_role(&self) -> bool {
        let others = [
            (Role::User, &self.user),
            (Role::Host, &self.host),
            (Role::Admin, &self.admin),
        ]
        .into_iter()
        .filter(|(role, profile)| *role != self.role && profile.is_some())
        .count();

        others == 0 && self.profile().is_some_and(|p| p.email == self.email)
    }

    /// Check if the person is usable (not soft-deleted, not blocked)
    pub fn is_active(&self) -> bool {
        !self.is_deleted && self.status == PersonStatus::Active
    }
}
