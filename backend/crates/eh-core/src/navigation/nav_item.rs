use crate::Role;

use serde::Serialize;

/// A single sidebar link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
    /// Icon identifier understood by the front end (lucide names)
    pub icon: &'static str,
    /// Roles allowed to see this item
    pub roles: &'static [Role],
}

impl NavItem {
    pub fn visible_to(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Titled group of sidebar links
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
    pub items: Vec<NavItem>,
}
