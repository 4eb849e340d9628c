//! Role registry: navigation sections and default dashboard routes per role.

mod nav_item;
mod registry;

pub use nav_item::{NavItem, NavSection};
pub use registry::{
    default_dashboard_route, default_dashboard_route_by_name, nav_sections_by_role_name,
    nav_sections_for,
};
