use crate::{NavItem, NavSection, Role};

use std::str::FromStr;

const ALL_ROLES: &[Role] = &Role::ALL;
const USER_ONLY: &[Role] = &[Role::User];
const HOST_ONLY: &[Role] = &[Role::Host];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Landing route after sign-in for each role
pub fn default_dashboard_route(role: Role) -> &'static str {
    match role {
        Role::User => "/dashboard",
        Role::Host => "/host/dashboard",
        Role::Admin => "/admin/dashboard",
    }
}

/// Same as [`default_dashboard_route`] for an untyped role name; unknown
/// names land on the home page.
pub fn default_dashboard_route_by_name(role: &str) -> &'static str {
    Role::from_str(role)
        .map(default_dashboard_route)
        .unwrap_or("/")
}

/// Ordered navigation for `role`: common sections first, then the
/// role's own sections. Items the role may not see are left out, and so
/// are sections left with no items.
pub fn nav_sections_for(role: Role) -> Vec<NavSection> {
    let mut sections = common_sections(role);
    sections.extend(match role {
        Role::User => user_sections(),
        Role::Host => host_sections(),
        Role::Admin => admin_sections(),
    });

    sections
        .into_iter()
        .filter_map(|mut section| {
            section.items.retain(|item| item.visible_to(role));
            (!section.items.is_empty()).then_some(section)
        })
        .collect()
}

/// Navigation for an untyped role name; unknown names yield no sections.
pub fn nav_sections_by_role_name(role: &str) -> Vec<NavSection> {
    Role::from_str(role)
        .map(nav_sections_for)
        .unwrap_or_default()
}

fn common_sections(role: Role) -> Vec<NavSection> {
    vec![
        NavSection {
            title: None,
            items: vec![
                NavItem {
                    title: "Dashboard",
                    href: default_dashboard_route(role),
                    icon: "LayoutDashboard",
                    roles: ALL_ROLES,
                },
                NavItem {
                    title: "My Profile",
                    href: "/my-profile",
                    icon: "User",
                    roles: ALL_ROLES,
                },
            ],
        },
        NavSection {
            title: Some("Settings"),
            items: vec![NavItem {
                title: "Change Password",
                href: "/change-password",
                icon: "Settings",
                roles: ALL_ROLES,
            }],
        },
    ]
}

fn user_sections() -> Vec<NavSection> {
    vec![NavSection {
        title: Some("Events"),
        items: vec![
            NavItem {
                title: "Explore Events",
                href: "/events",
                icon: "Compass",
                roles: USER_ONLY,
            },
            NavItem {
                title: "My Events",
                href: "/dashboard/my-events",
                icon: "CalendarCheck",
                roles: USER_ONLY,
            },
            NavItem {
                title: "Payment History",
                href: "/dashboard/payments",
                icon: "CreditCard",
                roles: USER_ONLY,
            },
            NavItem {
                title: "Become a Host",
                href: "/dashboard/become-host",
                icon: "BadgeCheck",
                roles: USER_ONLY,
            },
        ],
    }]
}

fn host_sections() -> Vec<NavSection> {
    vec![NavSection {
        title: Some("Event Management"),
        items: vec![
            NavItem {
                title: "My Events",
                href: "/host/dashboard/my-events",
                icon: "CalendarDays",
                roles: HOST_ONLY,
            },
            NavItem {
                title: "Create Event",
                href: "/host/dashboard/create-event",
                icon: "CalendarPlus",
                roles: HOST_ONLY,
            },
            NavItem {
                title: "Participants",
                href: "/host/dashboard/participants",
                icon: "Users",
                roles: HOST_ONLY,
            },
            NavItem {
                title: "Earnings",
                href: "/host/dashboard/earnings",
                icon: "Wallet",
                roles: HOST_ONLY,
            },
        ],
    }]
}

fn admin_sections() -> Vec<NavSection> {
    vec![
        NavSection {
            title: Some("User Management"),
            items: vec![
                NavItem {
                    title: "Users",
                    href: "/admin/dashboard/users-management",
                    icon: "Users",
                    roles: ADMIN_ONLY,
                },
                NavItem {
                    title: "Hosts",
                    href: "/admin/dashboard/hosts-management",
                    icon: "UserCog",
                    roles: ADMIN_ONLY,
                },
                NavItem {
                    title: "Host Applications",
                    href: "/admin/dashboard/host-applications",
                    icon: "ClipboardList",
                    roles: ADMIN_ONLY,
                },
            ],
        },
        NavSection {
            title: Some("Event Management"),
            items: vec![NavItem {
                title: "Events",
                href: "/admin/dashboard/events-management",
                icon: "CalendarRange",
                roles: ADMIN_ONLY,
            }],
        },
    ]
}
