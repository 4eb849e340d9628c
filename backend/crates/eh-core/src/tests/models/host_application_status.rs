use crate::HostApplicationStatus;

use std::str::FromStr;

#[test]
fn test_admin_decisions() {
    assert!(HostApplicationStatus::Approved.is_admin_decision());
    assert!(HostApplicationStatus::Rejected.is_admin_decision());
    assert!(!HostApplicationStatus::Cancelled.is_admin_decision());
    assert!(!HostApplicationStatus::Pending.is_admin_decision());
}

#[test]
fn test_from_str_rejects_unknown() {
    assert!(HostApplicationStatus::from_str("WITHDRAWN").is_err());
    assert_eq!(
        HostApplicationStatus::from_str("REJECTED").unwrap(),
        HostApplicationStatus::Rejected
    );
}
