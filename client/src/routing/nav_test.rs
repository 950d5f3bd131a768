use super::*;
use crate::routing::policy::{RouteDecision, decide};
use crate::state::session::Session;

fn paths(role: Role) -> Vec<&'static str> {
    nav_items_for(role).iter().map(NavItem::path).collect()
}

#[test]
fn doctor_sees_the_full_menu_in_order() {
    assert_eq!(
        paths(Role::Doctor),
        vec![
            "/dashboard",
            "/patients",
            "/appointments",
            "/medical-records",
            "/prescriptions-medication",
            "/progress-report",
            "/notifications",
            "/settings",
        ]
    );
}

#[test]
fn caregiver_sees_care_subset() {
    assert_eq!(
        paths(Role::Caregiver),
        vec![
            "/caregiver-dashboard",
            "/patients",
            "/progress-report",
            "/prescriptions-medication",
            "/notifications",
            "/settings",
        ]
    );
}

#[test]
fn patient_sees_own_appointments_notifications_settings() {
    assert_eq!(
        paths(Role::Patient),
        vec!["/patient-dashboard", "/patient-appointments", "/notifications", "/settings"]
    );
}

#[test]
fn guest_menu_is_empty() {
    assert!(nav_items_for(Role::Guest).is_empty());
    assert!(nav_items_for(Role::parse(Some("janitor"))).is_empty());
}

#[test]
fn menu_is_stable_across_calls() {
    for role in [Role::Doctor, Role::Caregiver, Role::Patient, Role::Guest] {
        assert_eq!(nav_items_for(role), nav_items_for(role));
    }
}

#[test]
fn every_menu_entry_renders_for_its_role() {
    for role in Role::SIGNED_IN {
        let session = Session { token: Some("tok".to_owned()), role, user_id: Some("u".to_owned()) };
        for item in nav_items_for(role) {
            assert_eq!(
                decide(&session, item.path()),
                RouteDecision::Render(item.route),
                "{role} -> {}",
                item.path()
            );
        }
    }
}

#[test]
fn icons_have_glyphs() {
    for item in nav_items_for(Role::Doctor) {
        assert!(!item.icon.glyph().is_empty());
    }
}
