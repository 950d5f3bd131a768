use super::*;
use crate::state::session::MemoryStore;
use crate::state::session::SessionStore;

fn signed_in(role: Role) -> Session {
    Session { token: Some("tok".to_owned()), role, user_id: Some("u1".to_owned()) }
}

const PROTECTED: [&str; 12] = [
    "/dashboard",
    "/caregiver-dashboard",
    "/patient-dashboard",
    "/patients",
    "/appointments",
    "/patient-appointments",
    "/medical-records",
    "/prescriptions-medication",
    "/progress-report",
    "/settings",
    "/profile",
    "/notifications",
];

const SHARED: [Route; 9] = [
    Route::Patients,
    Route::Appointments,
    Route::PatientAppointments,
    Route::MedicalRecords,
    Route::PrescriptionsMedication,
    Route::ProgressReport,
    Route::Settings,
    Route::Profile,
    Route::Notifications,
];

// =============================================================
// Role homes
// =============================================================

#[test]
fn role_home_maps_each_role() {
    assert_eq!(role_home(Role::Doctor), "/dashboard");
    assert_eq!(role_home(Role::Caregiver), "/caregiver-dashboard");
    assert_eq!(role_home(Role::Patient), "/patient-dashboard");
    assert_eq!(role_home(Role::Guest), "/login");
}

// =============================================================
// Dashboards are role-exact
// =============================================================

#[test]
fn own_dashboard_renders_other_dashboards_redirect_to_login() {
    for role in Role::SIGNED_IN {
        let session = signed_in(role);
        for other in Role::SIGNED_IN {
            let route = Route::Dashboard(other);
            let expected = if other == role {
                RouteDecision::Render(route)
            } else {
                RouteDecision::RedirectTo("/login")
            };
            assert_eq!(decide(&session, route.path()), expected, "{role} requesting {}", route.path());
        }
    }
}

#[test]
fn patient_requesting_doctor_dashboard_goes_to_login() {
    assert_eq!(decide(&signed_in(Role::Patient), "/dashboard"), RouteDecision::RedirectTo("/login"));
}

#[test]
fn authenticated_guest_cannot_reach_any_dashboard() {
    let session = signed_in(Role::Guest);
    for role in Role::SIGNED_IN {
        assert_eq!(
            decide(&session, Route::Dashboard(role).path()),
            RouteDecision::RedirectTo("/login")
        );
    }
}

// =============================================================
// Shared resources
// =============================================================

#[test]
fn shared_paths_render_for_every_authenticated_role() {
    for role in [Role::Doctor, Role::Caregiver, Role::Patient, Role::Guest] {
        let session = signed_in(role);
        for route in SHARED {
            assert_eq!(decide(&session, route.path()), RouteDecision::Render(route));
        }
    }
}

#[test]
fn access_table_classifies_every_route() {
    assert_eq!(access_for(Route::Login), Access::Public);
    assert_eq!(access_for(Route::Signup), Access::Public);
    assert_eq!(access_for(Route::Dashboard(Role::Caregiver)), Access::RoleExact(Role::Caregiver));
    for route in SHARED {
        assert_eq!(access_for(route), Access::Authenticated);
    }
}

// =============================================================
// Unauthenticated callers
// =============================================================

#[test]
fn unauthenticated_protected_paths_redirect_to_login() {
    let session = Session::default();
    for path in PROTECTED {
        assert_eq!(decide(&session, path), RouteDecision::RedirectTo("/login"), "{path}");
    }
}

#[test]
fn role_without_token_is_still_unauthenticated() {
    let session = Session { token: None, role: Role::Doctor, user_id: Some("u1".to_owned()) };
    assert_eq!(decide(&session, "/dashboard"), RouteDecision::RedirectTo("/login"));
    assert_eq!(decide(&session, "/"), RouteDecision::RedirectTo("/login"));
}

#[test]
fn login_and_signup_render_without_a_session_repeatedly() {
    let session = Session::default();
    for _ in 0..3 {
        assert_eq!(decide(&session, "/login"), RouteDecision::Render(Route::Login));
        assert_eq!(decide(&session, "/signup"), RouteDecision::Render(Route::Signup));
    }
}

#[test]
fn login_and_signup_render_for_authenticated_callers_too() {
    let session = signed_in(Role::Doctor);
    assert_eq!(decide(&session, "/login"), RouteDecision::Render(Route::Login));
    assert_eq!(decide(&session, "/signup"), RouteDecision::Render(Route::Signup));
}

// =============================================================
// Root and unmatched paths
// =============================================================

#[test]
fn root_redirects_to_role_home() {
    for role in [Role::Doctor, Role::Caregiver, Role::Patient, Role::Guest] {
        assert_eq!(decide(&signed_in(role), "/"), RouteDecision::RedirectTo(role_home(role)));
    }
    assert_eq!(decide(&Session::default(), "/"), RouteDecision::RedirectTo("/login"));
}

#[test]
fn unmatched_paths_redirect_to_role_home() {
    assert_eq!(decide(&signed_in(Role::Caregiver), "/nope"), RouteDecision::RedirectTo("/caregiver-dashboard"));
    assert_eq!(decide(&signed_in(Role::Patient), "/user-dashboard"), RouteDecision::RedirectTo("/patient-dashboard"));
    assert_eq!(decide(&Session::default(), "/nope"), RouteDecision::RedirectTo("/login"));
}

#[test]
fn redirect_targets_never_loop() {
    for role in [Role::Doctor, Role::Caregiver, Role::Patient, Role::Guest] {
        for session in [signed_in(role), Session { token: None, role, user_id: None }] {
            for path in PROTECTED.iter().copied().chain(["/", "/unknown"]) {
                if let RouteDecision::RedirectTo(target) = decide(&session, path) {
                    assert!(
                        matches!(decide(&session, target), RouteDecision::Render(_)),
                        "{role} {path} -> {target} does not settle"
                    );
                }
            }
        }
    }
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn empty_store_requesting_dashboard_goes_to_login() {
    let store = MemoryStore::new();
    let session = store.read();
    assert_eq!(session.token, None);
    assert_eq!(session.role, Role::Guest);
    assert!(!is_authenticated(&session));
    assert_eq!(decide(&session, "/dashboard"), RouteDecision::RedirectTo("/login"));
}

#[test]
fn caregiver_login_reaches_own_dashboard_only() {
    let store = MemoryStore::new();
    store.write("tok1", Role::Caregiver, "u1");
    let session = store.read();
    assert_eq!(
        decide(&session, "/caregiver-dashboard"),
        RouteDecision::Render(Route::Dashboard(Role::Caregiver))
    );
    assert_eq!(decide(&session, "/dashboard"), RouteDecision::RedirectTo("/login"));
}

#[test]
fn clear_after_login_locks_everything_again() {
    let store = MemoryStore::new();
    store.write("tok1", Role::Doctor, "u1");
    assert_eq!(decide(&store.read(), "/patients"), RouteDecision::Render(Route::Patients));
    store.clear();
    let session = store.read();
    assert!(!is_authenticated(&session));
    for path in PROTECTED {
        assert_eq!(decide(&session, path), RouteDecision::RedirectTo("/login"));
    }
}
