use super::*;

#[test]
fn every_route_path_parses_back_to_itself() {
    for route in Route::ALL {
        assert_eq!(Route::from_path(route.path()), Some(route), "{route:?}");
    }
}

#[test]
fn role_dashboards_have_distinct_paths() {
    assert_eq!(Route::Dashboard(Role::Doctor).path(), "/dashboard");
    assert_eq!(Route::Dashboard(Role::Caregiver).path(), "/caregiver-dashboard");
    assert_eq!(Route::Dashboard(Role::Patient).path(), "/patient-dashboard");
}

#[test]
fn root_and_unknown_paths_do_not_match() {
    assert_eq!(Route::from_path("/"), None);
    assert_eq!(Route::from_path(""), None);
    assert_eq!(Route::from_path("/admin"), None);
    assert_eq!(Route::from_path("/user-dashboard"), None);
    assert_eq!(Route::from_path("/patients/42"), None);
}

#[test]
fn trailing_slash_query_and_fragment_are_ignored() {
    assert_eq!(Route::from_path("/patients/"), Some(Route::Patients));
    assert_eq!(Route::from_path("/settings?tab=theme"), Some(Route::Settings));
    assert_eq!(Route::from_path("/login#form"), Some(Route::Login));
}

#[test]
fn matching_is_case_sensitive() {
    assert_eq!(Route::from_path("/Dashboard"), None);
}

#[test]
fn only_login_and_signup_are_public() {
    let public: Vec<Route> = Route::ALL.into_iter().filter(|r| r.is_public()).collect();
    assert_eq!(public, vec![Route::Login, Route::Signup]);
}
