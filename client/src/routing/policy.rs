//! Role-based access policy evaluated on every navigation.
//!
//! DESIGN
//! ======
//! All access rules live in [`access_for`]; [`decide`] is the only place
//! that interprets them. Ambiguous or missing identity never grants access:
//! every failure degrades to the login page or the caller's home.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use crate::routing::route::{LOGIN_PATH, Route};
use crate::state::auth::{is_authenticated, role_of};
use crate::state::session::{Role, Session};

/// Who may render a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Anyone, signed in or not.
    Public,
    /// Any caller holding a token, whatever the role.
    Authenticated,
    /// Only a signed-in caller with exactly this role.
    RoleExact(Role),
}

/// Outcome of one navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Route),
    RedirectTo(&'static str),
}

/// The access table.
pub fn access_for(route: Route) -> Access {
    match route {
        Route::Login | Route::Signup => Access::Public,
        Route::Dashboard(role) => Access::RoleExact(role),
        Route::Patients
        | Route::Appointments
        | Route::PatientAppointments
        | Route::MedicalRecords
        | Route::PrescriptionsMedication
        | Route::ProgressReport
        | Route::Settings
        | Route::Profile
        | Route::Notifications => Access::Authenticated,
    }
}

/// Landing path for a role; guests land on the login page.
pub fn role_home(role: Role) -> &'static str {
    match role {
        Role::Guest => LOGIN_PATH,
        role => Route::Dashboard(role).path(),
    }
}

/// Decide what to do with a request for `path`.
pub fn decide(session: &Session, path: &str) -> RouteDecision {
    let authenticated = is_authenticated(session);
    let role = role_of(session);

    let Some(route) = Route::from_path(path) else {
        return RouteDecision::RedirectTo(if authenticated { role_home(role) } else { LOGIN_PATH });
    };

    match access_for(route) {
        Access::Public => RouteDecision::Render(route),
        _ if !authenticated => RouteDecision::RedirectTo(LOGIN_PATH),
        Access::Authenticated => RouteDecision::Render(route),
        Access::RoleExact(required) if required == role && role != Role::Guest => {
            RouteDecision::Render(route)
        }
        Access::RoleExact(_) => RouteDecision::RedirectTo(LOGIN_PATH),
    }
}
