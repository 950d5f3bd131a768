//! Known application paths.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::state::session::Role;

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";

/// Every page the router can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Signup,
    /// Role home. `Dashboard(Role::Guest)` has no path and is never produced
    /// by [`Route::from_path`].
    Dashboard(Role),
    Patients,
    Appointments,
    PatientAppointments,
    MedicalRecords,
    PrescriptionsMedication,
    ProgressReport,
    Settings,
    Profile,
    Notifications,
}

impl Route {
    /// All routes with a concrete path, in menu-ish order.
    pub const ALL: [Route; 14] = [
        Route::Login,
        Route::Signup,
        Route::Dashboard(Role::Doctor),
        Route::Dashboard(Role::Caregiver),
        Route::Dashboard(Role::Patient),
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

    /// Match a requested location against the known paths.
    ///
    /// Query strings, fragments and one trailing slash are ignored. The root
    /// path and anything unknown yield `None`.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = if path.len() > 1 { path.strip_suffix('/').unwrap_or(path) } else { path };
        let route = match path {
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            "/dashboard" => Route::Dashboard(Role::Doctor),
            "/caregiver-dashboard" => Route::Dashboard(Role::Caregiver),
            "/patient-dashboard" => Route::Dashboard(Role::Patient),
            "/patients" => Route::Patients,
            "/appointments" => Route::Appointments,
            "/patient-appointments" => Route::PatientAppointments,
            "/medical-records" => Route::MedicalRecords,
            "/prescriptions-medication" => Route::PrescriptionsMedication,
            "/progress-report" => Route::ProgressReport,
            "/settings" => Route::Settings,
            "/profile" => Route::Profile,
            "/notifications" => Route::Notifications,
            _ => return None,
        };
        Some(route)
    }

    /// Canonical path for this route.
    pub fn path(self) -> &'static str {
        match self {
            Route::Login | Route::Dashboard(Role::Guest) => LOGIN_PATH,
            Route::Signup => SIGNUP_PATH,
            Route::Dashboard(Role::Doctor) => "/dashboard",
            Route::Dashboard(Role::Caregiver) => "/caregiver-dashboard",
            Route::Dashboard(Role::Patient) => "/patient-dashboard",
            Route::Patients => "/patients",
            Route::Appointments => "/appointments",
            Route::PatientAppointments => "/patient-appointments",
            Route::MedicalRecords => "/medical-records",
            Route::PrescriptionsMedication => "/prescriptions-medication",
            Route::ProgressReport => "/progress-report",
            Route::Settings => "/settings",
            Route::Profile => "/profile",
            Route::Notifications => "/notifications",
        }
    }

    /// Page title shown in the top bar and document title.
    pub fn title(self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Signup => "Sign Up",
            Route::Dashboard(Role::Doctor) => "Doctor Dashboard",
            Route::Dashboard(Role::Caregiver) => "Caregiver Dashboard",
            Route::Dashboard(Role::Patient) => "My Dashboard",
            Route::Dashboard(Role::Guest) => "Dashboard",
            Route::Patients => "Patients",
            Route::Appointments => "Appointments",
            Route::PatientAppointments => "My Appointments",
            Route::MedicalRecords => "Medical Records",
            Route::PrescriptionsMedication => "Prescriptions & Medication",
            Route::ProgressReport => "Progress Report",
            Route::Settings => "Settings",
            Route::Profile => "Profile",
            Route::Notifications => "Notifications",
        }
    }

    /// Login and signup render without the navigation shell.
    pub fn is_public(self) -> bool {
        matches!(self, Route::Login | Route::Signup)
    }
}
