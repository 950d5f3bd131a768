//! Role-specific side navigation entries.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::routing::route::Route;
use crate::state::session::Role;

/// Icon shown beside a navigation label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    People,
    Event,
    History,
    Medication,
    Assignment,
    Notifications,
    Settings,
}

impl NavIcon {
    /// Glyph rendered in the collapsed icon rail.
    pub fn glyph(self) -> &'static str {
        match self {
            NavIcon::Home => "\u{2302}",
            NavIcon::People => "\u{1F465}",
            NavIcon::Event => "\u{1F4C5}",
            NavIcon::History => "\u{1F4CB}",
            NavIcon::Medication => "\u{1F48A}",
            NavIcon::Assignment => "\u{1F4DD}",
            NavIcon::Notifications => "\u{1F514}",
            NavIcon::Settings => "\u{2699}",
        }
    }
}

/// One side-menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: NavIcon,
    pub route: Route,
}

impl NavItem {
    const fn new(label: &'static str, icon: NavIcon, route: Route) -> Self {
        Self { label, icon, route }
    }

    pub fn path(&self) -> &'static str {
        self.route.path()
    }
}

const DOCTOR_ITEMS: &[NavItem] = &[
    NavItem::new("Dashboard", NavIcon::Home, Route::Dashboard(Role::Doctor)),
    NavItem::new("Patients", NavIcon::People, Route::Patients),
    NavItem::new("Appointments", NavIcon::Event, Route::Appointments),
    NavItem::new("Medical Records", NavIcon::History, Route::MedicalRecords),
    NavItem::new("Prescriptions & Medication", NavIcon::Medication, Route::PrescriptionsMedication),
    NavItem::new("Progress Report", NavIcon::Assignment, Route::ProgressReport),
    NavItem::new("Notifications", NavIcon::Notifications, Route::Notifications),
    NavItem::new("Settings", NavIcon::Settings, Route::Settings),
];

const CAREGIVER_ITEMS: &[NavItem] = &[
    NavItem::new("Dashboard", NavIcon::Home, Route::Dashboard(Role::Caregiver)),
    NavItem::new("Patients", NavIcon::People, Route::Patients),
    NavItem::new("Progress Report", NavIcon::Assignment, Route::ProgressReport),
    NavItem::new("Prescriptions & Medication", NavIcon::Medication, Route::PrescriptionsMedication),
    NavItem::new("Notifications", NavIcon::Notifications, Route::Notifications),
    NavItem::new("Settings", NavIcon::Settings, Route::Settings),
];

const PATIENT_ITEMS: &[NavItem] = &[
    NavItem::new("Dashboard", NavIcon::Home, Route::Dashboard(Role::Patient)),
    NavItem::new("Appointments", NavIcon::Event, Route::PatientAppointments),
    NavItem::new("Notifications", NavIcon::Notifications, Route::Notifications),
    NavItem::new("Settings", NavIcon::Settings, Route::Settings),
];

/// Ordered menu for `role`; guests get nothing.
pub fn nav_items_for(role: Role) -> &'static [NavItem] {
    match role {
        Role::Doctor => DOCTOR_ITEMS,
        Role::Caregiver => CAREGIVER_ITEMS,
        Role::Patient => PATIENT_ITEMS,
        Role::Guest => &[],
    }
}
