//! In-browser stand-in for the REST API, used when `AuthMode::Mock` is set.
//!
//! Demo accounts and seeded rows let every role's screens be exercised
//! without a backend.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::json;

use crate::net::error::ApiError;
use crate::net::resources::{Resource, with_id};
use crate::net::types::{LoginGrant, Profile, Record, SignupForm};
use crate::state::session::{Role, Session};

/// Token handed out for every mock login.
pub const MOCK_TOKEN: &str = "mock-token";

/// Simulated round-trip latency for mock calls, in milliseconds.
pub const MOCK_LATENCY_MS: u32 = 400;

pub struct DemoAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
}

pub const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount { email: "johndoe@gmail.com", password: "password12", role: Role::Doctor },
    DemoAccount { email: "johndoe2@gmail.com", password: "password12", role: Role::Doctor },
    DemoAccount { email: "jane1@gmail.com", password: "password123", role: Role::Caregiver },
    DemoAccount { email: "jane2@gmail.com", password: "password123", role: Role::Caregiver },
    DemoAccount { email: "smithrowe@gmail.com", password: "password1234", role: Role::Patient },
    DemoAccount { email: "smithrowe2@gmail.com", password: "password1234", role: Role::Patient },
];

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Check credentials against the demo accounts. Emails match case-insensitively.
///
/// # Errors
///
/// Returns [`ApiError::InvalidCredentials`] when no account matches.
pub fn login(email: &str, password: &str) -> Result<LoginGrant, ApiError> {
    DEMO_ACCOUNTS
        .iter()
        .find(|a| a.email.eq_ignore_ascii_case(email.trim()) && a.password == password)
        .map(|a| LoginGrant { token: MOCK_TOKEN.to_owned(), role: a.role, user_id: a.email.to_owned() })
        .ok_or(ApiError::InvalidCredentials)
}

/// Accept a registration unless the email belongs to a demo account.
///
/// # Errors
///
/// Returns [`ApiError::AlreadyExists`] for a taken email.
pub fn register(form: &SignupForm) -> Result<(), ApiError> {
    if DEMO_ACCOUNTS.iter().any(|a| a.email.eq_ignore_ascii_case(form.email.trim())) {
        return Err(ApiError::AlreadyExists);
    }
    Ok(())
}

/// Profile derived from the session's user id.
pub fn profile(session: &Session) -> Profile {
    let email = session.user_id.clone().unwrap_or_default();
    let username = email.split('@').next().unwrap_or_default().to_owned();
    Profile {
        id: None,
        username,
        email,
        phone_number: "555-0100".to_owned(),
        primary_location: "Toronto".to_owned(),
        secondary_location: String::new(),
        role: session.role.as_str().to_owned(),
    }
}

/// Echo an update back the way the API would.
pub fn update_profile(session: &Session, form: &Profile) -> Profile {
    Profile { role: session.role.as_str().to_owned(), ..form.clone() }
}

/// Assign an id to a newly created record.
pub fn create(mut record: Record) -> Record {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    record.insert("id".to_owned(), json!(format!("mock-{id}")));
    record
}

/// Echo an edited record back under its existing id.
pub fn update(id: &str, mut record: Record) -> Record {
    record.remove("id");
    with_id(record, id)
}

/// Seeded rows for a resource screen as seen by `session`.
pub fn seed(resource: Resource, session: &Session) -> Vec<Record> {
    let me = session.user_id.as_deref().unwrap_or("me");
    let rows = match resource {
        Resource::Patients => vec![
            json!({"id": 1, "firstName": "Margaret", "lastName": "Hill", "dateOfBirth": "1941-03-12",
                   "gender": "Female", "address": "12 Elm St", "phoneNumber": "555-0111"}),
            json!({"id": 2, "firstName": "Arthur", "lastName": "Reyes", "dateOfBirth": "1938-07-30",
                   "gender": "Male", "address": "4 Birch Ave", "phoneNumber": "555-0112"}),
        ],
        Resource::Appointments => vec![
            json!({"id": 1, "doctorUsername": "johndoe", "patientId": "1",
                   "appointmentDate": "2024-11-04T09:30", "location": "Clinic A", "status": "SCHEDULED"}),
            json!({"id": 2, "doctorUsername": "johndoe2", "patientId": "2",
                   "appointmentDate": "2024-11-05T14:00", "location": "Home visit", "status": "COMPLETED"}),
        ],
        Resource::PatientAppointments => vec![
            json!({"id": 1, "doctorUsername": "johndoe", "patientId": me,
                   "appointmentDate": "2024-11-04T09:30", "location": "Clinic A", "status": "SCHEDULED"}),
        ],
        Resource::MedicalRecords => {
            let patient = if session.role == Role::Patient { me } else { "1" };
            let doctor = if session.role == Role::Doctor { me } else { "johndoe@gmail.com" };
            vec![json!({"id": 1, "patientId": patient, "doctorId": doctor, "dateOfVisit": "2024-10-02T10:00",
                   "location": "Clinic A", "diagnosis": "Hypertension", "treatmentPlan": "Low sodium diet"})]
        }
        Resource::Prescriptions => vec![
            json!({"id": 1, "patientId": "1", "doctorId": "johndoe", "date": "2024-10-02",
                   "details": "Lisinopril 10mg once daily"}),
        ],
        Resource::Medication => vec![
            json!({"id": 1, "patientId": "1", "date": "2024-10-03", "details": "Took morning dose on time"}),
            json!({"id": 2, "patientId": "2", "date": "2024-10-03", "details": "Missed evening dose"}),
        ],
        Resource::ProgressReports => {
            let caregiver = if session.role == Role::Caregiver { me } else { "jane1@gmail.com" };
            let patient = if session.role == Role::Patient { me } else { "1" };
            vec![json!({"id": 1, "patientId": patient, "caregiverId": caregiver, "date": "2024-10-20",
                        "summary": "Walked 20 minutes daily", "recommendations": "Keep hydration log"})]
        }
        Resource::Notifications => vec![
            json!({"id": 1, "message": "Appointment reminder: Clinic A tomorrow 9:30", "date": "2024-11-03"}),
            json!({"id": 2, "message": "New progress report available", "date": "2024-10-20"}),
        ],
    };
    rows.into_iter()
        .filter_map(|row| match row {
            serde_json::Value::Object(map) => Some(map),
            _ => None,
        })
        .collect()
}
