//! Descriptors for the list/create resource screens.
//!
//! ARCHITECTURE
//! ============
//! Every resource page follows the same fetch-list / fill-form / submit
//! shape, so one `RecordsPage` renders all of them from these tables.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use std::collections::HashMap;

use crate::net::types::Record;
use crate::routing::route::Route;
use crate::state::session::Role;

/// Input widget for a form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    DateTime,
    Multiline,
}

impl FieldKind {
    /// HTML `type` attribute for single-line inputs.
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::Multiline => "text",
            FieldKind::Date => "date",
            FieldKind::DateTime => "datetime-local",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn required(key: &'static str, label: &'static str, kind: FieldKind) -> Field {
    Field { key, label, kind, required: true }
}

const fn optional(key: &'static str, label: &'static str, kind: FieldKind) -> Field {
    Field { key, label, kind, required: false }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

const fn col(key: &'static str, label: &'static str) -> Column {
    Column { key, label }
}

/// A validation failure for one form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub key: &'static str,
    pub message: String,
}

/// Backend collections reachable from the resource screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    Patients,
    Appointments,
    PatientAppointments,
    MedicalRecords,
    Prescriptions,
    /// Medication-adherence log shown beside prescriptions.
    Medication,
    ProgressReports,
    Notifications,
}

const PATIENT_COLUMNS: &[Column] = &[
    col("firstName", "First Name"),
    col("lastName", "Last Name"),
    col("dateOfBirth", "Date of Birth"),
    col("gender", "Gender"),
    col("phoneNumber", "Phone"),
];

const APPOINTMENT_COLUMNS: &[Column] = &[
    col("doctorUsername", "Doctor"),
    col("patientId", "Patient"),
    col("appointmentDate", "Date"),
    col("location", "Location"),
    col("status", "Status"),
];

const PATIENT_APPOINTMENT_COLUMNS: &[Column] = &[
    col("doctorUsername", "Doctor"),
    col("appointmentDate", "Date"),
    col("location", "Location"),
    col("status", "Status"),
];

const MEDICAL_RECORD_COLUMNS: &[Column] = &[
    col("patientId", "Patient"),
    col("dateOfVisit", "Date of Visit"),
    col("diagnosis", "Diagnosis"),
    col("treatmentPlan", "Treatment Plan"),
];

const PRESCRIPTION_COLUMNS: &[Column] = &[
    col("patientId", "Patient"),
    col("doctorId", "Doctor"),
    col("date", "Date"),
    col("details", "Details"),
];

const MEDICATION_COLUMNS: &[Column] = &[col("patientId", "Patient"), col("date", "Date"), col("details", "Details")];

const PROGRESS_REPORT_COLUMNS: &[Column] = &[
    col("patientId", "Patient"),
    col("caregiverId", "Caregiver"),
    col("date", "Date"),
    col("summary", "Summary"),
];

const NOTIFICATION_COLUMNS: &[Column] = &[col("message", "Message"), col("date", "Date")];

const PATIENT_FIELDS: &[Field] = &[
    required("firstName", "First Name", FieldKind::Text),
    required("lastName", "Last Name", FieldKind::Text),
    required("dateOfBirth", "Date of Birth", FieldKind::Date),
    required("gender", "Gender", FieldKind::Text),
    required("address", "Address", FieldKind::Text),
    required("phoneNumber", "Phone Number", FieldKind::Text),
    optional("emergencyContact", "Emergency Contact", FieldKind::Text),
    optional("emergencyContactPhone", "Emergency Contact Phone", FieldKind::Text),
];

const APPOINTMENT_FIELDS: &[Field] = &[
    required("doctorUsername", "Doctor Username", FieldKind::Text),
    required("patientId", "Patient ID", FieldKind::Text),
    required("appointmentDate", "Appointment Date", FieldKind::DateTime),
    required("location", "Location", FieldKind::Text),
];

const MEDICAL_RECORD_FIELDS: &[Field] = &[
    required("patientId", "Patient ID", FieldKind::Text),
    required("doctorId", "Doctor ID", FieldKind::Text),
    required("dateOfVisit", "Date of Visit", FieldKind::DateTime),
    required("location", "Location", FieldKind::Text),
    required("diagnosis", "Diagnosis", FieldKind::Text),
    required("treatmentPlan", "Treatment Plan", FieldKind::Multiline),
    optional("notes", "Notes", FieldKind::Multiline),
];

const PRESCRIPTION_FIELDS: &[Field] = &[
    required("patientId", "Patient ID", FieldKind::Text),
    required("doctorId", "Doctor ID", FieldKind::Text),
    required("date", "Date", FieldKind::Date),
    required("details", "Details", FieldKind::Multiline),
];

const MEDICATION_FIELDS: &[Field] = &[
    required("patientId", "Patient ID", FieldKind::Text),
    required("date", "Date", FieldKind::Date),
    required("details", "Details", FieldKind::Multiline),
];

const PROGRESS_REPORT_FIELDS: &[Field] = &[
    required("patientId", "Patient ID", FieldKind::Text),
    required("caregiverId", "Caregiver ID", FieldKind::Text),
    required("date", "Date", FieldKind::Date),
    required("summary", "Summary", FieldKind::Multiline),
    required("recommendations", "Recommendations", FieldKind::Multiline),
];

impl Resource {
    /// The resource screen behind a route, if it is one.
    pub fn for_route(route: Route) -> Option<Self> {
        let resource = match route {
            Route::Patients => Resource::Patients,
            Route::Appointments => Resource::Appointments,
            Route::PatientAppointments => Resource::PatientAppointments,
            Route::MedicalRecords => Resource::MedicalRecords,
            Route::PrescriptionsMedication => Resource::Prescriptions,
            Route::ProgressReport => Resource::ProgressReports,
            Route::Notifications => Resource::Notifications,
            _ => return None,
        };
        Some(resource)
    }

    /// Every resource section rendered on a route's page, in display order.
    pub fn sections(route: Route) -> &'static [Resource] {
        match route {
            Route::PrescriptionsMedication => &[Resource::Prescriptions, Resource::Medication],
            Route::Patients => &[Resource::Patients],
            Route::Appointments => &[Resource::Appointments],
            Route::PatientAppointments => &[Resource::PatientAppointments],
            Route::MedicalRecords => &[Resource::MedicalRecords],
            Route::ProgressReport => &[Resource::ProgressReports],
            Route::Notifications => &[Resource::Notifications],
            _ => &[],
        }
    }

    /// Heading for a section when a page shows more than one resource.
    pub fn title(self) -> &'static str {
        match self {
            Resource::Patients => "Patients",
            Resource::Appointments | Resource::PatientAppointments => "Appointments",
            Resource::MedicalRecords => "Medical Records",
            Resource::Prescriptions => "Prescriptions",
            Resource::Medication => "Medication Log",
            Resource::ProgressReports => "Progress Reports",
            Resource::Notifications => "Notifications",
        }
    }

    /// Singular noun for buttons and dialogs.
    pub fn noun(self) -> &'static str {
        match self {
            Resource::Patients => "Patient",
            Resource::Appointments | Resource::PatientAppointments => "Appointment",
            Resource::MedicalRecords => "Medical Record",
            Resource::Prescriptions => "Prescription",
            Resource::Medication => "Medication Entry",
            Resource::ProgressReports => "Progress Report",
            Resource::Notifications => "Notification",
        }
    }

    /// API collection path, used for create, update and delete.
    pub fn collection(self) -> &'static str {
        match self {
            Resource::Patients => "/patients",
            Resource::Appointments | Resource::PatientAppointments => "/appointments",
            Resource::MedicalRecords => "/medical-records",
            Resource::Prescriptions => "/prescriptions",
            Resource::Medication => "/medications",
            Resource::ProgressReports => "/progress-reports",
            Resource::Notifications => "/notifications",
        }
    }

    /// List path scoped to what `role` should see.
    ///
    /// Caregivers and patients only get their own progress reports, doctors
    /// and patients only their own medical records, and the patient
    /// appointment screen lists the caller's appointments.
    pub fn list_path(self, role: Role, user_id: Option<&str>) -> String {
        match (self, role, user_id) {
            (Resource::ProgressReports, Role::Caregiver, Some(id)) => {
                format!("/progress-reports/caregiver/{}", urlencoding::encode(id))
            }
            (Resource::ProgressReports, Role::Patient, Some(id)) => {
                format!("/progress-reports/patient/{}", urlencoding::encode(id))
            }
            (Resource::MedicalRecords, Role::Doctor, Some(id)) => {
                format!("/medical-records/doctor/{}", urlencoding::encode(id))
            }
            (Resource::MedicalRecords, Role::Patient, Some(id)) => {
                format!("/medical-records/patient/{}", urlencoding::encode(id))
            }
            (Resource::PatientAppointments, _, Some(id)) => {
                format!("/appointments/patient/{}", urlencoding::encode(id))
            }
            _ => self.collection().to_owned(),
        }
    }

    /// Path of one record for update and delete.
    pub fn item_path(self, id: &str) -> String {
        format!("{}/{}", self.collection(), urlencoding::encode(id))
    }

    pub fn columns(self) -> &'static [Column] {
        match self {
            Resource::Patients => PATIENT_COLUMNS,
            Resource::Appointments => APPOINTMENT_COLUMNS,
            Resource::PatientAppointments => PATIENT_APPOINTMENT_COLUMNS,
            Resource::MedicalRecords => MEDICAL_RECORD_COLUMNS,
            Resource::Prescriptions => PRESCRIPTION_COLUMNS,
            Resource::Medication => MEDICATION_COLUMNS,
            Resource::ProgressReports => PROGRESS_REPORT_COLUMNS,
            Resource::Notifications => NOTIFICATION_COLUMNS,
        }
    }

    /// Form fields for the add and edit dialogs; empty for read-only screens.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Resource::Patients => PATIENT_FIELDS,
            Resource::Appointments => APPOINTMENT_FIELDS,
            Resource::MedicalRecords => MEDICAL_RECORD_FIELDS,
            Resource::Prescriptions => PRESCRIPTION_FIELDS,
            Resource::Medication => MEDICATION_FIELDS,
            Resource::ProgressReports => PROGRESS_REPORT_FIELDS,
            Resource::PatientAppointments | Resource::Notifications => &[],
        }
    }

    pub fn can_create(self) -> bool {
        !self.fields().is_empty()
    }

    /// Screens with a form also allow editing existing rows.
    pub fn can_edit(self) -> bool {
        self.can_create()
    }

    /// Patients cannot cancel appointments from their own list.
    pub fn can_delete(self) -> bool {
        !matches!(self, Resource::PatientAppointments)
    }

    /// Check required fields and build the JSON body for a create call.
    ///
    /// Values are trimmed; blank optional fields are omitted.
    ///
    /// # Errors
    ///
    /// Returns one [`FieldError`] per blank required field, in form order.
    pub fn build_record(self, values: &HashMap<String, String>) -> Result<Record, Vec<FieldError>> {
        let mut record = Record::new();
        let mut errors = Vec::new();
        for field in self.fields() {
            let value = values.get(field.key).map(|v| v.trim()).unwrap_or_default();
            if value.is_empty() {
                if field.required {
                    errors.push(FieldError { key: field.key, message: format!("{} is required", field.label) });
                }
                continue;
            }
            record.insert(field.key.to_owned(), serde_json::Value::String(value.to_owned()));
        }
        if errors.is_empty() { Ok(record) } else { Err(errors) }
    }
}

/// Render a record cell; strings show bare, other JSON values as text.
pub fn cell_text(record: &Record, key: &str) -> String {
    match record.get(key) {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Record id as a string, whether the API sent a number or a string.
pub fn record_id(record: &Record) -> Option<String> {
    match record.get("id")? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Form values for editing `record`: one entry per form field, taken from
/// the record's current cell text.
pub fn prefill_values(resource: Resource, record: &Record) -> HashMap<String, String> {
    resource
        .fields()
        .iter()
        .map(|field| (field.key.to_owned(), cell_text(record, field.key)))
        .collect()
}

/// Give `record` the id it is stored under when the body lacks one.
pub fn with_id(mut record: Record, id: &str) -> Record {
    if record_id(&record).is_none() {
        record.insert("id".to_owned(), serde_json::Value::String(id.to_owned()));
    }
    record
}
