use super::*;
use crate::state::session::Role;

#[test]
fn active_item_matches_current_path() {
    let items = nav_items_for(Role::Doctor);
    let patients = items.iter().find(|i| i.route == Route::Patients).unwrap();
    assert!(is_active(patients, "/patients"));
    assert!(is_active(patients, "/patients/"));
    assert!(!is_active(patients, "/appointments"));
}

#[test]
fn unknown_path_marks_nothing_active() {
    assert!(nav_items_for(Role::Patient).iter().all(|i| !is_active(i, "/nowhere")));
}

#[test]
fn patient_appointments_entry_is_not_the_staff_list() {
    let items = nav_items_for(Role::Patient);
    let appts = items.iter().find(|i| i.label == "Appointments").unwrap();
    assert!(is_active(appts, "/patient-appointments"));
    assert!(!is_active(appts, "/appointments"));
}
