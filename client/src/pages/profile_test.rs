use super::*;

fn filled() -> Profile {
    Profile { username: "jane1".to_owned(), email: "jane1@gmail.com".to_owned(), ..Profile::default() }
}

#[test]
fn complete_profile_passes() {
    assert_eq!(validate_profile(&filled()), Ok(()));
}

#[test]
fn name_and_email_are_required() {
    let p = Profile { username: " ".to_owned(), ..filled() };
    assert_eq!(validate_profile(&p), Err("Name is required"));
    let p = Profile { email: String::new(), ..filled() };
    assert_eq!(validate_profile(&p), Err("Email is required"));
    let p = Profile { email: "jane1".to_owned(), ..filled() };
    assert_eq!(validate_profile(&p), Err("Invalid email format"));
}

#[test]
fn field_accessors_round_trip_each_slot() {
    let mut p = Profile::default();
    for (i, field) in ProfileField::EDITABLE.into_iter().enumerate() {
        field.set(&mut p, format!("v{i}"));
    }
    assert_eq!(p.username, "v0");
    assert_eq!(p.secondary_location, "v4");
    assert_eq!(ProfileField::PhoneNumber.get(&p), "v2");
}
