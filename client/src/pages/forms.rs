//! Field checks shared by the login, signup, and profile forms.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Minimum password length accepted by the login form.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Loose `local@domain.tld` check: no whitespace, one `@`, and a dot with
/// text on both sides somewhere in the domain.
pub fn looks_like_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .rsplit_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Message for a required field left blank.
pub fn required(value: &str, message: &'static str) -> Option<&'static str> {
    if value.trim().is_empty() { Some(message) } else { None }
}
