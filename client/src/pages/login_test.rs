use super::*;

#[test]
fn validate_login_input_trims_both_fields() {
    assert_eq!(
        validate_login_input("  a@b.com  ", " pw123456 "),
        Ok(("a@b.com".to_owned(), "pw123456".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_an_email() {
    assert_eq!(
        validate_login_input("   ", "pw123456"),
        Err("Please enter both email and password")
    );
}

#[test]
fn validate_login_input_requires_a_password() {
    assert_eq!(
        validate_login_input("a@b.com", ""),
        Err("Please enter both email and password")
    );
}
