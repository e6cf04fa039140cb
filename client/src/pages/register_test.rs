use super::*;

fn form() -> RegisterForm {
    RegisterForm {
        name: " Asha ".to_owned(),
        email: "asha@example.com ".to_owned(),
        password: "secret".to_owned(),
        confirm: "secret".to_owned(),
        role: Role::Receiver,
    }
}

#[test]
fn validate_register_input_builds_trimmed_request() {
    let request = validate_register_input(&form()).unwrap();
    assert_eq!(request.name, "Asha");
    assert_eq!(request.email, "asha@example.com");
    assert_eq!(request.role, Role::Receiver);
}

#[test]
fn password_mismatch_is_rejected() {
    let mut f = form();
    f.confirm = "other".to_owned();
    assert_eq!(validate_register_input(&f), Err(ApiError::Validation("Passwords do not match".to_owned())));
}

#[test]
fn blank_fields_are_rejected() {
    let mut f = form();
    f.name = "   ".to_owned();
    assert_eq!(validate_register_input(&f), Err(ApiError::Validation("Please fill in all fields.".to_owned())));
}

#[test]
fn role_defaults_to_donor() {
    assert_eq!(RegisterForm::default().role, Role::Donor);
}
