use super::*;

#[test]
fn session_deserializes_server_payload() {
    let raw = r#"{"_id":"65f0","name":"Ravi","email":"ravi@example.com","role":"receiver","token":"jwt"}"#;
    let session = Session::from_json(raw).expect("session");
    assert_eq!(session.id, "65f0");
    assert_eq!(session.role, Role::Receiver);
    assert_eq!(session.token, "jwt");
}

#[test]
fn session_accepts_plain_id_alias() {
    let raw = r#"{"id":"u-9","name":"N","email":"n@example.com","role":"donor","token":"t"}"#;
    assert_eq!(Session::from_json(raw).expect("session").id, "u-9");
}

#[test]
fn session_serializes_with_underscore_id() {
    let session = Session {
        id: "u-1".to_owned(),
        name: "A".to_owned(),
        email: "a@example.com".to_owned(),
        role: Role::Donor,
        token: "t".to_owned(),
    };
    let value = serde_json::to_value(&session).unwrap();
    assert_eq!(value["_id"], "u-1");
    assert_eq!(value["role"], "donor");
}

#[test]
fn partial_session_is_rejected() {
    assert!(Session::from_json(r#"{"_id":"u","name":"A","email":"a@b.c","role":"donor"}"#).is_none());
    assert!(Session::from_json(r#"{"_id":"u","name":"A","email":"a@b.c","role":"donor","token":""}"#).is_none());
    assert!(Session::from_json(r#"{"_id":"u","name":"","email":"a@b.c","role":"donor","token":"t"}"#).is_none());
    assert!(Session::from_json(r#"{"_id":"u","name":"  ","email":"a@b.c","role":"donor","token":"t"}"#).is_none());
    assert!(Session::from_json("null").is_none());
    assert!(Session::from_json("not json").is_none());
}

#[test]
fn login_request_serializes_credentials() {
    let req = LoginRequest { email: "a@b.c".to_owned(), password: "pw".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "email": "a@b.c", "password": "pw" })
    );
}

#[test]
fn register_request_includes_role() {
    let req = RegisterRequest {
        name: "A".to_owned(),
        email: "a@b.c".to_owned(),
        password: "pw".to_owned(),
        role: Role::Receiver,
    };
    assert_eq!(serde_json::to_value(&req).unwrap()["role"], "receiver");
}
