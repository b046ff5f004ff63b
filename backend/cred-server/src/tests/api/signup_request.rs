use crate::SignupRequest;

use cred_core::Credentials;

#[test]
fn test_absent_fields_become_empty_credentials() {
    let request: SignupRequest = serde_json::from_str("{}").unwrap();
    let credentials = Credentials::from(request);

    assert_eq!(credentials.email, "");
    assert_eq!(credentials.password, "");
}

#[test]
fn test_null_fields_become_empty_credentials() {
    let request: SignupRequest =
        serde_json::from_str(r#"{"email":null,"password":"pw"}"#).unwrap();
    let credentials = Credentials::from(request);

    assert_eq!(credentials.email, "");
    assert_eq!(credentials.password, "pw");
}

#[test]
fn test_unknown_fields_are_ignored() {
    let request: SignupRequest =
        serde_json::from_str(r#"{"email":"a@b.c","password":"pw","name":"x"}"#).unwrap();

    assert_eq!(request.email.as_deref(), Some("a@b.c"));
}

#[test]
fn test_non_string_email_is_rejected() {
    let result = serde_json::from_str::<SignupRequest>(r#"{"email":42,"password":"pw"}"#);

    assert!(result.is_err());
}
