use crate::Credentials;

#[test]
fn test_credentials_debug_hides_password() {
    let credentials = Credentials::new("a@b.com", "hunter2-secret");

    let debug = format!("{:?}", credentials);

    assert!(debug.contains("a@b.com"));
    assert!(!debug.contains("hunter2-secret"));
}
