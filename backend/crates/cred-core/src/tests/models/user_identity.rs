use crate::{EmailAddress, UserIdentity};

#[test]
fn test_user_identity_new() {
    let email = EmailAddress::parse("User@Example.com").unwrap();
    let user = UserIdentity::new(email.clone(), "$2b$04$hash".to_string());

    assert_eq!(user.email, email);
    assert_eq!(user.password_hash, "$2b$04$hash");
    assert!(!user.id.is_nil());
}

#[test]
fn test_user_identity_ids_are_unique() {
    let email = EmailAddress::parse("user@example.com").unwrap();
    let first = UserIdentity::new(email.clone(), "h".to_string());
    let second = UserIdentity::new(email, "h".to_string());

    assert_ne!(first.id, second.id);
}

#[test]
fn test_user_identity_debug_hides_password_hash() {
    let email = EmailAddress::parse("user@example.com").unwrap();
    let user = UserIdentity::new(email, "$2b$10$very-secret-hash".to_string());

    let debug = format!("{:?}", user);

    assert!(debug.contains("user@example.com"));
    assert!(!debug.contains("very-secret-hash"));
}
