use crate::{CoreError, EmailAddress};

#[test]
fn test_email_address_is_lowercased() {
    let email = EmailAddress::parse("Alice@Example.COM").unwrap();

    assert_eq!(email.as_str(), "alice@example.com");
}

#[test]
fn test_email_addresses_differing_by_case_are_equal() {
    let upper = EmailAddress::parse("A@B.com").unwrap();
    let lower = EmailAddress::parse("a@b.com").unwrap();

    assert_eq!(upper, lower);
}

#[test]
fn test_empty_email_is_rejected() {
    let result = EmailAddress::parse("");

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: "email", .. })
    ));
}

#[test]
fn test_email_address_is_not_trimmed_or_validated() {
    let email = EmailAddress::parse(" Not An Email ").unwrap();

    assert_eq!(email.to_string(), " not an email ");
}
