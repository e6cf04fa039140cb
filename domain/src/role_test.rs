use super::*;

fn session(role: Role, token: &str) -> Session {
    Session {
        id: "u-1".to_owned(),
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        role,
        token: token.to_owned(),
    }
}

#[test]
fn donor_can_create_and_view_own_donations_only() {
    assert!(Role::Donor.can(Capability::CreateDonation));
    assert!(Role::Donor.can(Capability::ViewMyDonations));
    assert!(!Role::Donor.can(Capability::ClaimDonation));
    assert!(!Role::Donor.can(Capability::ViewMyClaims));
}

#[test]
fn receiver_can_claim_and_view_own_claims_only() {
    assert!(Role::Receiver.can(Capability::ClaimDonation));
    assert!(Role::Receiver.can(Capability::ViewMyClaims));
    assert!(!Role::Receiver.can(Capability::CreateDonation));
    assert!(!Role::Receiver.can(Capability::ViewMyDonations));
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Donor).unwrap(), "\"donor\"");
    assert_eq!(serde_json::from_str::<Role>("\"receiver\"").unwrap(), Role::Receiver);
    assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
}

#[test]
fn require_without_session_is_unauthorized() {
    let err = require(None, Capability::ClaimDonation).unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized(_)));
}

#[test]
fn require_with_empty_token_is_unauthorized() {
    let s = session(Role::Receiver, "");
    let err = require(Some(&s), Capability::ClaimDonation).unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized(_)));
}

#[test]
fn donor_claim_is_forbidden() {
    let s = session(Role::Donor, "tok");
    let err = require(Some(&s), Capability::ClaimDonation).unwrap_err();
    assert_eq!(err, ApiError::Forbidden("Only receivers can claim donations.".to_owned()));
}

#[test]
fn receiver_claim_is_allowed() {
    let s = session(Role::Receiver, "tok");
    assert_eq!(require(Some(&s), Capability::ClaimDonation).unwrap().token, "tok");
}
