use super::*;

#[test]
fn receivers_can_claim() {
    let state = claim_button_state(Some(Role::Receiver), false);
    assert_eq!(state, ClaimButton::Claim);
    assert!(state.enabled());
    assert_eq!(state.label(), "Claim Donation");
}

#[test]
fn donors_and_guests_are_told_to_login_as_receiver() {
    for role in [Some(Role::Donor), None] {
        let state = claim_button_state(role, false);
        assert_eq!(state.label(), "Login as Receiver to Claim");
        assert!(!state.enabled());
    }
}

#[test]
fn claim_in_flight_disables_button() {
    let state = claim_button_state(Some(Role::Receiver), true);
    assert_eq!(state, ClaimButton::Claiming);
    assert!(!state.enabled());
}
