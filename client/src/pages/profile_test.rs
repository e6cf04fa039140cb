use super::*;

#[test]
fn donor_copy() {
    assert_eq!(impact_label(Role::Donor), "Total Donations Made");
    assert_eq!(history_heading(Role::Donor), "My Donation History");
}

#[test]
fn receiver_copy() {
    assert_eq!(impact_label(Role::Receiver), "Total Donations Received");
    assert_eq!(history_heading(Role::Receiver), "My Claim History");
    assert!(empty_history_text(Role::Receiver).contains("claimed"));
}
