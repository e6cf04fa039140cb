use super::*;

#[test]
fn push_appends_in_order_with_unique_ids() {
    let mut state = ToastState::default();
    let first = state.push(ToastLevel::Success, "Donation posted successfully!");
    let second = state.push(ToastLevel::Error, "Could not fetch donations.");
    assert_ne!(first, second);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].message, "Donation posted successfully!");
    assert_eq!(state.items[1].level, ToastLevel::Error);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let keep = state.push(ToastLevel::Success, "a");
    let drop = state.push(ToastLevel::Error, "b");
    state.dismiss(&drop);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, keep);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(ToastLevel::Success, "a");
    state.dismiss("missing");
    assert_eq!(state.items.len(), 1);
}

#[test]
fn toasts_handle_dismiss_removes_clicked_toast() {
    let toasts = Toasts::new();
    toasts.error("Could not fetch donations.");
    toasts.success("Donation claimed successfully!");
    let clicked = toasts.0.with_untracked(|s| s.items[0].id.clone());

    toasts.dismiss(&clicked);

    toasts.0.with_untracked(|s| {
        assert_eq!(s.items.len(), 1);
        assert_eq!(s.items[0].message, "Donation claimed successfully!");
    });
}
