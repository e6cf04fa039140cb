//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, route guards and donation views while
//! reading shared state from Leptos context providers.

pub mod donation_card;
pub mod donation_map;
pub mod guard;
pub mod header;
pub mod history_item;
pub mod toast_stack;
