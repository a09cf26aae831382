//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::nav::{NavEvent, NavState};

/// Transient notification shown by the toast host
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Info => "toast toast-info",
            ToastKind::Error => "toast toast-error",
        }
    }
}

/// App-wide state: the navigation route and the live toast queue
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub route: NavState,
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run a navigation event through the state machine
pub fn store_navigate(store: &AppStore, event: NavEvent) {
    let route_field = store.route();
    let mut route = route_field.write();
    *route = (*route).clone().apply(event);
}

/// Push a toast and return its id
pub fn store_push_toast(store: &AppStore, kind: ToastKind, message: String) -> u32 {
    let id = {
        let next_field = store.next_toast_id();
        let mut next = next_field.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(Toast { id, kind, message });
    id
}

/// Remove a toast by id; already-dismissed ids are ignored
pub fn store_dismiss_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}
