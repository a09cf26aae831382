//! Application Context
//!
//! Copyable handle over the app store, provided at the root. Components
//! use it to navigate and to raise toast notifications.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

use crate::nav::{NavEvent, ProfileKind, Section};
use crate::store::{store_dismiss_toast, store_navigate, store_push_toast, AppStore, ToastKind};

/// How long a toast stays on screen before auto-dismissing
const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Switch to a top-level section, closing any open profile
    pub fn select_section(&self, section: Section) {
        web_sys::console::log_1(&format!("[Nav] section -> {}", section.label()).into());
        store_navigate(&self.store, NavEvent::SelectSection(section));
    }

    /// Open an entity profile, remembering where it was opened from
    pub fn open_profile(&self, kind: ProfileKind, id: impl Into<String>) {
        let id = id.into();
        web_sys::console::log_1(&format!("[Nav] profile {kind:?} {id}").into());
        store_navigate(&self.store, NavEvent::OpenProfile(kind, id));
    }

    /// Return from a profile to the section it was opened from
    pub fn go_back(&self) {
        store_navigate(&self.store, NavEvent::GoBack);
    }

    /// Show a transient notification; auto-dismisses after a few seconds
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let store = self.store;
        let toast_id = store_push_toast(&store, kind, message.into());
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            store_dismiss_toast(&store, toast_id);
        });
    }

    pub fn toast_success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message);
    }

    pub fn toast_info(&self, message: impl Into<String>) {
        self.notify(ToastKind::Info, message);
    }

    pub fn toast_error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message);
    }
}
