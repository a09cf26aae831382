//! Action Menu Component
//!
//! Row-level dropdown. Every item acknowledges with a toast describing
//! what would happen; nothing is mutated.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::ToastKind;

#[derive(Clone, PartialEq)]
pub struct MenuAction {
    pub label: &'static str,
    pub kind: ToastKind,
    pub message: String,
}

impl MenuAction {
    pub fn success(label: &'static str, message: impl Into<String>) -> Self {
        Self { label, kind: ToastKind::Success, message: message.into() }
    }

    pub fn info(label: &'static str, message: impl Into<String>) -> Self {
        Self { label, kind: ToastKind::Info, message: message.into() }
    }

    pub fn error(label: &'static str, message: impl Into<String>) -> Self {
        Self { label, kind: ToastKind::Error, message: message.into() }
    }
}

#[component]
pub fn ActionMenu(
    #[prop(default = "Actions")] heading: &'static str,
    actions: Vec<MenuAction>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (open, set_open) = signal(false);

    let menu_class = move || if open.get() { "action-menu open" } else { "action-menu" };

    view! {
        <div class=menu_class>
            <button
                class="action-menu-trigger"
                on:click=move |ev: web_sys::MouseEvent| {
                    // Rows are clickable; keep the menu toggle from opening a profile
                    ev.stop_propagation();
                    set_open.update(|value| *value = !*value);
                }
            >
                "⋯"
            </button>
            <div class="action-menu-list">
                <div class="action-menu-heading">{heading}</div>
                {actions
                    .into_iter()
                    .map(|action| {
                        let MenuAction { label, kind, message } = action;
                        view! {
                            <button
                                class="action-menu-item"
                                on:click=move |ev: web_sys::MouseEvent| {
                                    ev.stop_propagation();
                                    set_open.set(false);
                                    ctx.notify(kind, message.clone());
                                }
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
