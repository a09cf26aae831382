//! Header Component
//!
//! Top bar: brand block, global search box, notifications bell and the
//! signed-in user menu.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;

#[component]
pub fn Header(on_menu_toggle: impl Fn() + Copy + 'static) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (search, set_search) = signal(String::new());
    let (menu_open, set_menu_open) = signal(false);

    let on_user_action = move |label: &'static str| {
        set_menu_open.set(false);
        ctx.toast_info(format!("{label} would open here"));
    };

    view! {
        <header class="header">
            <div class="header-left">
                <button class="menu-toggle" on:click=move |_| on_menu_toggle()>"☰"</button>
                <div class="brand">
                    <div class="brand-mark">"EC"</div>
                    <div class="brand-text">
                        <h1>"Eden Care CRM"</h1>
                        <p>"Community Support Management"</p>
                    </div>
                </div>
            </div>

            <div class="header-search">
                <input
                    type="text"
                    placeholder="Search..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_search.set(input.value());
                    }
                />
            </div>

            <div class="header-right">
                <button
                    class="bell-btn"
                    on:click=move |_| ctx.toast_info("3 unread notifications")
                >
                    "🔔"
                    <span class="bell-dot"></span>
                </button>

                <div class=move || if menu_open.get() { "user-menu open" } else { "user-menu" }>
                    <button
                        class="user-menu-trigger"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <span class="user-avatar">"SJ"</span>
                        <span class="user-name">"Sarah Admin"</span>
                    </button>
                    <div class="user-menu-list">
                        <div class="user-menu-heading">
                            <p class="user-menu-name">"Sarah Johnson"</p>
                            <p class="user-menu-role">"Administrator"</p>
                        </div>
                        <button class="user-menu-item" on:click=move |_| on_user_action("Profile Settings")>
                            "Profile Settings"
                        </button>
                        <button class="user-menu-item" on:click=move |_| on_user_action("Security")>
                            "Security"
                        </button>
                        <button class="user-menu-item" on:click=move |_| on_user_action("Sign Out")>
                            "Sign Out"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}
