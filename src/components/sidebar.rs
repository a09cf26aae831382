//! Sidebar Component
//!
//! Section navigation. Menu entries are a fixed table; the active entry
//! follows the navigation state, including while a profile is open.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::nav::Section;
use crate::store::{use_app_store, AppStateStoreFields};

struct MenuItem {
    section: Section,
    badge: Option<&'static str>,
    restricted: bool,
}

const MENU_ITEMS: &[MenuItem] = &[
    MenuItem { section: Section::Dashboard, badge: None, restricted: false },
    MenuItem { section: Section::Clients, badge: None, restricted: false },
    MenuItem { section: Section::Volunteers, badge: None, restricted: false },
    MenuItem { section: Section::Cases, badge: None, restricted: false },
    MenuItem { section: Section::RapidResponse, badge: Some("2"), restricted: false },
    MenuItem { section: Section::Safeguarding, badge: None, restricted: true },
    MenuItem { section: Section::Advocacy, badge: None, restricted: false },
    MenuItem { section: Section::Reports, badge: None, restricted: false },
    MenuItem { section: Section::Settings, badge: None, restricted: false },
];

#[component]
pub fn Sidebar(
    is_open: ReadSignal<bool>,
    set_is_open: WriteSignal<bool>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let active_section = move || store.route().get().active_section();

    view! {
        <Show when=move || is_open.get()>
            <div class="sidebar-overlay" on:click=move |_| set_is_open.set(false)></div>
        </Show>

        <aside class=move || if is_open.get() { "sidebar open" } else { "sidebar" }>
            <nav class="sidebar-nav">
                {MENU_ITEMS
                    .iter()
                    .map(|item| {
                        let section = item.section;
                        let badge = item.badge;
                        let restricted = item.restricted;
                        let item_class = move || {
                            let mut class = String::from("sidebar-item");
                            if active_section() == section {
                                class.push_str(" active");
                            }
                            if restricted {
                                class.push_str(" restricted");
                            }
                            class
                        };
                        view! {
                            <button
                                class=item_class
                                on:click=move |_| {
                                    ctx.select_section(section);
                                    // Close the mobile drawer after selection
                                    set_is_open.set(false);
                                }
                            >
                                <span class="sidebar-label">{section.label()}</span>
                                {badge.map(|text| view! { <span class="badge badge-destructive">{text}</span> })}
                                {restricted.then(|| view! { <span class="restricted-mark">"⚠"</span> })}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="system-status">
                <div class="system-status-title">
                    <span class="status-dot"></span>
                    "System Status"
                </div>
                <p>"All systems operational"</p>
                <p>"Last backup: 2 hours ago"</p>
            </div>
        </aside>
    }
}
