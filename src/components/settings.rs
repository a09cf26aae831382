//! Settings Panel Component
//!
//! Tabbed configuration screens. Controls show static initial values;
//! Save/Export/Delete only acknowledge with a toast.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::data;
use crate::format::format_date_time;
use crate::models::StaffUser;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SettingsTab {
    Organization,
    Users,
    Security,
    Data,
    Notifications,
    Integrations,
}

impl SettingsTab {
    fn label(self) -> &'static str {
        match self {
            SettingsTab::Organization => "Organization",
            SettingsTab::Users => "User Management",
            SettingsTab::Security => "Security & Privacy",
            SettingsTab::Data => "Data Management",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Integrations => "Integrations",
        }
    }
}

const SETTINGS_TABS: &[SettingsTab] = &[
    SettingsTab::Organization,
    SettingsTab::Users,
    SettingsTab::Security,
    SettingsTab::Data,
    SettingsTab::Notifications,
    SettingsTab::Integrations,
];

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(SettingsTab::Organization);

    view! {
        <div class="section">
            <div>
                <h2>"Settings"</h2>
                <p class="muted">"Configure system preferences and manage users"</p>
            </div>

            <div class="settings-layout">
                <div class="card settings-nav">
                    {SETTINGS_TABS
                        .iter()
                        .map(|tab| {
                            let tab = *tab;
                            let tab_class = move || {
                                if active_tab.get() == tab {
                                    "sidebar-item active"
                                } else {
                                    "sidebar-item"
                                }
                            };
                            view! {
                                <button class=tab_class on:click=move |_| set_active_tab.set(tab)>
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="settings-content">
                    {move || match active_tab.get() {
                        SettingsTab::Organization => view! { <OrganizationSettings /> }.into_any(),
                        SettingsTab::Users => view! { <UserManagement /> }.into_any(),
                        SettingsTab::Security => view! { <SecuritySettings /> }.into_any(),
                        SettingsTab::Data => view! {
                            <ComingSoon title="Data Management" body="Data management settings coming soon..." />
                        }
                        .into_any(),
                        SettingsTab::Notifications => view! {
                            <ComingSoon title="Notification Settings" body="Notification preferences coming soon..." />
                        }
                        .into_any(),
                        SettingsTab::Integrations => view! {
                            <ComingSoon title="System Integrations" body="Integration settings coming soon..." />
                        }
                        .into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ComingSoon(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-header">
                <h3>{title}</h3>
            </div>
            <p class="muted">{body}</p>
        </div>
    }
}

#[component]
fn OrganizationSettings() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="settings-stack">
            <div class="card">
                <div class="card-header">
                    <h3>"Organization Details"</h3>
                </div>
                <div class="form-grid">
                    <label>
                        "Organization Name"
                        <input type="text" value="Eden Care UK" />
                    </label>
                    <label>
                        "Charity Registration Number"
                        <input type="text" value="1234567" />
                    </label>
                    <label>
                        "Contact Email"
                        <input type="text" value="info@edencare.org.uk" />
                    </label>
                    <label>
                        "Phone Number"
                        <input type="text" value="0161 234 5678" />
                    </label>
                    <label class="form-wide">
                        "Address"
                        <textarea rows="3">"123 Community Street, Manchester, M1 1AA"</textarea>
                    </label>
                </div>
                <button
                    class="btn btn-primary"
                    on:click=move |_| ctx.toast_success("Organization settings saved")
                >
                    "Save Changes"
                </button>
            </div>

            <div class="card">
                <div class="card-header">
                    <h3>"System Preferences"</h3>
                </div>
                <div class="pref-row">
                    <div>
                        <p class="cell-title">"Auto-backup frequency"</p>
                        <p class="muted">"How often should the system create backups?"</p>
                    </div>
                    <select class="select-input">
                        <option value="hourly">"Hourly"</option>
                        <option value="daily" selected=true>"Daily"</option>
                        <option value="weekly">"Weekly"</option>
                    </select>
                </div>
                <div class="pref-row">
                    <div>
                        <p class="cell-title">"Data retention period"</p>
                        <p class="muted">"How long to keep inactive records?"</p>
                    </div>
                    <select class="select-input">
                        <option value="5-years">"5 Years"</option>
                        <option value="7-years" selected=true>"7 Years"</option>
                        <option value="10-years">"10 Years"</option>
                    </select>
                </div>
            </div>
        </div>
    }
}

#[component]
fn UserManagement() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (users, _set_users) = signal(data::sample_users());

    view! {
        <div class="card">
            <div class="card-header">
                <h3>"User Management"</h3>
                <button
                    class="btn btn-primary"
                    on:click=move |_| ctx.toast_success("Add User form would open here")
                >
                    "+ Add User"
                </button>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"User"</th>
                        <th>"Role"</th>
                        <th>"Status"</th>
                        <th>"Last Login"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || users.get()
                        key=|user| user.id.clone()
                        children=move |user: StaffUser| {
                            let edit_name = user.name.clone();
                            let delete_name = user.name.clone();
                            view! {
                                <tr>
                                    <td>
                                        <p class="cell-title">{user.name.clone()}</p>
                                        <p class="muted">{user.email.clone()}</p>
                                    </td>
                                    <td>
                                        <span class=user.role.badge_class()>{user.role.label()}</span>
                                    </td>
                                    <td>
                                        <span class=user.status.badge_class()>{user.status.label()}</span>
                                    </td>
                                    <td>{format_date_time(&user.last_login)}</td>
                                    <td>
                                        <button
                                            class="btn btn-outline"
                                            on:click=move |_| ctx.toast_info(format!("Editing {edit_name}"))
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn btn-outline"
                                            on:click=move |_| ctx.toast_error(format!("Would delete {delete_name}"))
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn SecuritySettings() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="settings-stack">
            <div class="card">
                <div class="card-header">
                    <h3>"Security & Privacy"</h3>
                </div>
                <div class="pref-row">
                    <div>
                        <p class="cell-title">"Two-factor authentication"</p>
                        <p class="muted">"Require 2FA for all admin users"</p>
                    </div>
                    <input type="checkbox" checked=true />
                </div>
                <div class="pref-row">
                    <div>
                        <p class="cell-title">"Session timeout"</p>
                        <p class="muted">"Auto-logout after inactivity"</p>
                    </div>
                    <select class="select-input">
                        <option value="15-minutes">"15 mins"</option>
                        <option value="30-minutes" selected=true>"30 mins"</option>
                        <option value="1-hour">"1 hour"</option>
                        <option value="4-hours">"4 hours"</option>
                    </select>
                </div>
                <div class="pref-row">
                    <div>
                        <p class="cell-title">"Audit logging"</p>
                        <p class="muted">"Log all user actions for compliance"</p>
                    </div>
                    <input type="checkbox" checked=true />
                </div>
                <div class="pref-row">
                    <div>
                        <p class="cell-title">"GDPR compliance mode"</p>
                        <p class="muted">"Enhanced data protection controls"</p>
                    </div>
                    <input type="checkbox" checked=true />
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h3>"Data Export & Deletion"</h3>
                </div>
                <div class="pref-row">
                    <div>
                        <p class="cell-title">"Export all data"</p>
                        <p class="muted">"Download complete system backup"</p>
                    </div>
                    <button
                        class="btn btn-outline"
                        on:click=move |_| ctx.toast_info("Data export would start here")
                    >
                        "Export"
                    </button>
                </div>
                <div class="pref-row">
                    <div>
                        <p class="cell-title">"Request data deletion"</p>
                        <p class="muted">"Permanently delete client data (GDPR)"</p>
                    </div>
                    <button
                        class="btn btn-destructive"
                        on:click=move |_| ctx.toast_error("Data deletion confirmation would appear")
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
