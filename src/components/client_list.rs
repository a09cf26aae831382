//! Client List Component
//!
//! Service-user directory: searchable by name or address, rows open the
//! client profile.

use leptos::prelude::*;

use crate::components::{ActionMenu, MenuAction};
use crate::context::AppContext;
use crate::data;
use crate::format::format_date;
use crate::models::Client;
use crate::nav::ProfileKind;
use crate::search;

#[component]
pub fn ClientList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (clients, _set_clients) = signal(data::sample_clients());
    let (search_term, set_search_term) = signal(String::new());

    let filtered = move || search::filter(&clients.get(), &search_term.get());

    view! {
        <div class="section">
            <div class="section-header">
                <div>
                    <h2>"Service Users"</h2>
                    <p class="muted">"Manage clients and their support needs"</p>
                </div>
                <button
                    class="btn btn-primary"
                    on:click=move |_| ctx.toast_success("Add Client form would open here")
                >
                    "+ Add Client"
                </button>
            </div>

            <div class="card">
                <div class="card-header">
                    <h3>"Client Directory"</h3>
                    <div class="list-toolbar">
                        <input
                            type="text"
                            class="search-input"
                            placeholder="Search clients..."
                            prop:value=move || search_term.get()
                            on:input=move |ev| set_search_term.set(event_target_value(&ev))
                        />
                        <button
                            class="btn btn-outline"
                            on:click=move |_| ctx.toast_info("Filter options would open here")
                        >
                            "Filters"
                        </button>
                    </div>
                </div>

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Client"</th>
                            <th>"Contact"</th>
                            <th>"Support Type"</th>
                            <th>"Status"</th>
                            <th>"Assigned Staff"</th>
                            <th>"Last Contact"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=filtered
                            key=|client| client.id.clone()
                            children=move |client: Client| {
                                let id = client.id.clone();
                                let name = client.name.clone();
                                view! {
                                    <tr
                                        class="clickable-row"
                                        on:click=move |_| ctx.open_profile(ProfileKind::Client, id.clone())
                                    >
                                        <td>
                                            <p class="cell-title">
                                                {client.name.clone()}
                                                {client.safeguarding_flag.then(|| view! {
                                                    <span class="safeguarding-flag" title="Safeguarding flag">"🛡"</span>
                                                })}
                                            </p>
                                            <p class="muted">{format!("Age {}", client.age)}</p>
                                            <p class="muted">{client.address.clone()}</p>
                                        </td>
                                        <td>
                                            <p>{client.phone.clone()}</p>
                                            {client.email.clone().map(|email| view! { <p class="muted">{email}</p> })}
                                        </td>
                                        <td>
                                            {client
                                                .support_types
                                                .iter()
                                                .map(|support| view! {
                                                    <span class="badge badge-secondary">{support.clone()}</span>
                                                })
                                                .collect_view()}
                                        </td>
                                        <td>
                                            <span class=client.status.badge_class()>{client.status.label()}</span>
                                        </td>
                                        <td>{client.assigned_staff.clone()}</td>
                                        <td>{format_date(&client.last_contact)}</td>
                                        <td>
                                            <ActionMenu actions=vec![
                                                MenuAction::success("View Details", format!("Viewing {name}'s details")),
                                                MenuAction::info("Edit Client", format!("Editing {name}")),
                                                MenuAction::info("Add Case Note", format!("Adding case note for {name}")),
                                                MenuAction::success("Create Case", format!("Creating case for {name}")),
                                            ] />
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}
