//! Rapid Response List Component
//!
//! Emergency request log with response-time tracking; searchable by
//! client name or request type.

use leptos::prelude::*;

use crate::components::{ActionMenu, MenuAction, StatsCard};
use crate::context::AppContext;
use crate::data;
use crate::format::{format_date_time, response_time_label};
use crate::models::RapidResponse;
use crate::search;

#[component]
pub fn RapidResponseList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (responses, _set_responses) = signal(data::sample_responses());
    let (search_term, set_search_term) = signal(String::new());

    let filtered = move || search::filter(&responses.get(), &search_term.get());

    view! {
        <div class="section">
            <div class="section-header">
                <div>
                    <h2>"Rapid Response"</h2>
                    <p class="muted">"Emergency and urgent support requests"</p>
                </div>
                <button
                    class="btn btn-primary"
                    on:click=move |_| ctx.toast_success("Log Response form would open here")
                >
                    "+ Log Response"
                </button>
            </div>

            <div class="stats-grid">
                <StatsCard title="This Week" value="8" />
                <StatsCard title="Pending" value="2" />
                <StatsCard title="Avg Response (mins)" value="15" />
                <StatsCard title="Completion Rate" value="95%" />
            </div>

            <div class="card">
                <div class="card-header">
                    <h3>"Response Log"</h3>
                    <div class="list-toolbar">
                        <input
                            type="text"
                            class="search-input"
                            placeholder="Search responses..."
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
                            <th>"Response ID"</th>
                            <th>"Client & Request"</th>
                            <th>"Assigned To"</th>
                            <th>"Status"</th>
                            <th>"Priority"</th>
                            <th>"Response Time"</th>
                            <th>"Follow-up"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=filtered
                            key=|response| response.id.clone()
                            children=move |response: RapidResponse| {
                                let id = response.id.clone();
                                let response_label = response_time_label(
                                    &response.request_time,
                                    response.response_time.as_deref(),
                                );
                                view! {
                                    <tr>
                                        <td><span class="mono">{response.id.clone()}</span></td>
                                        <td>
                                            <p class="cell-title">{response.client_name.clone()}</p>
                                            <p class="accent">{response.request_type.clone()}</p>
                                            <p class="muted">{response.description.clone()}</p>
                                            <p class="muted">{format!("Requested by: {}", response.requested_by)}</p>
                                        </td>
                                        <td>
                                            <p>{response.assigned_to.clone()}</p>
                                            <p class="muted">{format_date_time(&response.request_time)}</p>
                                        </td>
                                        <td>
                                            <span class=response.status.badge_class()>{response.status.label()}</span>
                                        </td>
                                        <td>
                                            <span class=response.priority.badge_class()>{response.priority.label()}</span>
                                        </td>
                                        <td>
                                            <p>{response_label}</p>
                                            {response.completed_time.clone().map(|completed| view! {
                                                <p class="muted">{format!("Completed: {}", format_date_time(&completed))}</p>
                                            })}
                                        </td>
                                        <td>
                                            {if response.follow_up_required {
                                                view! { <span class="badge badge-destructive">"Required"</span> }.into_any()
                                            } else {
                                                view! { <span class="badge badge-secondary">"None"</span> }.into_any()
                                            }}
                                        </td>
                                        <td>
                                            <ActionMenu actions=vec![
                                                MenuAction::success("View Details", format!("Viewing details for {id}")),
                                                MenuAction::info("Update Status", format!("Updating status for {id}")),
                                                MenuAction::info("Add Notes", format!("Adding notes to {id}")),
                                                MenuAction::success("Create Follow-up", format!("Creating follow-up for {id}")),
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
