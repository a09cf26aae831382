//! Advocacy List Component
//!
//! Advocacy actions against external organizations; searchable by
//! client name, advocacy type or target organization.

use leptos::prelude::*;

use crate::components::{ActionMenu, MenuAction, StatsCard};
use crate::context::AppContext;
use crate::data;
use crate::format::format_date;
use crate::models::AdvocacyAction;
use crate::search;

#[component]
pub fn AdvocacyList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (actions, _set_actions) = signal(data::sample_advocacy());
    let (search_term, set_search_term) = signal(String::new());

    let filtered = move || search::filter(&actions.get(), &search_term.get());

    view! {
        <div class="section">
            <div class="section-header">
                <div>
                    <h2>"Advocacy"</h2>
                    <p class="muted">"Track advocacy actions and outcomes"</p>
                </div>
                <button
                    class="btn btn-primary"
                    on:click=move |_| ctx.toast_success("New Advocacy Action form would open here")
                >
                    "+ New Advocacy Action"
                </button>
            </div>

            <div class="stats-grid">
                <StatsCard title="Active Actions" value="23" />
                <StatsCard title="Letters Sent" value="47" />
                <StatsCard title="Escalated Cases" value="3" />
                <StatsCard title="Success Rate" value="78%" />
            </div>

            <div class="card">
                <div class="card-header">
                    <h3>"Advocacy Actions"</h3>
                    <div class="list-toolbar">
                        <input
                            type="text"
                            class="search-input"
                            placeholder="Search advocacy actions..."
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
                            <th>"Action ID"</th>
                            <th>"Client & Action"</th>
                            <th>"Target Organization"</th>
                            <th>"Status"</th>
                            <th>"Priority"</th>
                            <th>"Progress"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=filtered
                            key=|action| action.id.clone()
                            children=move |action: AdvocacyAction| {
                                let id = action.id.clone();
                                view! {
                                    <tr>
                                        <td><span class="mono">{action.id.clone()}</span></td>
                                        <td>
                                            <p class="cell-title">{action.client_name.clone()}</p>
                                            <p class="accent">{action.advocacy_type.clone()}</p>
                                            <p class="muted">{action.description.clone()}</p>
                                        </td>
                                        <td>
                                            <p>{action.target_organization.clone()}</p>
                                            <p class="muted">{format!("Assigned: {}", action.assigned_to)}</p>
                                            <p class="muted">{format!("{} documents", action.documents_count)}</p>
                                        </td>
                                        <td>
                                            <span class=action.status.badge_class()>{action.status.label()}</span>
                                        </td>
                                        <td>
                                            <span class=action.priority.badge_class()>{action.priority.label()}</span>
                                        </td>
                                        <td>
                                            <p class="muted">
                                                {format!("Started: {}", format_date(&action.start_date))}
                                            </p>
                                            <p>{action.last_action.clone()}</p>
                                            {action.next_action.clone().map(|next| view! {
                                                <p class="accent">{format!("Next: {next}")}</p>
                                            })}
                                            {action.outcome.clone().map(|outcome| view! {
                                                <p class="muted">{format!("Outcome: {outcome}")}</p>
                                            })}
                                        </td>
                                        <td>
                                            <ActionMenu actions=vec![
                                                MenuAction::success("View Details", format!("Viewing details for {id}")),
                                                MenuAction::info("Update Progress", format!("Updating progress for {id}")),
                                                MenuAction::info("Add Document", format!("Adding document to {id}")),
                                                MenuAction::success("Generate Letter", format!("Generating letter for {id}")),
                                                MenuAction::info("Schedule Meeting", format!("Scheduling meeting for {id}")),
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
