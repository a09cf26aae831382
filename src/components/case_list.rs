//! Case List Component
//!
//! Active casework, searchable by title or client name.

use leptos::prelude::*;

use crate::components::{ActionMenu, MenuAction, StatsCard};
use crate::context::AppContext;
use crate::data;
use crate::format::format_date;
use crate::models::CaseRecord;
use crate::nav::ProfileKind;
use crate::search;

#[component]
pub fn CaseList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (cases, _set_cases) = signal(data::sample_cases());
    let (search_term, set_search_term) = signal(String::new());

    let filtered = move || search::filter(&cases.get(), &search_term.get());

    view! {
        <div class="section">
            <div class="section-header">
                <div>
                    <h2>"Cases"</h2>
                    <p class="muted">"Manage client cases and interventions"</p>
                </div>
                <button
                    class="btn btn-primary"
                    on:click=move |_| ctx.toast_success("New Case form would open here")
                >
                    "+ New Case"
                </button>
            </div>

            <div class="stats-grid">
                <StatsCard title="Open Cases" value="34" />
                <StatsCard title="Urgent Cases" value="2" />
                <StatsCard title="Due This Week" value="8" />
                <StatsCard title="Assigned Volunteers" value="15" />
            </div>

            <div class="card">
                <div class="card-header">
                    <h3>"Active Cases"</h3>
                    <div class="list-toolbar">
                        <input
                            type="text"
                            class="search-input"
                            placeholder="Search cases..."
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
                            <th>"Case ID"</th>
                            <th>"Case Details"</th>
                            <th>"Assignment"</th>
                            <th>"Status"</th>
                            <th>"Priority"</th>
                            <th>"Last Update"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=filtered
                            key=|case| case.id.clone()
                            children=move |case: CaseRecord| {
                                let id = case.id.clone();
                                let row_id = case.id.clone();
                                view! {
                                    <tr
                                        class="clickable-row"
                                        on:click=move |_| ctx.open_profile(ProfileKind::Case, row_id.clone())
                                    >
                                        <td><span class="mono">{case.id.clone()}</span></td>
                                        <td>
                                            <p class="cell-title">{case.title.clone()}</p>
                                            <p class="muted">{format!("Client: {}", case.client_name)}</p>
                                            {case
                                                .case_types
                                                .iter()
                                                .map(|case_type| view! {
                                                    <span class="badge badge-outline">{case_type.clone()}</span>
                                                })
                                                .collect_view()}
                                        </td>
                                        <td>
                                            <p>{format!("Staff: {}", case.assigned_staff)}</p>
                                            {case.assigned_volunteer.clone().map(|volunteer| view! {
                                                <p class="muted">{format!("Vol: {volunteer}")}</p>
                                            })}
                                            <p class="muted">{format!("{} notes", case.notes_count)}</p>
                                        </td>
                                        <td>
                                            <span class=case.status.badge_class()>{case.status.label()}</span>
                                        </td>
                                        <td>
                                            <span class=case.priority.badge_class()>{case.priority.label()}</span>
                                        </td>
                                        <td>
                                            <p>{format_date(&case.last_update)}</p>
                                            <p class="muted">{case.next_action.clone()}</p>
                                        </td>
                                        <td>
                                            <ActionMenu actions=vec![
                                                MenuAction::success("View Case", format!("Viewing case {id}")),
                                                MenuAction::info("Add Note", format!("Adding note to case {id}")),
                                                MenuAction::info("Assign Volunteer", format!("Assigning volunteer to case {id}")),
                                                MenuAction::success("Close Case", format!("Closing case {id}")),
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
