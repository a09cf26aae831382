//! Volunteer List Component
//!
//! Roster with DBS and training state; searchable by name or any skill.

use leptos::prelude::*;

use crate::components::{ActionMenu, MenuAction, StatsCard};
use crate::context::AppContext;
use crate::data;
use crate::format::format_date;
use crate::models::Volunteer;
use crate::nav::ProfileKind;
use crate::search;

/// How many skill badges a row shows before collapsing to "+N"
const SKILL_BADGE_LIMIT: usize = 2;

#[component]
pub fn VolunteerList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (volunteers, _set_volunteers) = signal(data::sample_volunteers());
    let (search_term, set_search_term) = signal(String::new());

    let filtered = move || search::filter(&volunteers.get(), &search_term.get());

    view! {
        <div class="section">
            <div class="section-header">
                <div>
                    <h2>"Volunteers"</h2>
                    <p class="muted">"Manage volunteer assignments and training"</p>
                </div>
                <button
                    class="btn btn-primary"
                    on:click=move |_| ctx.toast_success("Add Volunteer form would open here")
                >
                    "+ Add Volunteer"
                </button>
            </div>

            <div class="stats-grid">
                <StatsCard title="Active Volunteers" value="86" />
                <StatsCard title="DBS Current" value="78" />
                <StatsCard title="Pending Training" value="5" />
                <StatsCard title="Hours This Month" value="342" />
            </div>

            <div class="card">
                <div class="card-header">
                    <h3>"Volunteer Directory"</h3>
                    <div class="list-toolbar">
                        <input
                            type="text"
                            class="search-input"
                            placeholder="Search volunteers..."
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
                            <th>"Volunteer"</th>
                            <th>"Skills"</th>
                            <th>"DBS Status"</th>
                            <th>"Training"</th>
                            <th>"Cases"</th>
                            <th>"Hours/Month"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=filtered
                            key=|volunteer| volunteer.id.clone()
                            children=move |volunteer: Volunteer| {
                                let id = volunteer.id.clone();
                                let name = volunteer.name.clone();
                                let extra_skills = volunteer.skills.len().saturating_sub(SKILL_BADGE_LIMIT);
                                view! {
                                    <tr
                                        class="clickable-row"
                                        on:click=move |_| ctx.open_profile(ProfileKind::Volunteer, id.clone())
                                    >
                                        <td>
                                            <p class="cell-title">{volunteer.name.clone()}</p>
                                            <p class="muted">{volunteer.email.clone()}</p>
                                            <p class="muted">{volunteer.location.clone()}</p>
                                        </td>
                                        <td>
                                            {volunteer
                                                .skills
                                                .iter()
                                                .take(SKILL_BADGE_LIMIT)
                                                .map(|skill| view! {
                                                    <span class="badge badge-secondary">{skill.clone()}</span>
                                                })
                                                .collect_view()}
                                            {(extra_skills > 0).then(|| view! {
                                                <span class="badge badge-outline">{format!("+{extra_skills}")}</span>
                                            })}
                                        </td>
                                        <td>
                                            <span class=volunteer.dbs_status.badge_class()>
                                                {volunteer.dbs_status.label()}
                                            </span>
                                            <p class="muted">
                                                {format!("Expires: {}", format_date(&volunteer.dbs_expiry))}
                                            </p>
                                        </td>
                                        <td>
                                            {if volunteer.training_complete {
                                                view! { <span class="badge badge-default">"Complete"</span> }.into_any()
                                            } else {
                                                view! { <span class="badge badge-destructive">"Pending"</span> }.into_any()
                                            }}
                                        </td>
                                        <td>{volunteer.assigned_cases}</td>
                                        <td>{format!("{}h", volunteer.hours_this_month)}</td>
                                        <td>
                                            <ActionMenu actions=vec![
                                                MenuAction::success("View Profile", format!("Viewing {name}'s profile")),
                                                MenuAction::info("Assign Case", format!("Assigning case to {name}")),
                                                MenuAction::info("Update Training", format!("Updating training for {name}")),
                                                MenuAction::success("Contact Volunteer", format!("Contacting {name}")),
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
