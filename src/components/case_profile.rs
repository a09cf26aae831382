//! Case Profile Component
//!
//! Detail view for one case: objectives, progress timeline and planned
//! next actions. Unknown identifiers render the not-found placeholder.
//! Client and volunteer names link through to their own profiles.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::data;
use crate::format::format_date;
use crate::nav::ProfileKind;

#[component]
pub fn CaseProfile(id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let Some(case) = data::case_detail(&id) else {
        web_sys::console::warn_1(&format!("[CaseProfile] no case with id {id}").into());
        return view! {
            <div class="section">
                <button class="btn btn-ghost" on:click=move |_| ctx.go_back()>"← Back"</button>
                <p>"Case not found"</p>
            </div>
        }
        .into_any();
    };

    let client_id = case.client_id.clone();
    let volunteer_id = case.volunteer_id.clone();

    view! {
        <div class="section">
            <div class="section-header">
                <button class="btn btn-ghost" on:click=move |_| ctx.go_back()>"← Back"</button>
                <div>
                    <h2>"Case Profile"</h2>
                    <p class="muted">"Case details, progress notes and planned actions"</p>
                </div>
            </div>

            <div class="profile-layout">
                <div class="card profile-main">
                    <div class="card-header">
                        <div>
                            <p class="mono">{case.id.clone()}</p>
                            <h3>{case.title.clone()}</h3>
                            <span class=case.status.badge_class()>{case.status.label()}</span>
                            <span class=case.priority.badge_class()>{case.priority.label()}</span>
                        </div>
                    </div>

                    <div class="profile-section">
                        <h4>"Description"</h4>
                        <p class="muted">{case.description.clone()}</p>
                    </div>

                    <div class="profile-section">
                        <h4>"Objectives"</h4>
                        <ul>
                            {case
                                .objectives
                                .iter()
                                .map(|objective| view! { <li>{objective.clone()}</li> })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="profile-section">
                        <h4>"Progress Notes"</h4>
                        <div class="feed">
                            {case
                                .progress
                                .iter()
                                .map(|note| view! {
                                    <div class="feed-item static">
                                        <div class="feed-body">
                                            <p class="muted">
                                                {format!("{} · {}", format_date(&note.date), note.author)}
                                            </p>
                                            <p>{note.note.clone()}</p>
                                        </div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="profile-side">
                    <div class="card">
                        <div class="card-header">
                            <h3>"People"</h3>
                        </div>
                        <div class="profile-section">
                            <p class="muted">"Client"</p>
                            <button
                                class="link-btn"
                                on:click=move |_| ctx.open_profile(ProfileKind::Client, client_id.clone())
                            >
                                {case.client_name.clone()}
                            </button>
                            <p class="muted">"Volunteer"</p>
                            <button
                                class="link-btn"
                                on:click=move |_| ctx.open_profile(ProfileKind::Volunteer, volunteer_id.clone())
                            >
                                {case.volunteer_name.clone()}
                            </button>
                            <p class="muted">"Created"</p>
                            <p>{format_date(&case.created)}</p>
                            <p class="muted">"Last Update"</p>
                            <p>{format_date(&case.last_update)}</p>
                        </div>
                    </div>

                    <div class="card">
                        <div class="card-header">
                            <h3>"Next Actions"</h3>
                        </div>
                        <div class="feed">
                            {case
                                .next_actions
                                .iter()
                                .map(|action| view! {
                                    <div class="feed-item static">
                                        <div class="feed-body">
                                            <p class="cell-title">{action.action.clone()}</p>
                                            <p class="muted">
                                                {format!("Due: {}", format_date(&action.due))}
                                            </p>
                                            <p class="accent">{action.assignee.clone()}</p>
                                        </div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
    .into_any()
}
