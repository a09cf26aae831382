//! Volunteer Profile Component
//!
//! Detail view for one volunteer: skills, availability, activity log
//! and achievements. Unknown identifiers render the not-found
//! placeholder.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::data;
use crate::format::format_date;

#[component]
pub fn VolunteerProfile(id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let Some(volunteer) = data::volunteer_detail(&id) else {
        web_sys::console::warn_1(&format!("[VolunteerProfile] no volunteer with id {id}").into());
        return view! {
            <div class="section">
                <button class="btn btn-ghost" on:click=move |_| ctx.go_back()>"← Back"</button>
                <p>"Volunteer not found"</p>
            </div>
        }
        .into_any();
    };

    view! {
        <div class="section">
            <div class="section-header">
                <button class="btn btn-ghost" on:click=move |_| ctx.go_back()>"← Back"</button>
                <div>
                    <h2>"Volunteer Profile"</h2>
                    <p class="muted">"Comprehensive volunteer information and activity history"</p>
                </div>
            </div>

            <div class="profile-layout">
                <div class="card profile-main">
                    <div class="card-header">
                        <div>
                            <h3>
                                {volunteer.name.clone()}
                                <span class="rating">{format!("★ {}", volunteer.rating)}</span>
                            </h3>
                            <span class=volunteer.status.badge_class()>{volunteer.status.label()}</span>
                        </div>
                    </div>

                    <div class="profile-section">
                        <h4>"Contact Information"</h4>
                        <p>{volunteer.phone.clone()}</p>
                        <p>{volunteer.email.clone()}</p>
                        <p>{volunteer.address.clone()}</p>
                    </div>

                    <div class="profile-section">
                        <h4>"Skills"</h4>
                        {volunteer
                            .skills
                            .iter()
                            .map(|skill| view! { <span class="badge badge-secondary">{skill.clone()}</span> })
                            .collect_view()}
                    </div>

                    <div class="profile-section">
                        <h4>"Languages"</h4>
                        {volunteer
                            .languages
                            .iter()
                            .map(|language| view! { <span class="badge badge-outline">{language.clone()}</span> })
                            .collect_view()}
                    </div>

                    <div class="profile-section">
                        <h4>"Availability"</h4>
                        {volunteer
                            .availability
                            .iter()
                            .map(|slot| view! { <span class="badge badge-secondary">{slot.clone()}</span> })
                            .collect_view()}
                    </div>

                    <div class="profile-section">
                        <h4>"Qualifications"</h4>
                        {volunteer
                            .qualifications
                            .iter()
                            .map(|qualification| view! {
                                <span class="badge badge-outline">{qualification.clone()}</span>
                            })
                            .collect_view()}
                    </div>

                    <div class="profile-section">
                        <h4>"Notes"</h4>
                        <p class="muted">{volunteer.notes.clone()}</p>
                    </div>
                </div>

                <div class="profile-side">
                    <div class="card">
                        <div class="card-header">
                            <h3>"Statistics"</h3>
                        </div>
                        <div class="profile-section">
                            <p class="muted">"Total Hours"</p>
                            <p>{volunteer.total_hours}</p>
                            <p class="muted">"Current Cases"</p>
                            <p>{volunteer.current_cases}</p>
                            <p class="muted">"Join Date"</p>
                            <p>{format_date(&volunteer.join_date)}</p>
                            <p class="muted">"DBS Expiry"</p>
                            <p>{format_date(&volunteer.dbs_expiry)}</p>
                        </div>
                    </div>

                    <div class="card">
                        <div class="card-header">
                            <h3>"Recent Activities"</h3>
                        </div>
                        <div class="feed">
                            {volunteer
                                .recent_activities
                                .iter()
                                .map(|entry| view! {
                                    <div class="feed-item static">
                                        <div class="feed-body">
                                            <p class="cell-title">{entry.activity.clone()}</p>
                                            <p class="muted">
                                                {format!("{} · {}", format_date(&entry.date), entry.duration)}
                                            </p>
                                        </div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="card">
                        <div class="card-header">
                            <h3>"Achievements"</h3>
                        </div>
                        <div class="feed">
                            {volunteer
                                .achievements
                                .iter()
                                .map(|achievement| view! {
                                    <div class="feed-item static">
                                        <div class="feed-body">
                                            <p class="cell-title accent">{achievement.title.clone()}</p>
                                            <p class="muted">{achievement.description.clone()}</p>
                                            <p class="muted">{format_date(&achievement.date)}</p>
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
