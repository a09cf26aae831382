//! Client Profile Component
//!
//! Detail view for one service user, reached by identifier lookup.
//! Unknown identifiers render the not-found placeholder.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::data;
use crate::format::format_date;

#[component]
pub fn ClientProfile(id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let Some(detail) = data::client_detail(&id) else {
        web_sys::console::warn_1(&format!("[ClientProfile] no client with id {id}").into());
        return view! {
            <div class="section">
                <button class="btn btn-ghost" on:click=move |_| ctx.go_back()>"← Back"</button>
                <p>"Client not found"</p>
            </div>
        }
        .into_any();
    };

    let client = detail.client.clone();

    view! {
        <div class="section">
            <div class="section-header">
                <button class="btn btn-ghost" on:click=move |_| ctx.go_back()>"← Back"</button>
                <div>
                    <h2>"Client Profile"</h2>
                    <p class="muted">"Comprehensive client information and case history"</p>
                </div>
            </div>

            <div class="profile-layout">
                <div class="card profile-main">
                    <div class="card-header">
                        <div>
                            <h3>
                                {client.name.clone()}
                                {client.safeguarding_flag.then(|| view! {
                                    <span class="safeguarding-flag" title="Safeguarding flag">"🛡"</span>
                                })}
                            </h3>
                            <span class=client.status.badge_class()>{client.status.label()}</span>
                        </div>
                    </div>

                    <div class="profile-section">
                        <h4>"Contact Information"</h4>
                        <p>{client.phone.clone()}</p>
                        {client.email.clone().map(|email| view! { <p>{email}</p> })}
                        <p>{client.address.clone()}</p>
                        <p>{format!("Emergency: {}", detail.emergency_contact)}</p>
                    </div>

                    <div class="profile-section">
                        <h4>"Support Types"</h4>
                        {client
                            .support_types
                            .iter()
                            .map(|support| view! {
                                <span class="badge badge-secondary">{support.clone()}</span>
                            })
                            .collect_view()}
                    </div>

                    <div class="profile-section">
                        <h4>"Health Conditions"</h4>
                        {detail
                            .health_conditions
                            .iter()
                            .map(|condition| view! {
                                <span class="badge badge-outline">{condition.clone()}</span>
                            })
                            .collect_view()}
                    </div>

                    <div class="profile-section">
                        <h4>"Preferences & Requirements"</h4>
                        {detail
                            .preferences
                            .iter()
                            .map(|preference| view! {
                                <span class="badge badge-secondary">{preference.clone()}</span>
                            })
                            .collect_view()}
                    </div>

                    <div class="profile-section">
                        <h4>"Notes"</h4>
                        <p class="muted">{detail.notes.clone()}</p>
                    </div>
                </div>

                <div class="profile-side">
                    <div class="card">
                        <div class="card-header">
                            <h3>"Quick Info"</h3>
                        </div>
                        <div class="profile-section">
                            <p class="muted">"Age"</p>
                            <p>{format!("{} years", client.age)}</p>
                            <p class="muted">"Assigned Staff"</p>
                            <p>{client.assigned_staff.clone()}</p>
                            <p class="muted">"Join Date"</p>
                            <p>{format_date(&detail.join_date)}</p>
                            <p class="muted">"Last Contact"</p>
                            <p>{format_date(&client.last_contact)}</p>
                        </div>
                    </div>

                    <div class="card">
                        <div class="card-header">
                            <h3>"Recent Cases"</h3>
                        </div>
                        <div class="feed">
                            {detail
                                .recent_cases
                                .iter()
                                .map(|case| view! {
                                    <div class="feed-item static">
                                        <div class="feed-body">
                                            <p class="cell-title">{case.title.clone()}</p>
                                            <p class="muted">
                                                {format!("Created: {}", format_date(&case.created))}
                                            </p>
                                        </div>
                                        <span class=case.status.badge_class()>{case.status.label()}</span>
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
