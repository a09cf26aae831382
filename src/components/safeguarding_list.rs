//! Safeguarding List Component
//!
//! Restricted-access incident log; searchable by client name or
//! incident type. The access banner is informational only.

use leptos::prelude::*;

use crate::components::{ActionMenu, MenuAction, StatsCard};
use crate::context::AppContext;
use crate::data;
use crate::format::format_date;
use crate::models::SafeguardingIncident;
use crate::search;

#[component]
pub fn SafeguardingList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (incidents, _set_incidents) = signal(data::sample_incidents());
    let (search_term, set_search_term) = signal(String::new());

    let filtered = move || search::filter(&incidents.get(), &search_term.get());

    view! {
        <div class="section">
            <div class="section-header">
                <div>
                    <h2>"🛡 Safeguarding"</h2>
                    <p class="muted">"Confidential safeguarding incident management"</p>
                </div>
                <button
                    class="btn btn-primary"
                    on:click=move |_| ctx.toast_success("Report Incident form would open here")
                >
                    "+ Report Incident"
                </button>
            </div>

            <div class="alert alert-warning">
                <strong>"Restricted Access: "</strong>
                "This section contains sensitive safeguarding information. Access is logged \
                 and restricted to authorized personnel only. All data is encrypted and GDPR \
                 compliant."
            </div>

            <div class="stats-grid">
                <StatsCard title="Active Incidents" value="3" />
                <StatsCard title="Critical Priority" value="1" />
                <StatsCard title="Under Review" value="2" />
                <StatsCard title="This Year" value="15" />
            </div>

            <div class="card">
                <div class="card-header">
                    <h3>"Safeguarding Incidents"</h3>
                    <div class="list-toolbar">
                        <input
                            type="text"
                            class="search-input"
                            placeholder="Search incidents..."
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
                            <th>"Incident ID"</th>
                            <th>"Client & Type"</th>
                            <th>"Severity"</th>
                            <th>"Status"</th>
                            <th>"Assigned To"</th>
                            <th>"Review Date"</th>
                            <th>"Referral"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=filtered
                            key=|incident| incident.id.clone()
                            children=move |incident: SafeguardingIncident| {
                                let id = incident.id.clone();
                                view! {
                                    <tr class="flagged-row">
                                        <td><span class="mono warning">{incident.id.clone()}</span></td>
                                        <td>
                                            <p class="cell-title">{incident.client_name.clone()}</p>
                                            <p class="warning">{incident.incident_type.clone()}</p>
                                            <p class="muted">
                                                {format!("Reported: {}", format_date(&incident.reported_date))}
                                            </p>
                                            <p class="muted">{format!("By: {}", incident.reported_by)}</p>
                                        </td>
                                        <td>
                                            <span class=incident.severity.badge_class()>{incident.severity.label()}</span>
                                        </td>
                                        <td>
                                            <span class=incident.status.badge_class()>{incident.status.label()}</span>
                                        </td>
                                        <td>{incident.assigned_to.clone()}</td>
                                        <td>
                                            {incident.review_date.clone().map(|review| format_date(&review))}
                                        </td>
                                        <td>
                                            {if incident.referral_made {
                                                view! { <span class="badge badge-default">"Made"</span> }.into_any()
                                            } else {
                                                view! { <span class="badge badge-destructive">"Pending"</span> }.into_any()
                                            }}
                                        </td>
                                        <td>
                                            <ActionMenu heading="Restricted Actions" actions=vec![
                                                MenuAction::success("View Details", format!("Viewing restricted details for {id}")),
                                                MenuAction::info("Update Status", format!("Updating status for {id}")),
                                                MenuAction::info("Add Notes", format!("Adding notes to {id}")),
                                                MenuAction::success("Make Referral", format!("Making referral for {id}")),
                                                MenuAction::info("Generate Report", format!("Generating report for {id}")),
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
