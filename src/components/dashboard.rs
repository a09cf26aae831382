//! Dashboard Overview Component
//!
//! Landing view: headline stats plus recent-activity and upcoming-task
//! feeds whose rows open the linked profile.

use leptos::prelude::*;

use crate::components::{ChangeType, StatsCard};
use crate::context::AppContext;
use crate::data::{RECENT_ACTIVITY, UPCOMING_TASKS};

#[component]
pub fn DashboardOverview() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="section">
            <div>
                <h2>"Welcome back, Aisha"</h2>
                <p class="muted">"Here's what's happening at Eden Care today."</p>
            </div>

            <div class="stats-grid">
                <StatsCard
                    title="Active Service Users"
                    value="247"
                    change="+12 this month"
                    change_type=ChangeType::Positive
                />
                <StatsCard
                    title="Active Volunteers"
                    value="86"
                    change="+3 this month"
                    change_type=ChangeType::Positive
                />
                <StatsCard title="Open Cases" value="34" change="2 urgent" />
                <StatsCard title="Rapid Responses" value="8" change="This week" />
            </div>

            <div class="dashboard-columns">
                <div class="card">
                    <div class="card-header">
                        <h3>"Recent Activity"</h3>
                    </div>
                    <div class="feed">
                        {RECENT_ACTIVITY
                            .iter()
                            .map(|item| {
                                let kind = item.link_kind;
                                let id = item.link_id;
                                view! {
                                    <div
                                        class="feed-item"
                                        on:click=move |_| ctx.open_profile(kind, id)
                                    >
                                        <div class="feed-body">
                                            <p class="cell-title">{item.description}</p>
                                            <p class="muted">{item.time}</p>
                                        </div>
                                        <span class=item.priority.badge_class()>
                                            {item.priority.label()}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()}
                        <button
                            class="btn btn-outline full-width"
                            on:click=move |_| ctx.toast_info("Activity log would open here")
                        >
                            "View All Activity"
                        </button>
                    </div>
                </div>

                <div class="card">
                    <div class="card-header">
                        <h3>"Upcoming Tasks"</h3>
                    </div>
                    <div class="feed">
                        {UPCOMING_TASKS
                            .iter()
                            .map(|task| {
                                let kind = task.link_kind;
                                let id = task.link_id;
                                view! {
                                    <div
                                        class="feed-item"
                                        on:click=move |_| ctx.open_profile(kind, id)
                                    >
                                        <div class="feed-body">
                                            <p class="cell-title">{task.task}</p>
                                            <p class="muted">{format!("Due: {}", task.due)}</p>
                                            <p class="accent">{format!("Assigned to: {}", task.assignee)}</p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                        <button
                            class="btn btn-outline full-width"
                            on:click=move |_| ctx.toast_info("Task list would open here")
                        >
                            "View All Tasks"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
