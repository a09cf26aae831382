//! Reports Dashboard Component
//!
//! KPI tiles, the report catalogue and the upcoming funder/regulator
//! report schedule. Generation and download are acknowledgement-only.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::format::format_date;

struct ReportCard {
    title: &'static str,
    description: &'static str,
    last_generated: &'static str,
    format: &'static str,
    category: &'static str,
}

const REPORT_CARDS: &[ReportCard] = &[
    ReportCard {
        title: "Client Demographics",
        description: "Age, location, and support type breakdown",
        last_generated: "2024-01-15",
        format: "PDF & Excel",
        category: "Operational",
    },
    ReportCard {
        title: "Volunteer Impact",
        description: "Hours contributed, case assignments, training status",
        last_generated: "2024-01-14",
        format: "PDF",
        category: "Volunteer",
    },
    ReportCard {
        title: "Case Outcomes",
        description: "Resolution rates, intervention effectiveness",
        last_generated: "2024-01-13",
        format: "Excel",
        category: "Impact",
    },
    ReportCard {
        title: "Rapid Response Metrics",
        description: "Response times, completion rates, follow-up analysis",
        last_generated: "2024-01-12",
        format: "PDF",
        category: "Operational",
    },
    ReportCard {
        title: "Advocacy Success Rates",
        description: "Outcomes by organization, resolution timeframes",
        last_generated: "2024-01-11",
        format: "PDF & Excel",
        category: "Impact",
    },
    ReportCard {
        title: "Financial Impact Report",
        description: "Cost per intervention, value for money analysis",
        last_generated: "2024-01-10",
        format: "Excel",
        category: "Financial",
    },
];

struct KpiMetric {
    label: &'static str,
    value: &'static str,
    change: &'static str,
    period: &'static str,
}

const KPI_METRICS: &[KpiMetric] = &[
    KpiMetric { label: "Service Users Supported", value: "247", change: "+12%", period: "vs last month" },
    KpiMetric { label: "Volunteer Hours", value: "1,340", change: "+8%", period: "this month" },
    KpiMetric { label: "Cases Resolved", value: "89", change: "+15%", period: "this quarter" },
    KpiMetric { label: "Advocacy Success Rate", value: "78%", change: "+5%", period: "vs last quarter" },
    KpiMetric { label: "Response Time (avg)", value: "15 mins", change: "-3 mins", period: "vs last month" },
    KpiMetric { label: "Client Satisfaction", value: "4.8/5", change: "+0.2", period: "vs last quarter" },
];

struct UpcomingReport {
    name: &'static str,
    due: &'static str,
    recipient: &'static str,
}

const UPCOMING_REPORTS: &[UpcomingReport] = &[
    UpcomingReport { name: "Monthly Funder Report", due: "2024-01-20", recipient: "NHS Greater Manchester" },
    UpcomingReport { name: "Quarterly Impact Assessment", due: "2024-01-25", recipient: "Local Authority" },
    UpcomingReport { name: "Volunteer Training Report", due: "2024-01-30", recipient: "Internal Management" },
    UpcomingReport { name: "Safeguarding Annual Review", due: "2024-02-05", recipient: "Charity Commission" },
];

#[component]
pub fn ReportsDashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (period, set_period) = signal("current-month".to_string());

    view! {
        <div class="section">
            <div class="section-header">
                <div>
                    <h2>"Reports & Analytics"</h2>
                    <p class="muted">"Generate reports for funders, regulators, and internal use"</p>
                </div>
                <div class="list-toolbar">
                    <select
                        class="select-input"
                        on:change=move |ev| set_period.set(event_target_value(&ev))
                        prop:value=move || period.get()
                    >
                        <option value="current-month">"Current Month"</option>
                        <option value="last-month">"Last Month"</option>
                        <option value="quarter">"This Quarter"</option>
                        <option value="year">"This Year"</option>
                    </select>
                    <button
                        class="btn btn-outline"
                        on:click=move |_| ctx.toast_info("Filter options would open here")
                    >
                        "Filters"
                    </button>
                </div>
            </div>

            <div class="kpi-grid">
                {KPI_METRICS
                    .iter()
                    .map(|metric| view! {
                        <div class="card kpi-card">
                            <p class="muted">{metric.label}</p>
                            <p class="stats-value">{metric.value}</p>
                            <p class="muted">{format!("{} {}", metric.change, metric.period)}</p>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="card">
                <div class="card-header">
                    <h3>"Available Reports"</h3>
                </div>
                <div class="report-grid">
                    {REPORT_CARDS
                        .iter()
                        .map(|report| {
                            let title = report.title;
                            view! {
                                <div class="report-card">
                                    <div class="report-card-header">
                                        <h4>{report.title}</h4>
                                        <span class="badge badge-outline">{report.category}</span>
                                    </div>
                                    <p class="muted">{report.description}</p>
                                    <p class="muted">
                                        {format!(
                                            "Last generated: {} · {}",
                                            format_date(report.last_generated),
                                            report.format,
                                        )}
                                    </p>
                                    <div class="report-card-actions">
                                        <button
                                            class="btn btn-primary"
                                            on:click=move |_| ctx.toast_success(format!("Generating {title} report"))
                                        >
                                            "Generate"
                                        </button>
                                        <button
                                            class="btn btn-outline"
                                            on:click=move |_| ctx.toast_info(format!("Downloading last {title} report"))
                                        >
                                            "Download"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h3>"Upcoming Reports"</h3>
                </div>
                <div class="feed">
                    {UPCOMING_REPORTS
                        .iter()
                        .map(|report| view! {
                            <div class="feed-item static">
                                <div class="feed-body">
                                    <p class="cell-title">{report.name}</p>
                                    <p class="muted">{format!("Recipient: {}", report.recipient)}</p>
                                </div>
                                <span class="muted">{format!("Due {}", format_date(report.due))}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
