//! Stats Card Component
//!
//! Small headline-figure card used on the dashboard and section headers.

use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    Positive,
    Negative,
    Neutral,
}

impl ChangeType {
    fn class(self) -> &'static str {
        match self {
            ChangeType::Positive => "stats-change positive",
            ChangeType::Negative => "stats-change negative",
            ChangeType::Neutral => "stats-change neutral",
        }
    }
}

#[component]
pub fn StatsCard(
    title: &'static str,
    #[prop(into)] value: String,
    #[prop(optional, into)] change: Option<&'static str>,
    #[prop(optional, into)] change_type: Option<ChangeType>,
) -> impl IntoView {
    let change_class = change_type.unwrap_or(ChangeType::Neutral).class();
    view! {
        <div class="card stats-card">
            <p class="stats-title">{title}</p>
            <p class="stats-value">{value}</p>
            {change.map(|text| view! { <p class=change_class>{text}</p> })}
        </div>
    }
}
