//! Eden Care CRM App
//!
//! Root component: provides the store and context, renders the layout
//! shell and switches the content area on the navigation state.

use leptos::prelude::*;

use crate::components::{
    AdvocacyList, CaseList, CaseProfile, ClientList, ClientProfile, DashboardOverview, Header,
    RapidResponseList, ReportsDashboard, SafeguardingList, SettingsPanel, Sidebar, ToastHost,
    VolunteerList, VolunteerProfile,
};
use crate::context::AppContext;
use crate::nav::{NavState, ProfileKind, Section};
use crate::store::{AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store = AppStore::new(AppState::default());
    provide_context(store);
    provide_context(AppContext::new(store));

    let (sidebar_open, set_sidebar_open) = signal(false);

    let content = move || match store.route().get() {
        NavState::Section(Section::Dashboard) => view! { <DashboardOverview /> }.into_any(),
        NavState::Section(Section::Clients) => view! { <ClientList /> }.into_any(),
        NavState::Section(Section::Volunteers) => view! { <VolunteerList /> }.into_any(),
        NavState::Section(Section::Cases) => view! { <CaseList /> }.into_any(),
        NavState::Section(Section::RapidResponse) => view! { <RapidResponseList /> }.into_any(),
        NavState::Section(Section::Safeguarding) => view! { <SafeguardingList /> }.into_any(),
        NavState::Section(Section::Advocacy) => view! { <AdvocacyList /> }.into_any(),
        NavState::Section(Section::Reports) => view! { <ReportsDashboard /> }.into_any(),
        NavState::Section(Section::Settings) => view! { <SettingsPanel /> }.into_any(),
        NavState::Profile { kind: ProfileKind::Client, id, .. } => {
            view! { <ClientProfile id=id /> }.into_any()
        }
        NavState::Profile { kind: ProfileKind::Volunteer, id, .. } => {
            view! { <VolunteerProfile id=id /> }.into_any()
        }
        NavState::Profile { kind: ProfileKind::Case, id, .. } => {
            view! { <CaseProfile id=id /> }.into_any()
        }
    };

    view! {
        <div class="app-shell">
            <Header on_menu_toggle=move || set_sidebar_open.update(|open| *open = !*open) />
            <div class="app-body">
                <Sidebar is_open=sidebar_open set_is_open=set_sidebar_open />
                <main class="main-content">{content}</main>
            </div>
            <ToastHost />
        </div>
    }
}
