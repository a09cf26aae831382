//! UI Components
//!
//! One file per screen plus the shared widgets.

mod header;
mod sidebar;
mod stats_card;
mod action_menu;
mod toast_host;
mod dashboard;
mod client_list;
mod volunteer_list;
mod case_list;
mod rapid_response_list;
mod safeguarding_list;
mod advocacy_list;
mod reports;
mod settings;
mod client_profile;
mod volunteer_profile;
mod case_profile;

pub use header::Header;
pub use sidebar::Sidebar;
pub use stats_card::{ChangeType, StatsCard};
pub use action_menu::{ActionMenu, MenuAction};
pub use toast_host::ToastHost;
pub use dashboard::DashboardOverview;
pub use client_list::ClientList;
pub use volunteer_list::VolunteerList;
pub use case_list::CaseList;
pub use rapid_response_list::RapidResponseList;
pub use safeguarding_list::SafeguardingList;
pub use advocacy_list::AdvocacyList;
pub use reports::ReportsDashboard;
pub use settings::SettingsPanel;
pub use client_profile::ClientProfile;
pub use volunteer_profile::VolunteerProfile;
pub use case_profile::CaseProfile;
