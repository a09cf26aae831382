//! Navigation State Machine
//!
//! The active view is either a top-level section or a single profile.
//! Opening a profile remembers the section it was opened from so Back
//! returns there rather than falling through to the dashboard.

/// Top-level navigation destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Clients,
    Volunteers,
    Cases,
    RapidResponse,
    Safeguarding,
    Advocacy,
    Reports,
    Settings,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Clients => "Service Users",
            Section::Volunteers => "Volunteers",
            Section::Cases => "Cases",
            Section::RapidResponse => "Rapid Response",
            Section::Safeguarding => "Safeguarding",
            Section::Advocacy => "Advocacy",
            Section::Reports => "Reports",
            Section::Settings => "Settings",
        }
    }
}

/// Entity types that have a profile view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    Client,
    Volunteer,
    Case,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavState {
    Section(Section),
    Profile {
        kind: ProfileKind,
        id: String,
        /// Section to return to on Back
        origin: Section,
    },
}

impl Default for NavState {
    fn default() -> Self {
        NavState::Section(Section::Dashboard)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    SelectSection(Section),
    OpenProfile(ProfileKind, String),
    GoBack,
}

impl NavState {
    /// Pure transition function: (state, event) -> next state
    pub fn apply(self, event: NavEvent) -> NavState {
        match event {
            NavEvent::SelectSection(section) => NavState::Section(section),
            NavEvent::OpenProfile(kind, id) => {
                let origin = self.active_section();
                NavState::Profile { kind, id, origin }
            }
            NavEvent::GoBack => match self {
                NavState::Profile { origin, .. } => NavState::Section(origin),
                section => section,
            },
        }
    }

    /// Section to highlight in the sidebar; for a profile this is the
    /// section it was opened from.
    pub fn active_section(&self) -> Section {
        match self {
            NavState::Section(section) => *section,
            NavState::Profile { origin, .. } => *origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_dashboard() {
        assert_eq!(NavState::default(), NavState::Section(Section::Dashboard));
    }

    #[test]
    fn selecting_a_section_clears_any_open_profile() {
        let state = NavState::default()
            .apply(NavEvent::OpenProfile(ProfileKind::Client, "1".into()))
            .apply(NavEvent::SelectSection(Section::Reports));
        assert_eq!(state, NavState::Section(Section::Reports));
    }

    #[test]
    fn back_returns_to_the_originating_section() {
        let state = NavState::Section(Section::Cases)
            .apply(NavEvent::OpenProfile(ProfileKind::Case, "C001".into()));
        assert_eq!(state.active_section(), Section::Cases);
        assert_eq!(state.apply(NavEvent::GoBack), NavState::Section(Section::Cases));
    }

    #[test]
    fn profile_to_profile_keeps_the_first_origin() {
        let state = NavState::Section(Section::Clients)
            .apply(NavEvent::OpenProfile(ProfileKind::Client, "1".into()))
            .apply(NavEvent::OpenProfile(ProfileKind::Case, "C001".into()));
        assert_eq!(state.apply(NavEvent::GoBack), NavState::Section(Section::Clients));
    }

    #[test]
    fn back_on_a_section_is_a_no_op() {
        let state = NavState::Section(Section::Advocacy).apply(NavEvent::GoBack);
        assert_eq!(state, NavState::Section(Section::Advocacy));
    }

    #[test]
    fn opening_a_profile_overrides_the_section_view() {
        let state = NavState::Section(Section::Volunteers)
            .apply(NavEvent::OpenProfile(ProfileKind::Volunteer, "2".into()));
        assert_eq!(
            state,
            NavState::Profile {
                kind: ProfileKind::Volunteer,
                id: "2".into(),
                origin: Section::Volunteers,
            }
        );
    }
}
