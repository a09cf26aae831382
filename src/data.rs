//! Sample Data
//!
//! Fixed datasets seeded into each view at mount time, and the
//! identifier-keyed lookup tables behind the profile views. Nothing
//! here is ever mutated; row actions only raise toasts.

use crate::models::*;
use crate::nav::ProfileKind;

fn strs(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn sample_clients() -> Vec<Client> {
    vec![
        Client {
            id: "1".into(),
            name: "Fatima Hassan".into(),
            age: 78,
            address: "42 Oak Street, Manchester".into(),
            phone: "0161 234 5678".into(),
            email: Some("fatima.hassan@email.com".into()),
            status: ClientStatus::Active,
            support_types: strs(&["Befriending", "End-of-life"]),
            safeguarding_flag: false,
            last_contact: "2024-01-15".into(),
            assigned_staff: "Aisha Rahman".into(),
        },
        Client {
            id: "2".into(),
            name: "Ibrahim Ali".into(),
            age: 82,
            address: "15 Church Lane, Oldham".into(),
            phone: "0161 876 5432".into(),
            email: Some("ibrahim.ali@email.com".into()),
            status: ClientStatus::Active,
            support_types: strs(&["Advocacy", "Befriending"]),
            safeguarding_flag: true,
            last_contact: "2024-01-14".into(),
            assigned_staff: "Yusuf Ahmed".into(),
        },
        Client {
            id: "3".into(),
            name: "Khadijah Ahmed".into(),
            age: 71,
            address: "8 Victoria Road, Stockport".into(),
            phone: "0161 555 9876".into(),
            email: Some("khadijah.ahmed@email.com".into()),
            status: ClientStatus::Pending,
            support_types: strs(&["Rapid Response"]),
            safeguarding_flag: false,
            last_contact: "2024-01-13".into(),
            assigned_staff: "Aisha Rahman".into(),
        },
    ]
}

pub fn sample_volunteers() -> Vec<Volunteer> {
    vec![
        Volunteer {
            id: "1".into(),
            name: "John Smith".into(),
            email: "john.smith@email.com".into(),
            phone: "0161 234 5678".into(),
            skills: strs(&["Befriending", "Counselling", "Transport"]),
            dbs_status: DbsStatus::Current,
            dbs_expiry: "2025-06-15".into(),
            training_complete: true,
            availability: strs(&["Monday", "Wednesday", "Friday"]),
            assigned_cases: 3,
            hours_this_month: 24,
            location: "Manchester City Centre".into(),
            joined_date: "2023-03-15".into(),
        },
        Volunteer {
            id: "2".into(),
            name: "Emily Johnson".into(),
            email: "emily.j@email.com".into(),
            phone: "0161 876 5432".into(),
            skills: strs(&["End-of-life support", "Administrative", "Phone support"]),
            dbs_status: DbsStatus::Current,
            dbs_expiry: "2024-12-20".into(),
            training_complete: true,
            availability: strs(&["Tuesday", "Thursday", "Saturday"]),
            assigned_cases: 2,
            hours_this_month: 18,
            location: "Oldham".into(),
            joined_date: "2022-11-08".into(),
        },
        Volunteer {
            id: "3".into(),
            name: "David Wilson".into(),
            email: "david.wilson@email.com".into(),
            phone: "0161 555 9876".into(),
            skills: strs(&["Advocacy", "Benefits advice", "Housing support"]),
            dbs_status: DbsStatus::Pending,
            dbs_expiry: "2024-08-10".into(),
            training_complete: false,
            availability: strs(&["Monday", "Tuesday", "Thursday"]),
            assigned_cases: 0,
            hours_this_month: 0,
            location: "Stockport".into(),
            joined_date: "2024-01-10".into(),
        },
        Volunteer {
            id: "4".into(),
            name: "Sarah Matthews".into(),
            email: "sarah.m@email.com".into(),
            phone: "0161 999 1234".into(),
            skills: strs(&["Befriending", "Gardening", "Shopping assistance"]),
            dbs_status: DbsStatus::Expired,
            dbs_expiry: "2023-12-01".into(),
            training_complete: true,
            availability: strs(&["Wednesday", "Friday", "Sunday"]),
            assigned_cases: 1,
            hours_this_month: 8,
            location: "Manchester South".into(),
            joined_date: "2021-05-20".into(),
        },
    ]
}

pub fn sample_cases() -> Vec<CaseRecord> {
    vec![
        CaseRecord {
            id: "C001".into(),
            title: "End-of-life support and advocacy".into(),
            client_name: "Margaret Thompson".into(),
            assigned_staff: "Sarah Johnson".into(),
            assigned_volunteer: Some("John Smith".into()),
            status: CaseStatus::InProgress,
            priority: Priority::High,
            case_types: strs(&["End-of-life", "Advocacy"]),
            opened_date: "2024-01-10".into(),
            last_update: "2024-01-15".into(),
            next_action: "Follow-up call scheduled for tomorrow".into(),
            notes_count: 8,
        },
        CaseRecord {
            id: "C002".into(),
            title: "Housing advocacy and benefits support".into(),
            client_name: "Robert Davies".into(),
            assigned_staff: "Mark Wilson".into(),
            assigned_volunteer: None,
            status: CaseStatus::Urgent,
            priority: Priority::Urgent,
            case_types: strs(&["Advocacy", "Housing"]),
            opened_date: "2024-01-08".into(),
            last_update: "2024-01-14".into(),
            next_action: "Council meeting scheduled".into(),
            notes_count: 12,
        },
        CaseRecord {
            id: "C003".into(),
            title: "Befriending and isolation support".into(),
            client_name: "Elizabeth Morris".into(),
            assigned_staff: "Sarah Johnson".into(),
            assigned_volunteer: Some("Emily Johnson".into()),
            status: CaseStatus::Open,
            priority: Priority::Medium,
            case_types: strs(&["Befriending"]),
            opened_date: "2024-01-12".into(),
            last_update: "2024-01-13".into(),
            next_action: "Initial home visit planned".into(),
            notes_count: 3,
        },
        CaseRecord {
            id: "C004".into(),
            title: "Rapid response - funeral arrangements".into(),
            client_name: "James Wilson".into(),
            assigned_staff: "Mark Wilson".into(),
            assigned_volunteer: None,
            status: CaseStatus::Closed,
            priority: Priority::High,
            case_types: strs(&["End-of-life", "Rapid Response"]),
            opened_date: "2024-01-05".into(),
            last_update: "2024-01-11".into(),
            next_action: "Case closed - follow-up complete".into(),
            notes_count: 15,
        },
        CaseRecord {
            id: "C005".into(),
            title: "Mental health support and advocacy".into(),
            client_name: "Mary Foster".into(),
            assigned_staff: "Sarah Johnson".into(),
            assigned_volunteer: None,
            status: CaseStatus::InProgress,
            priority: Priority::High,
            case_types: strs(&["Advocacy", "Mental Health"]),
            opened_date: "2024-01-09".into(),
            last_update: "2024-01-14".into(),
            next_action: "GP liaison appointment".into(),
            notes_count: 6,
        },
    ]
}

pub fn sample_responses() -> Vec<RapidResponse> {
    vec![
        RapidResponse {
            id: "RR001".into(),
            client_name: "Margaret Thompson".into(),
            request_type: "Emergency Shopping".into(),
            description: "Client has no food, unable to leave home due to illness".into(),
            requested_by: "NHS District Nurse".into(),
            assigned_to: "John Smith (Volunteer)".into(),
            status: ResponseStatus::Completed,
            priority: Priority::High,
            request_time: "2024-01-15T09:30:00Z".into(),
            response_time: Some("2024-01-15T10:15:00Z".into()),
            completed_time: Some("2024-01-15T14:30:00Z".into()),
            outcome: Some("Essential groceries delivered, client stable".into()),
            follow_up_required: true,
        },
        RapidResponse {
            id: "RR002".into(),
            client_name: "Robert Davies".into(),
            request_type: "Hospital Transport".into(),
            description: "Urgent transport needed for medical appointment".into(),
            requested_by: "GP Surgery".into(),
            assigned_to: "Mark Wilson (Staff)".into(),
            status: ResponseStatus::InProgress,
            priority: Priority::Urgent,
            request_time: "2024-01-15T11:00:00Z".into(),
            response_time: Some("2024-01-15T11:15:00Z".into()),
            completed_time: None,
            outcome: None,
            follow_up_required: false,
        },
        RapidResponse {
            id: "RR003".into(),
            client_name: "Elizabeth Morris".into(),
            request_type: "Emotional Support".into(),
            description: "Client experiencing severe anxiety, needs immediate support".into(),
            requested_by: "Family Member".into(),
            assigned_to: "Sarah Johnson (Staff)".into(),
            status: ResponseStatus::Pending,
            priority: Priority::High,
            request_time: "2024-01-15T13:45:00Z".into(),
            response_time: None,
            completed_time: None,
            outcome: None,
            follow_up_required: true,
        },
        RapidResponse {
            id: "RR004".into(),
            client_name: "James Wilson".into(),
            request_type: "Medication Collection".into(),
            description: "Prescription collection from pharmacy".into(),
            requested_by: "Client".into(),
            assigned_to: "Emily Johnson (Volunteer)".into(),
            status: ResponseStatus::Completed,
            priority: Priority::Medium,
            request_time: "2024-01-14T16:20:00Z".into(),
            response_time: Some("2024-01-14T16:45:00Z".into()),
            completed_time: Some("2024-01-14T18:00:00Z".into()),
            outcome: Some("Medication collected and delivered safely".into()),
            follow_up_required: false,
        },
        RapidResponse {
            id: "RR005".into(),
            client_name: "Mary Foster".into(),
            request_type: "Welfare Check".into(),
            description: "Concerned neighbor reports no contact for 3 days".into(),
            requested_by: "Community Member".into(),
            assigned_to: "Mark Wilson (Staff)".into(),
            status: ResponseStatus::Completed,
            priority: Priority::Urgent,
            request_time: "2024-01-14T08:00:00Z".into(),
            response_time: Some("2024-01-14T08:30:00Z".into()),
            completed_time: Some("2024-01-14T10:00:00Z".into()),
            outcome: Some("Client safe, medical attention arranged".into()),
            follow_up_required: true,
        },
    ]
}

pub fn sample_incidents() -> Vec<SafeguardingIncident> {
    vec![
        SafeguardingIncident {
            id: "SG001".into(),
            client_name: "Robert Davies".into(),
            incident_type: "Financial Abuse".into(),
            severity: Severity::High,
            status: IncidentStatus::Investigating,
            reported_by: "Mark Wilson (Staff)".into(),
            reported_date: "2024-01-10".into(),
            assigned_to: "Sarah Johnson".into(),
            description: "Suspected financial exploitation by family member".into(),
            action_taken: None,
            referral_made: true,
            review_date: Some("2024-01-17".into()),
        },
        SafeguardingIncident {
            id: "SG002".into(),
            client_name: "Margaret Thompson".into(),
            incident_type: "Neglect".into(),
            severity: Severity::Medium,
            status: IncidentStatus::ActionTaken,
            reported_by: "John Smith (Volunteer)".into(),
            reported_date: "2024-01-08".into(),
            assigned_to: "Sarah Johnson".into(),
            description: "Poor living conditions, lack of personal care".into(),
            action_taken: Some("Social services contacted, care package arranged".into()),
            referral_made: true,
            review_date: Some("2024-01-22".into()),
        },
        SafeguardingIncident {
            id: "SG003".into(),
            client_name: "Mary Foster".into(),
            incident_type: "Emotional Abuse".into(),
            severity: Severity::Critical,
            status: IncidentStatus::Reported,
            reported_by: "Emily Johnson (Volunteer)".into(),
            reported_date: "2024-01-14".into(),
            assigned_to: "Sarah Johnson".into(),
            description: "Verbal threats and intimidation from care provider".into(),
            action_taken: None,
            referral_made: false,
            review_date: Some("2024-01-16".into()),
        },
    ]
}

pub fn sample_advocacy() -> Vec<AdvocacyAction> {
    vec![
        AdvocacyAction {
            id: "ADV001".into(),
            client_name: "Robert Davies".into(),
            advocacy_type: "Housing".into(),
            description: "Appeal housing benefit decision and secure emergency accommodation".into(),
            target_organization: "Manchester City Council".into(),
            assigned_to: "Mark Wilson".into(),
            status: AdvocacyStatus::InProgress,
            priority: Priority::Urgent,
            start_date: "2024-01-08".into(),
            last_action: "Formal appeal letter submitted".into(),
            next_action: Some("Council meeting on 18th Jan".into()),
            outcome: None,
            documents_count: 5,
        },
        AdvocacyAction {
            id: "ADV002".into(),
            client_name: "Margaret Thompson".into(),
            advocacy_type: "Healthcare".into(),
            description: "Ensure proper pain management and care plan review".into(),
            target_organization: "NHS Greater Manchester".into(),
            assigned_to: "Sarah Johnson".into(),
            status: AdvocacyStatus::Completed,
            priority: Priority::High,
            start_date: "2024-01-05".into(),
            last_action: "Care plan reviewed and updated".into(),
            next_action: None,
            outcome: Some("Enhanced pain management protocol agreed".into()),
            documents_count: 8,
        },
        AdvocacyAction {
            id: "ADV003".into(),
            client_name: "Elizabeth Morris".into(),
            advocacy_type: "Benefits".into(),
            description: "Appeal PIP assessment decision".into(),
            target_organization: "DWP".into(),
            assigned_to: "Mark Wilson".into(),
            status: AdvocacyStatus::Escalated,
            priority: Priority::High,
            start_date: "2024-01-02".into(),
            last_action: "Tribunal hearing scheduled".into(),
            next_action: Some("Prepare evidence for tribunal".into()),
            outcome: None,
            documents_count: 12,
        },
        AdvocacyAction {
            id: "ADV004".into(),
            client_name: "James Wilson".into(),
            advocacy_type: "Social Care".into(),
            description: "Secure appropriate day care placement".into(),
            target_organization: "Adult Social Care".into(),
            assigned_to: "Sarah Johnson".into(),
            status: AdvocacyStatus::Completed,
            priority: Priority::Medium,
            start_date: "2023-12-15".into(),
            last_action: "Day care placement confirmed".into(),
            next_action: None,
            outcome: Some("Client attending day center 3 days/week".into()),
            documents_count: 6,
        },
        AdvocacyAction {
            id: "ADV005".into(),
            client_name: "Mary Foster".into(),
            advocacy_type: "Mental Health".into(),
            description: "Access to community mental health services".into(),
            target_organization: "NHS Mental Health Trust".into(),
            assigned_to: "Sarah Johnson".into(),
            status: AdvocacyStatus::Pending,
            priority: Priority::High,
            start_date: "2024-01-12".into(),
            last_action: "Initial referral submitted".into(),
            next_action: Some("Follow up on referral status".into()),
            outcome: None,
            documents_count: 3,
        },
    ]
}

pub fn sample_users() -> Vec<StaffUser> {
    vec![
        StaffUser {
            id: "1".into(),
            name: "Sarah Johnson".into(),
            email: "sarah.johnson@edencare.org.uk".into(),
            role: UserRole::Admin,
            status: UserStatus::Active,
            last_login: "2024-01-15T10:30:00Z".into(),
        },
        StaffUser {
            id: "2".into(),
            name: "Mark Wilson".into(),
            email: "mark.wilson@edencare.org.uk".into(),
            role: UserRole::Staff,
            status: UserStatus::Active,
            last_login: "2024-01-15T09:15:00Z".into(),
        },
        StaffUser {
            id: "3".into(),
            name: "John Smith".into(),
            email: "john.smith@volunteer.edencare.org.uk".into(),
            role: UserRole::Volunteer,
            status: UserStatus::Active,
            last_login: "2024-01-14T16:45:00Z".into(),
        },
        StaffUser {
            id: "4".into(),
            name: "Emily Johnson".into(),
            email: "emily.j@volunteer.edencare.org.uk".into(),
            role: UserRole::Volunteer,
            status: UserStatus::Active,
            last_login: "2024-01-13T14:20:00Z".into(),
        },
    ]
}

// ========================
// Profile lookup tables
// ========================

fn client_details() -> Vec<ClientDetail> {
    let clients = sample_clients();
    vec![
        ClientDetail {
            client: clients[0].clone(),
            join_date: "2023-06-15".into(),
            emergency_contact: "Omar Hassan (Son) - 07123 456789".into(),
            notes: "Prefers morning visits. Has mobility issues but maintains good spirits. \
                    Enjoys discussing gardening and cooking."
                .into(),
            recent_cases: vec![
                CaseSummary {
                    id: "C001".into(),
                    title: "Weekly befriending visits".into(),
                    status: CaseStatus::InProgress,
                    created: "2024-01-10".into(),
                },
                CaseSummary {
                    id: "C002".into(),
                    title: "End-of-life support coordination".into(),
                    status: CaseStatus::Open,
                    created: "2024-01-08".into(),
                },
            ],
            health_conditions: strs(&["Arthritis", "Type 2 Diabetes", "Limited mobility"]),
            preferences: strs(&[
                "Morning visits",
                "Female volunteers preferred",
                "Halal dietary requirements",
            ]),
        },
        ClientDetail {
            client: clients[1].clone(),
            join_date: "2023-03-20".into(),
            emergency_contact: "Zara Ali (Daughter) - 07234 567890".into(),
            notes: "Requires advocacy support for housing issues. Safeguarding flag due to \
                    financial concerns from family member."
                .into(),
            recent_cases: vec![
                CaseSummary {
                    id: "C003".into(),
                    title: "Housing advocacy case".into(),
                    status: CaseStatus::InProgress,
                    created: "2024-01-05".into(),
                },
                CaseSummary {
                    id: "C004".into(),
                    title: "Financial safeguarding review".into(),
                    status: CaseStatus::Urgent,
                    created: "2024-01-12".into(),
                },
            ],
            health_conditions: strs(&["Dementia (early stage)", "High blood pressure"]),
            preferences: strs(&[
                "Male volunteers preferred",
                "Arabic language support available",
                "Prayer time considerations",
            ]),
        },
        ClientDetail {
            client: clients[2].clone(),
            join_date: "2024-01-10".into(),
            emergency_contact: "Hassan Ahmed (Son) - 07345 678901".into(),
            notes: "New client requiring rapid response support following hospital discharge. \
                    Assessment pending."
                .into(),
            recent_cases: vec![CaseSummary {
                id: "C005".into(),
                title: "Post-discharge support".into(),
                status: CaseStatus::Open,
                created: "2024-01-13".into(),
            }],
            health_conditions: strs(&["Recent hip surgery", "Hypertension"]),
            preferences: strs(&[
                "Female volunteers only",
                "Afternoon availability",
                "Urdu language support",
            ]),
        },
    ]
}

fn volunteer_details() -> Vec<VolunteerDetail> {
    vec![
        VolunteerDetail {
            id: "1".into(),
            name: "Amina Malik".into(),
            age: 34,
            address: "123 Green Lane, Manchester".into(),
            phone: "0161 789 1234".into(),
            email: "amina.malik@email.com".into(),
            status: UserStatus::Active,
            skills: strs(&["Befriending", "Advocacy", "Translation (Urdu)"]),
            availability: strs(&["Monday AM", "Wednesday PM", "Friday AM"]),
            dbs_status: DbsStatus::Current,
            dbs_expiry: "2024-08-15".into(),
            join_date: "2022-03-10".into(),
            total_hours: 156,
            current_cases: 3,
            rating: 4.8,
            languages: strs(&["English", "Urdu", "Punjabi"]),
            qualifications: strs(&["Level 2 Health & Social Care", "Safeguarding Certificate"]),
            interests: strs(&["Cooking", "Reading", "Community work"]),
            notes: "Excellent with elderly clients. Particularly skilled in cross-cultural \
                    communication. Has experience working with dementia patients."
                .into(),
            recent_activities: vec![
                ActivityLogEntry {
                    activity: "Completed befriending visit with Fatima Hassan".into(),
                    date: "2024-01-15".into(),
                    duration: "2 hours".into(),
                },
                ActivityLogEntry {
                    activity: "Attended safeguarding training session".into(),
                    date: "2024-01-12".into(),
                    duration: "3 hours".into(),
                },
                ActivityLogEntry {
                    activity: "Provided translation support for Ibrahim Ali".into(),
                    date: "2024-01-10".into(),
                    duration: "1.5 hours".into(),
                },
            ],
            achievements: vec![
                Achievement {
                    title: "Volunteer of the Month".into(),
                    date: "2023-11-01".into(),
                    description: "Outstanding dedication to client care".into(),
                },
                Achievement {
                    title: "100 Hours Milestone".into(),
                    date: "2023-09-15".into(),
                    description: "Completed 100 hours of volunteer service".into(),
                },
            ],
        },
        VolunteerDetail {
            id: "2".into(),
            name: "Hassan Omar".into(),
            age: 29,
            address: "67 Mill Street, Oldham".into(),
            phone: "0161 456 7890".into(),
            email: "hassan.omar@email.com".into(),
            status: UserStatus::Active,
            skills: strs(&["Rapid Response", "Practical Support", "IT Help"]),
            availability: strs(&["Tuesday PM", "Thursday AM", "Saturday All Day"]),
            dbs_status: DbsStatus::Current,
            dbs_expiry: "2024-11-20".into(),
            join_date: "2023-01-15".into(),
            total_hours: 89,
            current_cases: 2,
            rating: 4.6,
            languages: strs(&["English", "Arabic", "French"]),
            qualifications: strs(&["First Aid Certificate", "IT Support Diploma"]),
            interests: strs(&["Technology", "Sports", "Volunteering"]),
            notes: "Tech-savvy volunteer excellent for rapid response situations. Good at \
                    helping elderly clients with digital issues."
                .into(),
            recent_activities: vec![
                ActivityLogEntry {
                    activity: "Rapid response call for emergency shopping".into(),
                    date: "2024-01-14".into(),
                    duration: "3 hours".into(),
                },
                ActivityLogEntry {
                    activity: "Helped set up tablet for Khadijah Ahmed".into(),
                    date: "2024-01-11".into(),
                    duration: "2 hours".into(),
                },
                ActivityLogEntry {
                    activity: "Monthly volunteer team meeting".into(),
                    date: "2024-01-08".into(),
                    duration: "1 hour".into(),
                },
            ],
            achievements: vec![
                Achievement {
                    title: "Rapid Response Hero".into(),
                    date: "2023-12-01".into(),
                    description: "Outstanding response to emergency situations".into(),
                },
                Achievement {
                    title: "New Volunteer Mentor".into(),
                    date: "2023-10-01".into(),
                    description: "Successfully mentored 3 new volunteers".into(),
                },
            ],
        },
        VolunteerDetail {
            id: "3".into(),
            name: "Zara Ibrahim".into(),
            age: 42,
            address: "34 Rose Avenue, Stockport".into(),
            phone: "0161 234 9876".into(),
            email: "zara.ibrahim@email.com".into(),
            status: UserStatus::Active,
            skills: strs(&["End-of-life Support", "Counselling", "Bereavement Support"]),
            availability: strs(&["Monday PM", "Wednesday AM", "Friday PM"]),
            dbs_status: DbsStatus::Current,
            dbs_expiry: "2024-06-30".into(),
            join_date: "2021-09-05".into(),
            total_hours: 234,
            current_cases: 4,
            rating: 4.9,
            languages: strs(&["English", "Arabic", "Bengali"]),
            qualifications: strs(&[
                "Counselling Certificate",
                "Bereavement Support Training",
                "Mental Health First Aid",
            ]),
            interests: strs(&["Meditation", "Gardening", "Reading"]),
            notes: "Highly experienced volunteer specializing in end-of-life and bereavement \
                    support. Exceptional empathy and communication skills."
                .into(),
            recent_activities: vec![
                ActivityLogEntry {
                    activity: "End-of-life support session".into(),
                    date: "2024-01-15".into(),
                    duration: "4 hours".into(),
                },
                ActivityLogEntry {
                    activity: "Bereavement counselling for family member".into(),
                    date: "2024-01-13".into(),
                    duration: "2 hours".into(),
                },
                ActivityLogEntry {
                    activity: "Advanced training workshop attendance".into(),
                    date: "2024-01-09".into(),
                    duration: "6 hours".into(),
                },
            ],
            achievements: vec![
                Achievement {
                    title: "Excellence in Care Award".into(),
                    date: "2023-12-15".into(),
                    description: "Recognized for exceptional end-of-life support".into(),
                },
                Achievement {
                    title: "Senior Volunteer Status".into(),
                    date: "2023-08-01".into(),
                    description: "Promoted to senior volunteer role".into(),
                },
                Achievement {
                    title: "200 Hours Milestone".into(),
                    date: "2023-05-10".into(),
                    description: "Completed 200 hours of volunteer service".into(),
                },
            ],
        },
    ]
}

fn case_details() -> Vec<CaseDetail> {
    vec![
        CaseDetail {
            id: "C001".into(),
            title: "Weekly befriending visits".into(),
            client_name: "Fatima Hassan".into(),
            client_id: "1".into(),
            volunteer_name: "Amina Malik".into(),
            volunteer_id: "1".into(),
            status: CaseStatus::InProgress,
            priority: Priority::Medium,
            created: "2024-01-10".into(),
            last_update: "2024-01-15".into(),
            description: "Weekly befriending visits to provide companionship and emotional \
                          support. Client enjoys discussing gardening, cooking, and sharing \
                          stories about her family."
                .into(),
            objectives: strs(&[
                "Provide regular companionship and social interaction",
                "Monitor general wellbeing and mood",
                "Encourage independence where possible",
                "Report any concerns to case coordinator",
            ]),
            progress: vec![
                ProgressNote {
                    date: "2024-01-15".into(),
                    note: "Excellent visit. Fatima was in good spirits and showed me her garden \
                           plans for spring. Discussed her diabetes management - seems well \
                           controlled."
                        .into(),
                    author: "Amina Malik".into(),
                },
                ProgressNote {
                    date: "2024-01-10".into(),
                    note: "First befriending visit completed. Good rapport established. Fatima \
                           expressed gratitude for the service and is looking forward to \
                           regular visits."
                        .into(),
                    author: "Amina Malik".into(),
                },
                ProgressNote {
                    date: "2024-01-08".into(),
                    note: "Case initiated following assessment. Client matched with suitable \
                           volunteer based on cultural background and interests."
                        .into(),
                    author: "Aisha Rahman".into(),
                },
            ],
            next_actions: vec![
                PlannedAction {
                    action: "Schedule next befriending visit".into(),
                    due: "2024-01-22".into(),
                    assignee: "Amina Malik".into(),
                },
                PlannedAction {
                    action: "Monthly case review".into(),
                    due: "2024-02-10".into(),
                    assignee: "Aisha Rahman".into(),
                },
            ],
        },
        CaseDetail {
            id: "C002".into(),
            title: "End-of-life support coordination".into(),
            client_name: "Fatima Hassan".into(),
            client_id: "1".into(),
            volunteer_name: "Zara Ibrahim".into(),
            volunteer_id: "3".into(),
            status: CaseStatus::Open,
            priority: Priority::High,
            created: "2024-01-08".into(),
            last_update: "2024-01-12".into(),
            description: "Coordination of end-of-life support services including liaison with \
                          healthcare providers, family support, and practical assistance."
                .into(),
            objectives: strs(&[
                "Coordinate with healthcare team",
                "Provide emotional support to client and family",
                "Assist with practical arrangements as needed",
                "Ensure dignity and comfort throughout process",
            ]),
            progress: vec![
                ProgressNote {
                    date: "2024-01-12".into(),
                    note: "Met with family to discuss care preferences. Healthcare plan reviewed \
                           with GP. Client wishes to remain at home with family support."
                        .into(),
                    author: "Zara Ibrahim".into(),
                },
                ProgressNote {
                    date: "2024-01-08".into(),
                    note: "Initial assessment completed. Client referred by GP for end-of-life \
                           support coordination. Family meeting scheduled."
                        .into(),
                    author: "Aisha Rahman".into(),
                },
            ],
            next_actions: vec![
                PlannedAction {
                    action: "Follow-up family meeting".into(),
                    due: "2024-01-18".into(),
                    assignee: "Zara Ibrahim".into(),
                },
                PlannedAction {
                    action: "Coordinate with palliative care team".into(),
                    due: "2024-01-20".into(),
                    assignee: "Aisha Rahman".into(),
                },
            ],
        },
        CaseDetail {
            id: "C003".into(),
            title: "Housing advocacy case".into(),
            client_name: "Ibrahim Ali".into(),
            client_id: "2".into(),
            volunteer_name: "Hassan Omar".into(),
            volunteer_id: "2".into(),
            status: CaseStatus::InProgress,
            priority: Priority::High,
            created: "2024-01-05".into(),
            last_update: "2024-01-14".into(),
            description: "Advocacy support for housing issues including liaison with local \
                          authority, completion of housing applications, and representation \
                          at meetings."
                .into(),
            objectives: strs(&[
                "Secure appropriate housing for client",
                "Advocate for client rights and needs",
                "Complete necessary paperwork and applications",
                "Provide ongoing support throughout process",
            ]),
            progress: vec![
                ProgressNote {
                    date: "2024-01-14".into(),
                    note: "Housing application submitted to council. Supporting documents \
                           gathered including medical evidence. Next review meeting scheduled."
                        .into(),
                    author: "Hassan Omar".into(),
                },
                ProgressNote {
                    date: "2024-01-08".into(),
                    note: "Met with client to discuss housing needs. Current accommodation \
                           unsuitable due to accessibility issues. Advocacy support initiated."
                        .into(),
                    author: "Yusuf Ahmed".into(),
                },
                ProgressNote {
                    date: "2024-01-05".into(),
                    note: "Case opened following client request for housing advocacy support. \
                           Initial assessment scheduled."
                        .into(),
                    author: "Yusuf Ahmed".into(),
                },
            ],
            next_actions: vec![
                PlannedAction {
                    action: "Attend housing review meeting".into(),
                    due: "2024-01-25".into(),
                    assignee: "Hassan Omar".into(),
                },
                PlannedAction {
                    action: "Follow up on medical evidence".into(),
                    due: "2024-01-20".into(),
                    assignee: "Yusuf Ahmed".into(),
                },
            ],
        },
    ]
}

/// Exact-match client lookup; `None` renders the not-found view
pub fn client_detail(id: &str) -> Option<ClientDetail> {
    client_details().into_iter().find(|detail| detail.client.id == id)
}

/// Exact-match volunteer lookup
pub fn volunteer_detail(id: &str) -> Option<VolunteerDetail> {
    volunteer_details().into_iter().find(|detail| detail.id == id)
}

/// Exact-match case lookup
pub fn case_detail(id: &str) -> Option<CaseDetail> {
    case_details().into_iter().find(|detail| detail.id == id)
}

// ========================
// Dashboard feed
// ========================

/// Recent-activity row; clicking opens the linked profile
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityItem {
    pub description: &'static str,
    pub time: &'static str,
    pub priority: Priority,
    pub link_kind: ProfileKind,
    pub link_id: &'static str,
}

/// Upcoming-task row; clicking opens the linked profile
#[derive(Debug, Clone, PartialEq)]
pub struct TaskItem {
    pub task: &'static str,
    pub due: &'static str,
    pub assignee: &'static str,
    pub link_kind: ProfileKind,
    pub link_id: &'static str,
}

pub const RECENT_ACTIVITY: &[ActivityItem] = &[
    ActivityItem {
        description: "New case created for Fatima Hassan",
        time: "2 hours ago",
        priority: Priority::Medium,
        link_kind: ProfileKind::Case,
        link_id: "C001",
    },
    ActivityItem {
        description: "Amina Malik assigned to befriending case",
        time: "4 hours ago",
        priority: Priority::Low,
        link_kind: ProfileKind::Volunteer,
        link_id: "1",
    },
    ActivityItem {
        description: "Rapid response completed for elderly client",
        time: "6 hours ago",
        priority: Priority::High,
        link_kind: ProfileKind::Client,
        link_id: "3",
    },
    ActivityItem {
        description: "Housing advocacy letter sent to council",
        time: "1 day ago",
        priority: Priority::Medium,
        link_kind: ProfileKind::Case,
        link_id: "C003",
    },
];

pub const UPCOMING_TASKS: &[TaskItem] = &[
    TaskItem {
        task: "Follow-up call with Khadijah Ahmed",
        due: "Today, 2:00 PM",
        assignee: "Aisha Rahman",
        link_kind: ProfileKind::Client,
        link_id: "3",
    },
    TaskItem {
        task: "DBS check renewal for volunteer",
        due: "Tomorrow, 10:00 AM",
        assignee: "Yusuf Ahmed",
        link_kind: ProfileKind::Volunteer,
        link_id: "2",
    },
    TaskItem {
        task: "Quarterly safeguarding review",
        due: "Friday, 9:00 AM",
        assignee: "Aisha Rahman",
        link_kind: ProfileKind::Case,
        link_id: "C002",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_return_the_full_record() {
        let detail = client_detail("1").unwrap();
        assert_eq!(detail.client.name, "Fatima Hassan");
        assert_eq!(detail.recent_cases.len(), 2);

        let case = case_detail("C001").unwrap();
        assert_eq!(case.client_name, "Fatima Hassan");
        assert_eq!(case.progress.len(), 3);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        assert!(client_detail("99").is_none());
        assert!(volunteer_detail("99").is_none());
        assert!(case_detail("C999").is_none());
    }

    #[test]
    fn lookup_is_exact_match_only() {
        // No partial or prefix matching on identifiers.
        assert!(case_detail("C00").is_none());
        assert!(client_detail("").is_none());
    }

    #[test]
    fn dashboard_links_resolve() {
        let resolves = |kind: ProfileKind, id: &str| match kind {
            ProfileKind::Client => client_detail(id).is_some(),
            ProfileKind::Volunteer => volunteer_detail(id).is_some(),
            ProfileKind::Case => case_detail(id).is_some(),
        };
        for item in RECENT_ACTIVITY {
            assert!(resolves(item.link_kind, item.link_id), "dangling link {}", item.link_id);
        }
        for task in UPCOMING_TASKS {
            assert!(resolves(task.link_kind, task.link_id), "dangling link {}", task.link_id);
        }
    }
}
