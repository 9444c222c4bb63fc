//! Applicants page

use admin_api::{Applicant, ApplicantStatus, RecordId};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::LoadingSpinner;
use crate::format::display_date;
use crate::state::use_toast;

fn status_badge(status: ApplicantStatus) -> &'static str {
    match status {
        ApplicantStatus::Applied => "bg-gray-100 text-gray-700",
        ApplicantStatus::Reviewing => "bg-sky-100 text-sky-800",
        ApplicantStatus::Interviewed => "bg-purple-100 text-purple-800",
        ApplicantStatus::Offered => "bg-green-100 text-green-800",
        ApplicantStatus::Rejected => "bg-red-100 text-red-700",
    }
}

/// Case-insensitive match on name, email or job title.
fn matches_search(applicant: &Applicant, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    [&applicant.name, &applicant.email, &applicant.job]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}

/// Review applicants and move them through the hiring pipeline
#[component]
pub fn Applicants() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let mut search = use_signal(String::new);

    let list_auth = auth.clone();
    let mut applicants = use_resource(move || {
        let api = list_auth.api();
        async move { api.list_applicants().await }
    });

    let handle_status = use_callback(move |(id, status): (RecordId, ApplicantStatus)| {
        let api = auth.api();
        spawn(async move {
            match api.update_applicant_status(&id, status).await {
                Ok(()) => {
                    toast.success("Status updated");
                    applicants.restart();
                }
                Err(e) => {
                    tracing::warn!(applicant = %id, error = %e, "Status update failed");
                    toast.error(e.user_message());
                }
            }
        });
    });

    let query = search();

    rsx! {
        div {
            class: "space-y-6",

            div {
                class: "flex items-center justify-between gap-4",
                div {
                    h1 { class: "text-2xl font-bold text-gray-900", "Applicants" }
                    p { class: "text-gray-500 text-sm", "Track candidates across open positions." }
                }
                input {
                    r#type: "search",
                    class: "w-64 px-3 py-2 border border-gray-300 rounded-md text-sm",
                    placeholder: "Search applicants...",
                    value: "{query}",
                    oninput: move |e| search.set(e.value())
                }
            }

            match &*applicants.read_unchecked() {
                Some(Ok(list)) if !list.is_empty() => {
                    let shown: Vec<Applicant> = list
                        .iter()
                        .filter(|a| matches_search(a, &query))
                        .cloned()
                        .collect();
                    rsx! {
                        div {
                            class: "bg-white rounded-lg shadow-sm border border-gray-200 divide-y divide-gray-200",
                            if shown.is_empty() {
                                p { class: "p-6 text-center text-gray-500", "No applicants match \"{query}\"." }
                            }
                            for applicant in shown {
                                ApplicantRow {
                                    key: "{applicant.id}",
                                    applicant: applicant.clone(),
                                    on_status: handle_status
                                }
                            }
                        }
                    }
                }
                Some(Ok(_)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "No applicants yet." }
                    }
                },
                Some(Err(e)) => {
                    let message = e.user_message();
                    rsx! {
                        div {
                            class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                            "Failed to load applicants: {message}"
                        }
                    }
                }
                None => rsx! {
                    div { class: "py-12", LoadingSpinner { message: "Loading applicants..." } }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ApplicantRowProps {
    applicant: Applicant,
    on_status: EventHandler<(RecordId, ApplicantStatus)>,
}

#[component]
fn ApplicantRow(props: ApplicantRowProps) -> Element {
    let applicant = &props.applicant;
    let badge = status_badge(applicant.status);
    let current = applicant.status.as_str();
    let applied = display_date(applicant.applied_date.as_deref());
    let score = applicant
        .score
        .map(|s| format!("{:.1}", s))
        .unwrap_or_else(|| "-".to_string());
    let id = applicant.id.clone();

    rsx! {
        div {
            class: "p-4 flex items-center justify-between gap-4 hover:bg-gray-50",
            div {
                class: "min-w-0 flex-1",
                h3 { class: "text-sm font-medium text-gray-900", "{applicant.name}" }
                p { class: "text-sm text-gray-500", "{applicant.email} \u{00B7} {applicant.phone}" }
                p { class: "text-xs text-gray-400 mt-1", "{applicant.job} \u{00B7} applied {applied} \u{00B7} score {score}" }
            }
            span { class: "px-2 py-0.5 rounded-full text-xs font-medium {badge}", "{current}" }
            select {
                class: "px-2 py-1 border border-gray-300 rounded-md text-sm",
                value: "{current}",
                onchange: move |e| {
                    if let Some(status) = ApplicantStatus::parse(&e.value()) {
                        props.on_status.call((id.clone(), status));
                    }
                },
                for value in ApplicantStatus::ALL.map(|s| s.as_str()) {
                    option {
                        key: "{value}",
                        value: value,
                        selected: value == current,
                        "{value}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applicant() -> Applicant {
        Applicant {
            id: RecordId::Int(1),
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            phone: String::new(),
            job: "Compiler Engineer".to_string(),
            applied_date: None,
            status: ApplicantStatus::Applied,
            score: Some(9.0),
        }
    }

    #[test]
    fn test_blank_search_matches_everyone() {
        assert!(matches_search(&applicant(), "  "));
    }

    #[test]
    fn test_search_covers_name_email_and_job() {
        let a = applicant();
        assert!(matches_search(&a, "grace h"));
        assert!(matches_search(&a, "EXAMPLE.COM"));
        assert!(matches_search(&a, "compiler"));
        assert!(!matches_search(&a, "designer"));
    }

    #[test]
    fn test_every_status_has_a_badge() {
        for status in ApplicantStatus::ALL {
            assert!(!status_badge(status).is_empty());
        }
    }
}
