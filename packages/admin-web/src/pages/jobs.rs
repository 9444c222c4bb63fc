//! Job posts page

use admin_api::{Job, JobPayload, JobStatus, RecordId};
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{LoadingSpinner, PreviewDialog};
use crate::format::escape_html;
use crate::state::use_toast;

const LOCATIONS: &[(&str, &str)] = &[
    ("remote", "Remote"),
    ("hybrid", "Hybrid"),
    ("onsite", "On-site"),
];

const EMPLOYMENT_TYPES: &[(&str, &str)] = &[
    ("full-time", "Full-time"),
    ("part-time", "Part-time"),
    ("contract", "Contract"),
    ("internship", "Internship"),
];

/// Display label for a select value; unknown values are shown as-is.
fn option_label<'a>(options: &[(&str, &'static str)], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

fn validate(job: &JobPayload) -> Result<(), &'static str> {
    if job.title.trim().is_empty() || job.job_des.trim().is_empty() {
        return Err("Title and Description are required");
    }
    Ok(())
}

/// Read-only rendering of a posting. The description is stored as HTML.
fn job_preview_html(job: &Job) -> String {
    let salary = match job.salary_range.trim() {
        "" => "Not specified",
        salary => salary,
    };
    let fields = [
        ("Department", job.department.as_str()),
        ("Location", option_label(LOCATIONS, &job.location)),
        ("Type", option_label(EMPLOYMENT_TYPES, &job.emp_type)),
        ("Salary Range", salary),
        ("Qualifications", job.qualifications.as_str()),
    ];

    let mut html = format!("<h1>{}</h1>\n<div>\n", escape_html(&job.title));
    for (label, value) in fields {
        html.push_str(&format!(
            "<p><strong>{}:</strong> {}</p>\n",
            label,
            escape_html(value)
        ));
    }
    html.push_str("</div>\n<hr/>\n<h2>Job Description</h2>\n");
    html.push_str(&format!("<div>{}</div>", job.job_des));
    html
}

fn status_badge(status: JobStatus) -> &'static str {
    match status {
        JobStatus::Live => "bg-green-100 text-green-800",
        JobStatus::Draft => "bg-gray-100 text-gray-700",
        JobStatus::Closed => "bg-red-100 text-red-700",
    }
}

/// List, create, edit and delete job postings
#[component]
pub fn Jobs() -> Element {
    let auth = use_auth();
    let toast = use_toast();

    let mut form = use_signal(JobPayload::default);
    let mut editing = use_signal(|| None::<RecordId>);
    let mut is_form_open = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut preview = use_signal(|| None::<String>);

    let list_auth = auth.clone();
    let mut jobs = use_resource(move || {
        let api = list_auth.api();
        async move { api.list_jobs().await }
    });

    let handle_preview = use_callback(move |job: Job| {
        preview.set(Some(job_preview_html(&job)));
    });

    let handle_edit = use_callback(move |job: Job| {
        form.set(JobPayload::from(&job));
        editing.set(Some(job.id));
        is_form_open.set(true);
    });

    let save_auth = auth.clone();
    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();

        let payload = form();
        if let Err(message) = validate(&payload) {
            toast.error(message);
            return;
        }

        let api = save_auth.api();
        let existing = editing();
        spawn(async move {
            saving.set(true);
            let result = match &existing {
                Some(id) => api.update_job(id, &payload).await,
                None => api.create_job(&payload).await,
            };
            match result {
                Ok(()) => {
                    if existing.is_some() {
                        toast.success("Job updated successfully");
                    } else {
                        toast.success("Job created successfully");
                    }
                    form.set(JobPayload::default());
                    editing.set(None);
                    is_form_open.set(false);
                    jobs.restart();
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Saving job failed");
                    toast.error(e.user_message());
                }
            }
            saving.set(false);
        });
    };

    let handle_delete = use_callback(move |id: RecordId| {
        let api = auth.api();
        spawn(async move {
            match api.delete_job(&id).await {
                Ok(()) => {
                    toast.success("Job deleted successfully");
                    jobs.restart();
                }
                Err(e) => toast.error(e.user_message()),
            }
        });
    });

    let form_title = if editing.read().is_some() { "Edit Job" } else { "New Job" };
    let current = form.read().clone();

    rsx! {
        div {
            class: "space-y-6",

            div {
                class: "flex items-center justify-between",
                div {
                    h1 { class: "text-2xl font-bold text-gray-900", "Job Posts" }
                    p { class: "text-gray-500 text-sm", "Manage open positions and their details." }
                }
                button {
                    class: "px-4 py-2 bg-[#041431] text-white text-sm rounded-md hover:bg-sky-900",
                    onclick: move |_| {
                        let open = !is_form_open();
                        if open {
                            form.set(JobPayload::default());
                            editing.set(None);
                        }
                        is_form_open.set(open);
                    },
                    if is_form_open() { "Close" } else { "New Job" }
                }
            }

            if is_form_open() {
                form {
                    class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-4",
                    onsubmit: handle_save,

                    h2 { class: "text-lg font-semibold text-gray-900", "{form_title}" }

                    div {
                        class: "grid gap-4 md:grid-cols-2",
                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-1", "Title" }
                            input {
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                                value: "{current.title}",
                                oninput: move |e| form.write().title = e.value()
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-1", "Department" }
                            input {
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                                value: "{current.department}",
                                oninput: move |e| form.write().department = e.value()
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-1", "Location" }
                            select {
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                                value: "{current.location}",
                                onchange: move |e| form.write().location = e.value(),
                                for (value, text) in LOCATIONS.iter().copied() {
                                    option { key: "{value}", value: value, selected: current.location == value, "{text}" }
                                }
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-1", "Employment Type" }
                            select {
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                                value: "{current.emp_type}",
                                onchange: move |e| form.write().emp_type = e.value(),
                                for (value, text) in EMPLOYMENT_TYPES.iter().copied() {
                                    option { key: "{value}", value: value, selected: current.emp_type == value, "{text}" }
                                }
                            }
                        }
                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-1", "Salary Range" }
                            input {
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md",
                                placeholder: "$80k - $100k",
                                value: "{current.salary_range}",
                                oninput: move |e| form.write().salary_range = e.value()
                            }
                        }
                    }

                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Description" }
                        textarea {
                            class: "w-full h-32 px-3 py-2 border border-gray-300 rounded-md",
                            value: "{current.job_des}",
                            oninput: move |e| form.write().job_des = e.value()
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "Qualifications" }
                        textarea {
                            class: "w-full h-24 px-3 py-2 border border-gray-300 rounded-md",
                            placeholder: "List required qualifications...",
                            value: "{current.qualifications}",
                            oninput: move |e| form.write().qualifications = e.value()
                        }
                    }

                    div {
                        class: "flex justify-end",
                        button {
                            r#type: "submit",
                            class: "px-4 py-2 bg-[#041431] text-white text-sm rounded-md hover:bg-sky-900 disabled:opacity-50",
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save" }
                        }
                    }
                }
            }

            match &*jobs.read_unchecked() {
                Some(Ok(list)) if !list.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-x-auto",
                        table {
                            class: "min-w-full divide-y divide-gray-200 text-sm",
                            thead {
                                class: "bg-gray-50 text-left text-xs font-medium text-gray-500 uppercase",
                                tr {
                                    th { class: "px-4 py-3", "Title" }
                                    th { class: "px-4 py-3", "Department" }
                                    th { class: "px-4 py-3", "Location" }
                                    th { class: "px-4 py-3", "Type" }
                                    th { class: "px-4 py-3", "Applicants" }
                                    th { class: "px-4 py-3", "Status" }
                                    th { class: "px-4 py-3" }
                                }
                            }
                            tbody {
                                class: "divide-y divide-gray-200",
                                for job in list.iter() {
                                    JobRow {
                                        key: "{job.id}",
                                        job: job.clone(),
                                        on_preview: handle_preview,
                                        on_edit: handle_edit,
                                        on_delete: handle_delete
                                    }
                                }
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "No job posts yet." }
                    }
                },
                Some(Err(e)) => {
                    let message = e.user_message();
                    rsx! {
                        div {
                            class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                            "Failed to load jobs: {message}"
                        }
                    }
                }
                None => rsx! {
                    div { class: "py-12", LoadingSpinner { message: "Loading jobs..." } }
                }
            }

            if let Some(html) = preview() {
                PreviewDialog { html: html, on_close: move |_| preview.set(None) }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct JobRowProps {
    job: Job,
    on_preview: EventHandler<Job>,
    on_edit: EventHandler<Job>,
    on_delete: EventHandler<RecordId>,
}

#[component]
fn JobRow(props: JobRowProps) -> Element {
    let job = &props.job;
    let mut confirming = use_signal(|| false);

    let status = job.status();
    let badge = status_badge(status);
    let status_label = status.label();
    let location = option_label(LOCATIONS, &job.location).to_string();
    let emp_type = option_label(EMPLOYMENT_TYPES, &job.emp_type).to_string();

    rsx! {
        tr {
            class: "hover:bg-gray-50",
            td { class: "px-4 py-3 font-medium text-gray-900", "{job.title}" }
            td { class: "px-4 py-3 text-gray-600", "{job.department}" }
            td { class: "px-4 py-3 text-gray-600", "{location}" }
            td { class: "px-4 py-3 text-gray-600", "{emp_type}" }
            td { class: "px-4 py-3 text-gray-600", "{job.applicants}" }
            td {
                class: "px-4 py-3",
                span { class: "px-2 py-0.5 rounded-full text-xs font-medium {badge}", "{status_label}" }
            }
            td {
                class: "px-4 py-3 text-right whitespace-nowrap",
                if confirming() {
                    button {
                        class: "px-3 py-1.5 bg-red-600 text-white text-xs rounded hover:bg-red-700 mr-2",
                        onclick: {
                            let id = job.id.clone();
                            move |_| {
                                confirming.set(false);
                                props.on_delete.call(id.clone());
                            }
                        },
                        "Confirm"
                    }
                    button {
                        class: "px-3 py-1.5 bg-gray-100 text-gray-700 text-xs rounded hover:bg-gray-200",
                        onclick: move |_| confirming.set(false),
                        "Cancel"
                    }
                } else {
                    button {
                        class: "px-3 py-1.5 bg-gray-100 text-gray-700 text-xs rounded hover:bg-gray-200 mr-2",
                        onclick: {
                            let job = job.clone();
                            move |_| props.on_preview.call(job.clone())
                        },
                        "Preview"
                    }
                    button {
                        class: "px-3 py-1.5 bg-sky-100 text-sky-700 text-xs rounded hover:bg-sky-200 mr-2",
                        onclick: {
                            let job = job.clone();
                            move |_| props.on_edit.call(job.clone())
                        },
                        "Edit"
                    }
                    button {
                        class: "px-3 py-1.5 bg-red-100 text-red-700 text-xs rounded hover:bg-red-200",
                        onclick: move |_| confirming.set(true),
                        "Delete"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_description_required() {
        let mut job = JobPayload {
            title: "Backend Engineer".to_string(),
            ..Default::default()
        };
        assert_eq!(validate(&job), Err("Title and Description are required"));

        job.job_des = "Build the API".to_string();
        assert_eq!(validate(&job), Ok(()));
    }

    #[test]
    fn test_new_job_defaults_match_select_options() {
        let job = JobPayload::default();
        assert_eq!(option_label(LOCATIONS, &job.location), "Remote");
        assert_eq!(option_label(EMPLOYMENT_TYPES, &job.emp_type), "Full-time");
    }

    #[test]
    fn test_unknown_option_shown_verbatim() {
        assert_eq!(option_label(LOCATIONS, "Lisbon"), "Lisbon");
    }

    #[test]
    fn test_each_status_has_distinct_badge() {
        let live = status_badge(JobStatus::Live);
        assert_ne!(live, status_badge(JobStatus::Draft));
        assert_ne!(live, status_badge(JobStatus::Closed));
    }

    fn job() -> Job {
        Job {
            id: RecordId::Int(3),
            title: "Backend Engineer".to_string(),
            department: "R&D".to_string(),
            location: "hybrid".to_string(),
            applicants: 4,
            status: Some(JobStatus::Live),
            emp_type: "contract".to_string(),
            job_des: "<p>Build the <em>API</em></p>".to_string(),
            qualifications: "Rust".to_string(),
            salary_range: "$90k - $110k".to_string(),
            created_at: None,
        }
    }

    #[test]
    fn test_preview_lists_fields_before_description() {
        let html = job_preview_html(&job());

        assert!(html.starts_with("<h1>Backend Engineer</h1>"));
        assert!(html.contains("<p><strong>Department:</strong> R&amp;D</p>"));
        assert!(html.contains("<p><strong>Location:</strong> Hybrid</p>"));
        assert!(html.contains("<p><strong>Type:</strong> Contract</p>"));
        assert!(html.contains("<p><strong>Salary Range:</strong> $90k - $110k</p>"));
        assert!(html.contains("<p><strong>Qualifications:</strong> Rust</p>"));

        let heading = html.find("<h2>Job Description</h2>").unwrap();
        let body = html.find("<div><p>Build the <em>API</em></p></div>").unwrap();
        assert!(heading < body);
    }

    #[test]
    fn test_preview_salary_not_specified_when_blank() {
        let html = job_preview_html(&Job {
            salary_range: "  ".to_string(),
            ..job()
        });
        assert!(html.contains("<p><strong>Salary Range:</strong> Not specified</p>"));
    }
}
