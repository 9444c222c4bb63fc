//! Request and response types for the admin REST API.

use std::fmt;

use admin_session::{Identity, Role, Tokens};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

// ============================================================================
// Common Types
// ============================================================================

/// Record id; the backend uses integers for most resources and strings for some.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{}", id),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

/// A file picked in the browser, ready for a multipart upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
    error: Option<String>,
    message: Option<String>,
}

/// Best human-readable message in an error response body.
pub(crate) fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed
            .detail
            .or(parsed.error)
            .or(parsed.message)
            .unwrap_or_else(|| body.trim().to_string()),
        Err(_) => body.trim().to_string(),
    }
}

/// List endpoints answer with either a bare array or `{ "<key>": [...] }`.
pub(crate) fn parse_list<T: DeserializeOwned>(
    body: &str,
    key: &str,
) -> serde_json::Result<Vec<T>> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value),
        serde_json::Value::Object(mut map) => match map.remove(key) {
            Some(items) => serde_json::from_value(items),
            None => Ok(Vec::new()),
        },
        _ => Ok(Vec::new()),
    }
}

/// Split a comma-separated tag field, dropping blanks.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Auth Types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login payload: the identity and its credentials, stored as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: Identity,
    pub tokens: Tokens,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct LogoutRequest<'a> {
    pub refresh: &'a str,
}

// ============================================================================
// Blog Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BlogPost {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default, alias = "image_url")]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
}

/// New post. Sent as multipart so the thumbnail can ride along.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBlog {
    pub title: String,
    pub content: String,
    pub author: String,
    /// Comma-separated
    pub tags: String,
    pub category: String,
    pub image: Option<Upload>,
}

/// Edit of an existing post. Sent as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogUpdate {
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub internal_urls: Vec<String>,
    pub author: String,
    pub tags_list: Vec<String>,
    pub category: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ImageUploadResponse {
    pub url: String,
}

// ============================================================================
// Job Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Draft,
    Live,
    Closed,
}

impl JobStatus {
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Draft => "Draft",
            JobStatus::Live => "Live",
            JobStatus::Closed => "Closed",
        }
    }
}

fn default_location() -> String {
    "remote".to_string()
}

fn default_employment_type() -> String {
    "full-time".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Job {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default)]
    pub applicants: u32,
    #[serde(default)]
    pub status: Option<JobStatus>,
    #[serde(default = "default_employment_type", alias = "employment_type")]
    pub emp_type: String,
    #[serde(default, alias = "job_description")]
    pub job_des: String,
    #[serde(default)]
    pub qualifications: String,
    #[serde(default)]
    pub salary_range: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Job {
    pub fn status(&self) -> JobStatus {
        self.status.unwrap_or_default()
    }
}

/// Body for both creating and updating a job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobPayload {
    pub title: String,
    pub department: String,
    pub emp_type: String,
    pub job_des: String,
    pub qualifications: String,
    pub salary_range: String,
    pub location: String,
}

impl From<&Job> for JobPayload {
    fn from(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            department: job.department.clone(),
            emp_type: job.emp_type.clone(),
            job_des: job.job_des.clone(),
            qualifications: job.qualifications.clone(),
            salary_range: job.salary_range.clone(),
            location: job.location.clone(),
        }
    }
}

impl Default for JobPayload {
    fn default() -> Self {
        Self {
            title: String::new(),
            department: String::new(),
            emp_type: default_employment_type(),
            job_des: String::new(),
            qualifications: String::new(),
            salary_range: String::new(),
            location: default_location(),
        }
    }
}

// ============================================================================
// Applicant Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicantStatus {
    Applied,
    Reviewing,
    Interviewed,
    Offered,
    Rejected,
}

impl ApplicantStatus {
    pub const ALL: [ApplicantStatus; 5] = [
        ApplicantStatus::Applied,
        ApplicantStatus::Reviewing,
        ApplicantStatus::Interviewed,
        ApplicantStatus::Offered,
        ApplicantStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicantStatus::Applied => "applied",
            ApplicantStatus::Reviewing => "reviewing",
            ApplicantStatus::Interviewed => "interviewed",
            ApplicantStatus::Offered => "offered",
            ApplicantStatus::Rejected => "rejected",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Applicant {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub job: String,
    #[serde(default, alias = "appliedDate")]
    pub applied_date: Option<String>,
    pub status: ApplicantStatus,
    #[serde(default)]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ApplicantStatusUpdate {
    pub status: ApplicantStatus,
}

// ============================================================================
// Subadmin Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Subadmin {
    pub id: RecordId,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub role: Role,
    #[serde(default)]
    pub access_pages: Vec<String>,
    #[serde(default)]
    pub date_joined: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewSubadmin {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub access_pages: Vec<String>,
}

impl NewSubadmin {
    /// Add the page if absent, remove it if present.
    pub fn toggle_page(&mut self, page: &str) {
        if let Some(pos) = self.access_pages.iter().position(|p| p == page) {
            self.access_pages.remove(pos);
        } else {
            self.access_pages.push(page.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_detail() {
        assert_eq!(error_message(r#"{"detail":"Job not found"}"#), "Job not found");
        assert_eq!(error_message(r#"{"error":"Email taken"}"#), "Email taken");
        assert_eq!(error_message("Bad Gateway\n"), "Bad Gateway");
        assert_eq!(error_message(r#"{"other":1}"#), r#"{"other":1}"#);
    }

    #[test]
    fn test_parse_list_accepts_bare_and_wrapped() {
        let bare: Vec<RecordId> = parse_list("[1, \"b\"]", "blogs").unwrap();
        assert_eq!(bare, vec![RecordId::Int(1), RecordId::Text("b".to_string())]);

        let wrapped: Vec<RecordId> = parse_list(r#"{"blogs":[3]}"#, "blogs").unwrap();
        assert_eq!(wrapped, vec![RecordId::Int(3)]);

        let missing: Vec<RecordId> = parse_list(r#"{"count":0}"#, "blogs").unwrap();
        assert!(missing.is_empty());
    }

    #[test]
    fn test_job_accepts_legacy_field_names_and_defaults() {
        let json = r#"{
            "id": 4,
            "title": "Backend Engineer",
            "employment_type": "contract",
            "job_description": "Build APIs",
            "status": null
        }"#;

        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.emp_type, "contract");
        assert_eq!(job.job_des, "Build APIs");
        assert_eq!(job.location, "remote");
        assert_eq!(job.applicants, 0);
        assert_eq!(job.status(), JobStatus::Draft);
    }

    #[test]
    fn test_job_payload_from_job() {
        let job: Job = serde_json::from_str(
            r#"{"id":1,"title":"Designer","status":"live","emp_type":"part-time","location":"Lahore"}"#,
        )
        .unwrap();

        let payload = JobPayload::from(&job);
        assert_eq!(payload.title, "Designer");
        assert_eq!(payload.emp_type, "part-time");
        assert_eq!(payload.location, "Lahore");
        assert_eq!(job.status(), JobStatus::Live);
    }

    #[test]
    fn test_split_tags() {
        assert_eq!(split_tags(" rust, web ,, hiring "), vec!["rust", "web", "hiring"]);
        assert!(split_tags(" , ").is_empty());
    }

    #[test]
    fn test_applicant_status_names() {
        for status in ApplicantStatus::ALL {
            assert_eq!(ApplicantStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ApplicantStatus::parse("hired"), None);
    }

    #[test]
    fn test_toggle_page() {
        let mut form = NewSubadmin::default();
        form.toggle_page("blogs");
        form.toggle_page("jobs");
        form.toggle_page("blogs");
        assert_eq!(form.access_pages, vec!["jobs".to_string()]);
    }

    #[test]
    fn test_login_response_shape() {
        let json = r#"{
            "user": {"id": 1, "email": "admin@example.com", "role": 1},
            "tokens": {"access": "a", "refresh": "r"}
        }"#;

        let login: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(login.user.role, Role::Admin);
        assert_eq!(login.tokens.refresh.as_deref(), Some("r"));
    }
}
