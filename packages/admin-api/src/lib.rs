//! REST client for the careers admin backend.
//!
//! Covers login/logout plus the resources the console manages: blog posts,
//! job postings, applicants and subadmin accounts.
//!
//! # Example
//!
//! ```rust,ignore
//! use admin_api::AdminApiClient;
//!
//! let client = AdminApiClient::new("https://api.example.com");
//! let login = client.login("admin@example.com", "secret").await?;
//!
//! let client = client.with_token(login.tokens.access.clone());
//! for job in client.list_jobs().await? {
//!     println!("{} ({})", job.title, job.status().label());
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{ApiError, Result};
pub use types::*;

use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use types::{error_message, parse_list, ApplicantStatusUpdate, ImageUploadResponse, LogoutRequest};

/// Admin API client. Cheap to clone.
#[derive(Clone)]
pub struct AdminApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl AdminApiClient {
    /// Create a client rooted at `base_url` (trailing slashes ignored).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            auth_token: None,
        }
    }

    /// Create a client that sends `Authorization: Bearer <token>`
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the bearer token, failing if there is none.
    fn authed(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        let token = self.auth_token.as_ref().ok_or(ApiError::Unauthenticated)?;
        Ok(req.bearer_auth(token))
    }

    /// Attach the bearer token if there is one.
    fn maybe_authed(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    // ------------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------------

    /// Exchange credentials for an identity and tokens.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp = self.client.post(self.url("/login")).json(&body).send().await?;
        read_json(resp).await
    }

    /// Invalidate a refresh token server-side.
    pub async fn logout(&self, refresh: &str) -> Result<()> {
        let resp = self
            .client
            .post(self.url("/logout"))
            .json(&LogoutRequest { refresh })
            .send()
            .await?;
        read_empty(resp).await
    }

    // ------------------------------------------------------------------------
    // Blogs
    // ------------------------------------------------------------------------

    pub async fn list_blogs(&self) -> Result<Vec<BlogPost>> {
        let req = self.authed(self.client.get(self.url("/blogs/")))?;
        let resp = req.send().await?;
        read_list(resp, "blogs").await
    }

    pub async fn create_blog(&self, blog: NewBlog) -> Result<()> {
        let mut form = Form::new()
            .text("title", blog.title)
            .text("content", blog.content)
            .text("author", blog.author)
            .text("tags", blog.tags)
            .text("category", blog.category);

        if let Some(image) = blog.image {
            form = form.part("image", Part::bytes(image.bytes).file_name(image.file_name));
        }

        let req = self.authed(self.client.post(self.url("/blogs/")))?;
        let resp = req.multipart(form).send().await?;
        read_empty(resp).await
    }

    pub async fn update_blog(&self, id: &RecordId, update: &BlogUpdate) -> Result<()> {
        let req = self.authed(self.client.put(self.url(&format!("/blogs/{}", id))))?;
        let resp = req.json(update).send().await?;
        read_empty(resp).await
    }

    pub async fn delete_blog(&self, id: &RecordId) -> Result<()> {
        let req = self.authed(self.client.delete(self.url(&format!("/blogs/{}", id))))?;
        let resp = req.send().await?;
        read_empty(resp).await
    }

    /// Upload an image for inline use in a post body. Returns its public URL.
    pub async fn upload_image(&self, upload: Upload) -> Result<String> {
        let form = Form::new().part(
            "image_file",
            Part::bytes(upload.bytes).file_name(upload.file_name),
        );
        let req = self.maybe_authed(self.client.post(self.url("/blogs/uploadimage")));
        let resp = req.multipart(form).send().await?;
        let uploaded: ImageUploadResponse = read_json(resp).await?;
        Ok(uploaded.url)
    }

    // ------------------------------------------------------------------------
    // Jobs
    // ------------------------------------------------------------------------

    pub async fn list_jobs(&self) -> Result<Vec<Job>> {
        let req = self.maybe_authed(self.client.get(self.url("/jobs/jobs")));
        let resp = req.send().await?;
        read_list(resp, "jobs").await
    }

    pub async fn create_job(&self, job: &JobPayload) -> Result<()> {
        let req = self.authed(self.client.post(self.url("/jobs/")))?;
        let resp = req.json(job).send().await?;
        read_empty(resp).await
    }

    pub async fn update_job(&self, id: &RecordId, job: &JobPayload) -> Result<()> {
        let req = self.authed(self.client.put(self.url(&format!("/jobs/{}", id))))?;
        let resp = req.json(job).send().await?;
        read_empty(resp).await
    }

    pub async fn delete_job(&self, id: &RecordId) -> Result<()> {
        let req = self.authed(self.client.delete(self.url(&format!("/jobs/{}", id))))?;
        let resp = req.send().await?;
        read_empty(resp).await
    }

    // ------------------------------------------------------------------------
    // Applicants
    // ------------------------------------------------------------------------

    pub async fn list_applicants(&self) -> Result<Vec<Applicant>> {
        let req = self.authed(self.client.get(self.url("/applicants/")))?;
        let resp = req.send().await?;
        read_list(resp, "applicants").await
    }

    pub async fn update_applicant_status(
        &self,
        id: &RecordId,
        status: ApplicantStatus,
    ) -> Result<()> {
        let req = self.authed(self.client.put(self.url(&format!("/applicants/{}", id))))?;
        let resp = req.json(&ApplicantStatusUpdate { status }).send().await?;
        read_empty(resp).await
    }

    // ------------------------------------------------------------------------
    // Subadmins
    // ------------------------------------------------------------------------

    pub async fn list_subadmins(&self) -> Result<Vec<Subadmin>> {
        let req = self.authed(self.client.get(self.url("/subadmins")))?;
        let resp = req.send().await?;
        read_list(resp, "subadmins").await
    }

    pub async fn create_subadmin(&self, subadmin: &NewSubadmin) -> Result<()> {
        let req = self.authed(self.client.post(self.url("/subadmin")))?;
        let resp = req.json(subadmin).send().await?;
        read_empty(resp).await
    }

    pub async fn delete_subadmin(&self, id: &RecordId) -> Result<()> {
        let req = self.authed(self.client.delete(self.url(&format!("/subadmin/{}", id))))?;
        let resp = req.send().await?;
        read_empty(resp).await
    }
}

/// Turn a non-2xx response into [`ApiError::Api`].
async fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = error_message(&body);
    warn!(status = status.as_u16(), %message, "Admin API request failed");
    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<R: DeserializeOwned>(resp: Response) -> Result<R> {
    let resp = check_status(resp).await?;
    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}

async fn read_list<T: DeserializeOwned>(resp: Response, key: &str) -> Result<Vec<T>> {
    let resp = check_status(resp).await?;
    let body = resp.text().await?;
    let items: Vec<T> = parse_list(&body, key)?;
    debug!(key, count = items.len(), "Fetched list");
    Ok(items)
}

async fn read_empty(resp: Response) -> Result<()> {
    check_status(resp).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens on the discard port locally, so connections are refused.
    const UNREACHABLE: &str = "http://127.0.0.1:9";

    #[test]
    fn test_url_joining() {
        let client = AdminApiClient::new("https://api.example.com/");
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(client.url("/blogs/"), "https://api.example.com/blogs/");
        assert_eq!(client.url("subadmins"), "https://api.example.com/subadmins");
    }

    #[test]
    fn test_with_token() {
        let client = AdminApiClient::new("https://api.example.com");
        assert!(!client.is_authenticated());
        assert!(client.with_token("abc").is_authenticated());
    }

    #[tokio::test]
    async fn test_protected_call_without_token_fails_fast() {
        let client = AdminApiClient::new(UNREACHABLE);

        let err = client.list_blogs().await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated));

        let err = client.delete_subadmin(&RecordId::Int(3)).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated));
    }

    #[tokio::test]
    async fn test_logout_against_unreachable_host_is_network_error() {
        let client = AdminApiClient::new(UNREACHABLE);

        let err = client.logout("refresh-token").await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(err.user_message(), "Network error, please try again");
    }

    #[test]
    fn test_user_message_for_api_error() {
        let err = ApiError::Api {
            status: 400,
            message: "Title is required".to_string(),
        };
        assert_eq!(err.user_message(), "Title is required");
        assert_eq!(err.status(), Some(400));

        let err = ApiError::Api {
            status: 502,
            message: String::new(),
        };
        assert_eq!(err.user_message(), "Request failed with status 502");
    }
}
