//! Organization Form Submission
//!
//! Multipart POST of the organization form back to the page it came from.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, HtmlInputElement, Request, RequestCredentials, RequestInit, Response};

use crate::config::{CSRF_HEADER, CSRF_INPUT_SELECTOR};
use crate::models::OrgProfile;

// ========================
// Types
// ========================

/// Field values posted for an organization update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgSubmission {
    pub org_name: String,
    pub org_adviser: String,
    pub org_about: String,
    pub is_public: bool,
    pub allowed_programs: Vec<String>,
}

impl OrgSubmission {
    /// Multipart entries in posting order; one `allowed_programs` per program
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![
            ("org_name", self.org_name.clone()),
            ("org_adviser", self.org_adviser.clone()),
            ("org_about", self.org_about.clone()),
            ("is_public", self.is_public.to_string()),
        ];
        entries.extend(
            self.allowed_programs
                .iter()
                .map(|program| ("allowed_programs", program.clone())),
        );
        entries
    }

    /// Mirror an accepted submission onto the displayed profile.
    /// `preview` replaces the picture only when a new image was read.
    pub fn apply_to(&self, profile: &mut OrgProfile, preview: Option<String>) {
        profile.name = self.org_name.clone();
        profile.description = self.org_about.clone();
        profile.adviser = self.org_adviser.clone();
        profile.is_public = self.is_public;
        if preview.is_some() {
            profile.image_url = preview;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Server answered with a redirect; the browser should follow it
    Redirected(String),
    /// Any other response
    Accepted,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("no browser window")]
    NoWindow,
    #[error("could not build request: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
}

fn describe(value: JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{:?}", value),
    }
}

fn request_error(value: JsValue) -> SubmitError {
    SubmitError::Request(describe(value))
}

fn network_error(value: JsValue) -> SubmitError {
    SubmitError::Network(describe(value))
}

// ========================
// Commands
// ========================

/// Token from the hidden `csrfmiddlewaretoken` input, else `fallback`
pub fn csrf_token(fallback: Option<&str>) -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(CSRF_INPUT_SELECTOR).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .filter(|token| !token.is_empty())
        .or_else(|| fallback.map(str::to_string))
}

/// POST `submission` (plus the optional profile picture) to the current page URL
pub async fn submit_organization(
    submission: &OrgSubmission,
    image: Option<&File>,
    csrf_token: Option<&str>,
) -> Result<SubmitOutcome, SubmitError> {
    let window = web_sys::window().ok_or(SubmitError::NoWindow)?;
    let url = window.location().href().map_err(request_error)?;

    let form = FormData::new().map_err(request_error)?;
    for (name, value) in submission.entries() {
        form.append_with_str(name, &value).map_err(request_error)?;
    }
    if let Some(file) = image {
        form.append_with_blob_and_filename("profile_picture", file, &file.name())
            .map_err(request_error)?;
    }

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_credentials(RequestCredentials::SameOrigin);
    init.set_body(&form);

    let request = Request::new_with_str_and_init(&url, &init).map_err(request_error)?;
    if let Some(token) = csrf_token {
        request.headers().set(CSRF_HEADER, token).map_err(request_error)?;
    } else {
        web_sys::console::warn_1(&"[SUBMIT] No CSRF token found on page".into());
    }

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_error)?;
    let response: Response = response.dyn_into().map_err(network_error)?;

    if response.redirected() {
        return Ok(SubmitOutcome::Redirected(response.url()));
    }
    if !response.ok() {
        web_sys::console::warn_1(&format!("[SUBMIT] Server answered {}", response.status()).into());
    }
    Ok(SubmitOutcome::Accepted)
}
