//! Outbound contact email through the EmailJS REST API.
//!
//! Client-side (csr): one `POST` via `gloo-net`, no retries.
//! Native builds: the call reports [`SendError::Unavailable`] since there is
//! no browser to send from.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as a typed [`SendError`] so the form can log the detail
//! and show the visitor a single generic message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use serde::Serialize;

use crate::config::{Delivery, EmailConfig};
use crate::util::validate::Submission;

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Status/text pair the service answered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    pub status: u16,
    pub text: String,
}

impl SendReceipt {
    fn simulated() -> Self {
        Self { status: 200, text: "simulated".to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    #[error("email request failed: {0}")]
    Network(String),
    #[error("email rejected: {status} {text}")]
    Rejected { status: u16, text: String },
    #[error("email delivery is only available in the browser")]
    Unavailable,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// Fields keyed by the form inputs' `name` attributes; the EmailJS template
/// decides how they map into the outgoing mail.
#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

fn send_request<'a>(config: &'a EmailConfig, submission: &'a Submission) -> SendRequest<'a> {
    SendRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        template_params: TemplateParams {
            name: &submission.name,
            email: &submission.email,
            subject: &submission.subject,
            message: &submission.message,
        },
    }
}

/// Send `submission` once through EmailJS.
///
/// # Errors
///
/// Returns [`SendError::Network`] if the request never completes,
/// [`SendError::Rejected`] for a non-2xx answer, and
/// [`SendError::Unavailable`] outside the browser.
pub async fn send_form(config: &EmailConfig, submission: &Submission) -> Result<SendReceipt, SendError> {
    #[cfg(feature = "csr")]
    {
        let body = send_request(config, submission);
        let resp = gloo_net::http::Request::post(EMAILJS_SEND_URL)
            .json(&body)
            .map_err(|e| SendError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;
        let status = resp.status();
        let accepted = resp.ok();
        let text = resp.text().await.map_err(|e| SendError::Network(e.to_string()))?;
        if accepted {
            Ok(SendReceipt { status, text })
        } else {
            Err(SendError::Rejected { status, text })
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = send_request(config, submission);
        Err(SendError::Unavailable)
    }
}

/// Deliver a validated submission the way the site is configured to.
///
/// # Errors
///
/// Propagates [`send_form`] failures; simulated delivery never fails.
pub async fn deliver(delivery: &Delivery, submission: &Submission) -> Result<SendReceipt, SendError> {
    match delivery {
        Delivery::EmailJs(config) => send_form(config, submission).await,
        Delivery::Simulated => Ok(SendReceipt::simulated()),
    }
}
