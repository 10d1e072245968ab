//! HTTP client for the syscall information service.
//!
//! Each lookup is exactly one `GET` with `Accept: application/json`. There is
//! no retry and no caching: whatever the service answers is what gets shown.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use url::Url;

use crate::arch::Arch;
use crate::error::{LookupError, Subject};
use crate::record::RecordSet;

pub const DEFAULT_API_URL: &str = "https://api.syscall.sh/v1";

/// The two queries the service answers.
///
/// [`ApiClient`] is the real implementation; the lookup runner only depends on
/// this trait so it can be driven without a network.
pub trait SyscallApi {
    /// Fetch the calling convention for `arch`. Always a single record.
    fn fetch_convention(&self, arch: Arch) -> Result<RecordSet, LookupError>;

    /// Fetch everything the service knows about the syscall `name`.
    fn fetch_syscall(&self, name: &str) -> Result<RecordSet, LookupError>;
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL the endpoint paths are appended to.
    pub base_url: String,
    /// Overall per-request timeout. `None` keeps the HTTP client default.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }
}

pub struct ApiClient {
    agent: ureq::Agent,
    base: Url,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base = Url::parse(config.base_url.trim_end_matches('/'))
            .with_context(|| format!("invalid API URL '{}'", config.base_url))?;
        if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
            bail!("API URL must be an http:// or https:// URL, got '{}'", config.base_url);
        }

        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(ApiClient {
            agent: builder.build(),
            base,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    pub fn convention_url(&self, arch: Arch) -> String {
        self.endpoint("conventions", arch.as_str())
    }

    /// `name` is sent as a single path segment; `/`, `?`, `#` and friends are
    /// percent-encoded so they cannot select another resource.
    pub fn syscall_url(&self, name: &str) -> String {
        self.endpoint("syscalls", name)
    }

    fn endpoint(&self, resource: &str, item: &str) -> String {
        let mut url = self.base.clone();
        // `new` only accepts URLs that can be a base, so this always succeeds.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(resource).push(item);
        }
        url.into()
    }

    /// Issue the request and decode the body. Anything but a 200 is an error.
    fn get_json(&self, url: &str, subject: &Subject) -> Result<Value, LookupError> {
        tracing::debug!("GET {}", url);

        let response = match self
            .agent
            .get(url)
            .set("Accept", "application/json")
            .call()
        {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => {
                tracing::debug!("{} answered {}", url, status);
                return Err(LookupError::Http {
                    status,
                    subject: subject.clone(),
                });
            }
            Err(err) => {
                tracing::warn!("request to {} failed: {}", url, err);
                return Err(LookupError::Transport {
                    subject: subject.clone(),
                    message: err.to_string(),
                });
            }
        };

        let status = response.status();
        tracing::debug!("{} answered {}", url, status);
        if status != 200 {
            return Err(LookupError::Http {
                status,
                subject: subject.clone(),
            });
        }

        let body = response
            .into_string()
            .map_err(|err| LookupError::InvalidResponse {
                subject: subject.clone(),
                message: format!("failed to read body: {err}"),
            })?;

        serde_json::from_str(&body).map_err(|err| LookupError::InvalidResponse {
            subject: subject.clone(),
            message: format!("body is not valid JSON: {err}"),
        })
    }
}

impl SyscallApi for ApiClient {
    fn fetch_convention(&self, arch: Arch) -> Result<RecordSet, LookupError> {
        let subject = Subject::Convention(arch);
        let value = self.get_json(&self.convention_url(arch), &subject)?;
        if !value.is_object() {
            return Err(LookupError::InvalidResponse {
                subject,
                message: "calling convention is not a JSON object".to_string(),
            });
        }
        RecordSet::from_json(value)
            .map_err(|message| LookupError::InvalidResponse { subject, message })
    }

    fn fetch_syscall(&self, name: &str) -> Result<RecordSet, LookupError> {
        let subject = Subject::Syscall(name.to_string());
        let value = self.get_json(&self.syscall_url(name), &subject)?;
        RecordSet::from_json(value)
            .map_err(|message| LookupError::InvalidResponse { subject, message })
    }
}
