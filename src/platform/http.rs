//! Blocking HTTP client for the platform gateway.

use std::collections::HashSet;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::RETRY_AFTER;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use super::types::{
    ChannelInfo, FullChannelResponse, GatewayError, Participant, ParticipantsPage,
    SessionRequest, SessionResponse,
};
use super::MemberSource;
use crate::core::config::PlatformConfig;
use crate::core::errors::{Result, RollcallError};

/// [`MemberSource`] backed by the platform's JSON gateway.
pub struct HttpMemberSource {
    config: PlatformConfig,
    base: Url,
    client: Client,
    token: Option<String>,
}

impl HttpMemberSource {
    pub fn new(config: PlatformConfig) -> Result<Self> {
        let base = Url::parse(&config.endpoint)?;
        if base.cannot_be_a_base() {
            return Err(RollcallError::config_field(
                "endpoint must be a hierarchical URL",
                "platform.endpoint",
            ));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            config,
            base,
            client,
            token: None,
        })
    }

    /// Append percent-encoded path segments to the gateway base URL.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| RollcallError::config("platform.endpoint cannot be a base URL"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url, channel: &str) -> Result<T> {
        debug!("GET {}", url.path());
        let response = self.authorized(self.client.get(url)).send()?;
        let response = check_status(response, channel)?;
        Ok(response.json()?)
    }
}

impl MemberSource for HttpMemberSource {
    fn connect(&mut self) -> Result<()> {
        let url = self.url(&["session"])?;
        let request = SessionRequest {
            api_id: &self.config.api_id,
            api_hash: &self.config.api_hash,
        };
        let response = self.client.post(url).json(&request).send()?;
        let session: SessionResponse = check_session_status(response)?.json()?;
        self.token = Some(session.token);
        info!("Connected to platform gateway at {}", self.base);
        Ok(())
    }

    fn disconnect(&mut self) -> Result<()> {
        if self.token.is_none() {
            return Ok(());
        }
        let url = self.url(&["session"])?;
        let response = self.authorized(self.client.delete(url)).send();
        self.token = None;
        check_session_status(response?)?;
        Ok(())
    }

    fn resolve(&self, channel: &str) -> Result<ChannelInfo> {
        let url = self.url(&["channels", channel])?;
        let mut info: ChannelInfo = self.get_json(url, channel)?;
        if info.name.is_empty() {
            info.name = channel.to_string();
        }
        Ok(info)
    }

    fn reported_total(&self, channel: &ChannelInfo) -> Result<u64> {
        let url = self.url(&["channels", &channel.id.to_string(), "full"])?;
        let full: FullChannelResponse = self.get_json(url, &channel.name)?;
        Ok(full.participants_count)
    }

    fn participants(&self, channel: &ChannelInfo) -> Result<Vec<Participant>> {
        let limit = self.config.page_size.max(1);
        let id = channel.id.to_string();
        let mut all = Vec::new();
        let mut seen = HashSet::new();
        let mut offset = 0;
        loop {
            let mut url = self.url(&["channels", &id, "participants"])?;
            url.query_pairs_mut()
                .append_pair("offset", &offset.to_string())
                .append_pair("limit", &limit.to_string());
            let page: ParticipantsPage = self.get_json(url, &channel.name)?;
            let fetched = page.participants.len();
            let before = all.len();
            all.extend(page.participants.into_iter().filter(|p| seen.insert(p.id)));
            debug!("Fetched {} participants ({} so far)", fetched, all.len());
            if fetched < limit {
                break;
            }
            // A full page with nothing new means the gateway ignores `offset`.
            if all.len() == before {
                warn!(
                    "Gateway returned no new participants at offset {}, stopping",
                    offset
                );
                break;
            }
            offset += fetched;
        }
        Ok(all)
    }
}

/// Pass successful responses through; map failures onto the error taxonomy.
fn check_status(response: Response, channel: &str) -> Result<Response> {
    ensure_success(response, |status, retry_after, detail| {
        status_error(status, retry_after, channel, detail)
    })
}

/// Like [`check_status`], for the session endpoints that name no channel.
fn check_session_status(response: Response) -> Result<Response> {
    ensure_success(response, session_status_error)
}

fn ensure_success(
    response: Response,
    to_error: impl FnOnce(StatusCode, Option<u64>, Option<String>) -> RollcallError,
) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let retry_header = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());
    let body: GatewayError = response.json().unwrap_or_default();
    Err(to_error(status, retry_header.or(body.retry_after), body.error))
}

/// Error for a non-success status from `POST session` or `DELETE session`.
pub fn session_status_error(
    status: StatusCode,
    retry_after: Option<u64>,
    detail: Option<String>,
) -> RollcallError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => RollcallError::RateLimited {
            seconds: retry_after.unwrap_or(0),
        },
        StatusCode::UNAUTHORIZED => credentials_rejected(detail),
        other => unexpected_status(other, detail),
    }
}

fn credentials_rejected(detail: Option<String>) -> RollcallError {
    RollcallError::config_field(
        detail.unwrap_or_else(|| "gateway rejected the credentials".to_string()),
        "platform.api_hash",
    )
}

fn unexpected_status(status: StatusCode, detail: Option<String>) -> RollcallError {
    RollcallError::network(match detail {
        Some(detail) => format!("gateway returned {status}: {detail}"),
        None => format!("gateway returned {status}"),
    })
}

/// Error for a non-success gateway status.
pub fn status_error(
    status: StatusCode,
    retry_after: Option<u64>,
    channel: &str,
    detail: Option<String>,
) -> RollcallError {
    match status {
        StatusCode::NOT_FOUND => RollcallError::ChannelInvalid {
            channel: channel.to_string(),
        },
        StatusCode::FORBIDDEN => RollcallError::ChannelPrivate {
            channel: channel.to_string(),
        },
        StatusCode::CONFLICT => RollcallError::NotMutualContact,
        StatusCode::TOO_MANY_REQUESTS => RollcallError::RateLimited {
            seconds: retry_after.unwrap_or(0),
        },
        StatusCode::UNAUTHORIZED => credentials_rejected(detail),
        other => unexpected_status(other, detail),
    }
}
