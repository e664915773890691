// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! POST transport used by the authenticated client

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::error::Result;

/// A single POST to the dashboard
#[derive(Debug, Clone)]
pub struct PostRequest {
    /// Target URL
    pub url: Url,
    /// Headers to send
    pub headers: HeaderMap,
    /// JSON body, omitted when `None`
    pub body: Option<Bytes>,
    /// Verify the server certificate chain
    pub tls_verify: bool,
}

/// Raw response from the transport
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// Response status code
    pub status: StatusCode,
    /// Response body
    pub body: Bytes,
}

impl TransportResponse {
    /// Create a new response
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Get status code as u16
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }
}

/// POST-capable HTTP transport
///
/// One attempt per call: implementations must not retry.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post(&self, request: PostRequest) -> Result<TransportResponse>;
}

/// `reqwest` transport
///
/// Keeps one connection pool per trust mode so the per-request `tls_verify`
/// flag is honoured without rebuilding clients. No timeout is configured.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    verifying: Client,
    relaxed: Client,
}

impl ReqwestTransport {
    /// Create a new transport
    pub fn new() -> Result<Self> {
        let verifying = Client::builder().build()?;
        let relaxed = Client::builder()
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Self { verifying, relaxed })
    }

    fn client_for(&self, tls_verify: bool) -> &Client {
        if tls_verify {
            &self.verifying
        } else {
            &self.relaxed
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(&self, request: PostRequest) -> Result<TransportResponse> {
        let mut builder = self
            .client_for(request.tls_verify)
            .post(request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        Ok(TransportResponse { status, body })
    }
}
