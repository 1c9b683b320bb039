// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! [`HttpSend`] implementation backed by [`reqwest`].
//!
//! Timeouts, proxies and TLS are configured on the [`Client`] passed to
//! [`ReqwestHttpSend::new`].

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use log::debug;
use reqwest::{Client, Request};
use satispay_core::{Error, HttpSend, Result};

#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req).map_err(|e| {
            Error::request_invalid("failed to convert request").with_source(e)
        })?;
        debug!("sending {} {}", req.method(), req.url().path());

        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(transport_error)?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(transport_error)?;
        Ok(http::Response::from_parts(parts, bs))
    }
}

/// Map a reqwest failure into a transport error with a diagnostic code.
fn transport_error(err: reqwest::Error) -> Error {
    let code = if err.is_timeout() {
        "TIMEOUT"
    } else if err.is_connect() {
        "CONNECT"
    } else if err.is_redirect() {
        "REDIRECT"
    } else if err.is_body() || err.is_decode() {
        "BODY"
    } else {
        "REQUEST"
    };

    Error::transport(format!("failed to send request: {err}"))
        .with_code(code)
        .with_source(err)
}
