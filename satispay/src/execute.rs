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

use crate::constants::{APPLICATION_JSON, ERR_BAD_REQUEST, ERR_BAD_RESPONSE};
use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use log::debug;
use satispay_core::{
    ApiError, Context, Error, ErrorKind, Result, Signer, UNKNOWN_ERROR_CODE, UNKNOWN_ERROR_STATUS,
};
use satispay_http_signature::Credential;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// ApiRequest describes one call to the api, relative to the environment
/// base url.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Bytes,
    headers: HeaderMap,
}

impl ApiRequest {
    /// Create a bodyless request for `path`, which must start with `/` and
    /// carry its query string already encoded.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: Bytes::new(),
            headers: HeaderMap::new(),
        }
    }

    /// Serialize `payload` as the json body.
    ///
    /// The body is serialized exactly once, the same bytes are digested,
    /// signed and sent.
    pub fn with_json<T: Serialize>(mut self, payload: &T) -> Result<Self> {
        self.body = Bytes::from(serde_json::to_vec(payload)?);
        Ok(self)
    }

    /// Add an extra header.
    ///
    /// `accept` and `content-type` are always overwritten with
    /// `application/json`.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// The http method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The path with query.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The serialized body, empty for bodyless requests.
    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

/// Execute a request against `base_url` and decode the json response.
///
/// When `signer` is set the request is signed over the exact body bytes.
/// Every failure observed after the request is built goes through
/// [`normalize`].
pub async fn execute<T: DeserializeOwned>(
    ctx: &Context,
    signer: Option<&Signer<Credential>>,
    base_url: &str,
    req: ApiRequest,
) -> Result<T> {
    let ApiRequest {
        method,
        path,
        body,
        headers,
    } = req;

    let (mut parts, _) = http::Request::builder()
        .method(method.clone())
        .uri(format!("{base_url}{path}"))
        .body(())?
        .into_parts();
    parts.headers.extend(headers);

    if let Some(signer) = signer {
        signer.sign(&mut parts, &body).await?;
    }

    // Merged after the auth headers.
    parts
        .headers
        .insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    parts
        .headers
        .insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));

    let outcome = ctx
        .http_send(http::Request::from_parts(parts, body))
        .await;
    let resp = normalize(outcome).inspect_err(|e| debug!("{method} {path} failed: {e}"))?;
    debug!("{method} {path} got status {}", resp.status());

    decode(resp.body())
}

/// Normalize the outcome of a transport call.
///
/// - A response with a non-2xx status becomes an [`ErrorKind::Api`] error
///   carrying the parsed body, the status and `ERR_BAD_REQUEST` for 4xx or
///   `ERR_BAD_RESPONSE` for 5xx.
/// - A transport failure becomes an [`ErrorKind::Api`] error without data,
///   status [`UNKNOWN_ERROR_STATUS`] and the transport code if any.
/// - Any other error is returned unchanged.
pub fn normalize(outcome: Result<http::Response<Bytes>>) -> Result<http::Response<Bytes>> {
    match outcome {
        Ok(resp) if resp.status().is_success() => Ok(resp),
        Ok(resp) => Err(response_error(&resp)),
        Err(err) if err.kind() == ErrorKind::Transport => Err(transport_error(err)),
        Err(err) => Err(err),
    }
}

fn response_error(resp: &http::Response<Bytes>) -> Error {
    let status = resp.status();
    let code = if status.is_client_error() {
        ERR_BAD_REQUEST
    } else if status.is_server_error() {
        ERR_BAD_RESPONSE
    } else {
        UNKNOWN_ERROR_CODE
    };

    let body = resp.body();
    let data = if body.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(body).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(body).into_owned())
        }))
    };

    Error::api(
        format!("request failed with status code {}", status.as_u16()),
        ApiError {
            data,
            code: code.to_string(),
            status: status.as_u16(),
        },
    )
}

fn transport_error(err: Error) -> Error {
    let code = err.code().unwrap_or(UNKNOWN_ERROR_CODE).to_string();

    Error::api(
        err.to_string(),
        ApiError {
            data: None,
            code,
            status: UNKNOWN_ERROR_STATUS,
        },
    )
    .with_source(err)
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let body = if body.is_empty() { &b"null"[..] } else { body };
    serde_json::from_slice(body).map_err(|e| {
        Error::unexpected(format!("failed to decode response: {e}")).with_source(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    fn response(status: StatusCode, body: &'static str) -> Result<http::Response<Bytes>> {
        Ok(http::Response::builder()
            .status(status)
            .body(Bytes::from_static(body.as_bytes()))?)
    }

    #[test]
    fn test_normalize_success() -> Result<()> {
        let resp = normalize(response(StatusCode::OK, "{}"))?;
        assert_eq!(resp.status(), StatusCode::OK);
        Ok(())
    }

    #[test_case(StatusCode::BAD_REQUEST, ERR_BAD_REQUEST; "bad request")]
    #[test_case(StatusCode::UNAUTHORIZED, ERR_BAD_REQUEST; "unauthorized")]
    #[test_case(StatusCode::NOT_FOUND, ERR_BAD_REQUEST; "not found")]
    #[test_case(StatusCode::INTERNAL_SERVER_ERROR, ERR_BAD_RESPONSE; "internal")]
    #[test_case(StatusCode::SERVICE_UNAVAILABLE, ERR_BAD_RESPONSE; "unavailable")]
    #[test_case(StatusCode::MOVED_PERMANENTLY, UNKNOWN_ERROR_CODE; "redirect")]
    fn test_normalize_status(status: StatusCode, code: &str) {
        let body = r#"{"code":36,"message":"x"}"#;
        let err = normalize(response(status, body)).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.code(), Some(code));
        let api = err.api_error().expect("api error must be present");
        assert_eq!(api.status, status.as_u16());
        assert_eq!(api.code, code);
        assert_eq!(api.data, Some(json!({"code": 36, "message": "x"})));
    }

    #[test]
    fn test_normalize_non_json_body() {
        let err = normalize(response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>"))
            .unwrap_err();

        let api = err.api_error().expect("api error must be present");
        assert_eq!(api.data, Some(json!("<html>bad gateway</html>")));
        assert_eq!(api.status, 502);
    }

    #[test]
    fn test_normalize_empty_body() {
        let err = normalize(response(StatusCode::FORBIDDEN, "")).unwrap_err();

        let api = err.api_error().expect("api error must be present");
        assert_eq!(api.data, None);
        assert_eq!(api.status, 403);
    }

    #[test]
    fn test_normalize_transport_error() {
        let err = normalize(Err(Error::transport("connection refused").with_code("CONNECT")))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(
            err.api_error(),
            Some(&ApiError {
                data: None,
                code: "CONNECT".to_string(),
                status: 500,
            })
        );
    }

    #[test]
    fn test_normalize_transport_error_without_code() {
        let err = normalize(Err(Error::transport("dns failure"))).unwrap_err();

        let api = err.api_error().expect("api error must be present");
        assert_eq!(api.code, UNKNOWN_ERROR_CODE);
        assert_eq!(api.status, UNKNOWN_ERROR_STATUS);
    }

    #[test_case(Error::credential_invalid("bad pem"); "credential")]
    #[test_case(Error::request_invalid("bad uri"); "request")]
    #[test_case(Error::unexpected("no transport"); "unexpected")]
    fn test_normalize_passthrough(input: Error) {
        let kind = input.kind();
        let message = input.to_string();

        let err = normalize(Err(input)).unwrap_err();
        assert_eq!(err.kind(), kind);
        assert_eq!(err.to_string(), message);
        assert!(err.api_error().is_none());
    }

    #[test]
    fn test_decode_empty_body() -> Result<()> {
        decode::<()>(b"")?;
        assert_eq!(decode::<Option<u32>>(b"")?, None);
        Ok(())
    }

    #[test]
    fn test_api_request() -> Result<()> {
        let req = ApiRequest::new(Method::POST, "/g_business/v1/payments")
            .with_json(&json!({"flow": "MATCH_CODE"}))?;

        assert_eq!(req.method(), Method::POST);
        assert_eq!(req.path(), "/g_business/v1/payments");
        assert_eq!(req.body().as_ref(), br#"{"flow":"MATCH_CODE"}"#);
        Ok(())
    }
}
