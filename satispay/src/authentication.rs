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

//! One time activation of a key pair.
//!
//! An activation token issued from the Satispay dashboard is exchanged,
//! together with a freshly generated public key, for the key id used to
//! sign every following request.

use crate::constants::AUTHENTICATION_KEYS_PATH;
use crate::execute::{execute, ApiRequest};
use crate::Environment;
use http::Method;
use log::debug;
use satispay_core::{Context, Error, Result};
use serde::{Deserialize, Serialize};

pub use satispay_http_signature::{generate_key_pair, KeyPair, DEFAULT_KEY_BITS};

/// Key id bound to the public key sent at activation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthenticationKey {
    /// Key id to sign requests with.
    pub key_id: String,
}

#[derive(Serialize)]
struct AuthenticationKeyPayload<'a> {
    public_key: &'a str,
    token: &'a str,
}

/// Exchange an activation `token` and a PEM `public_key` for a key id.
///
/// The call is not signed, there is no key id yet.
pub async fn authenticate_with_token(
    ctx: &Context,
    environment: Environment,
    token: &str,
    public_key: &str,
) -> Result<AuthenticationKey> {
    if token.is_empty() {
        return Err(Error::request_invalid("activation token must not be empty"));
    }
    if public_key.is_empty() {
        return Err(Error::request_invalid("public key must not be empty"));
    }

    let req = ApiRequest::new(Method::POST, AUTHENTICATION_KEYS_PATH)
        .with_json(&AuthenticationKeyPayload { public_key, token })?;
    let key: AuthenticationKey = execute(ctx, None, environment.base_url(), req).await?;

    debug!("public key activated on {environment}");
    Ok(key)
}
