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

//! Client of the Satispay G Business API.
//!
//! ## Activation
//!
//! A key pair is generated once and its public key activated with a token
//! from the dashboard. Keep the private key and the returned key id.
//!
//! ```no_run
//! # async fn example() -> satispay::Result<()> {
//! use satispay::authentication::{authenticate_with_token, generate_key_pair, DEFAULT_KEY_BITS};
//! use satispay::{default_context, Environment};
//!
//! let pair = generate_key_pair(DEFAULT_KEY_BITS)?;
//! let key = authenticate_with_token(
//!     &default_context(),
//!     Environment::Sandbox,
//!     "623ECX",
//!     &pair.public_key,
//! )
//! .await?;
//! println!("key id: {}", key.key_id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Payments
//!
//! ```no_run
//! # async fn example() -> satispay::Result<()> {
//! use satispay::payments::{CreatePaymentRequest, Flow, ListPaymentsRequest};
//! use satispay::{default_context, Client};
//!
//! // SATISPAY_ENVIRONMENT, SATISPAY_KEY_ID and SATISPAY_PRIVATE_KEY
//! let client = Client::from_env(default_context())?;
//!
//! let payment = client
//!     .payments()
//!     .create(&CreatePaymentRequest::new(Flow::MatchCode, 100))
//!     .await?;
//! let payment = client.payments().get(&payment.id).await?;
//!
//! let mut req = Some(ListPaymentsRequest::new().with_limit(20));
//! while let Some(page) = req {
//!     let resp = client.payments().list(&page).await?;
//!     for payment in &resp.data {
//!         println!("{} {:?}", payment.id, payment.status);
//!     }
//!     req = page.next_page(&resp);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every failure past the request construction is reported as an
//! [`ErrorKind::Api`] error whose [`ApiError`] carries the response body,
//! a code and the http status.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use satispay_core::{
    ApiError, Context, Env, Error, ErrorKind, HttpSend, OsEnv, Result, StaticEnv,
    UNKNOWN_ERROR_CODE, UNKNOWN_ERROR_STATUS,
};
pub use satispay_http_signature::{Credential, RequestSigner};

mod constants;

mod environment;
pub use environment::Environment;

mod execute;
pub use execute::{normalize, ApiRequest};

mod client;
pub use client::{Client, ClientBuilder};

pub mod authentication;
pub mod payments;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;
