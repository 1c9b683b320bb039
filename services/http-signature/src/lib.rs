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


//! HTTP signature signer for the Satispay G Business API.
//!
//! Requests are signed following draft-cavage HTTP signatures with
//! `rsa-sha256` over `(request-target) host date digest`:
//!
//! ```no_run
//! # async fn example() -> satispay_core::Result<()> {
//! use satispay_core::{Context, Signer};
//! use satispay_http_signature::{RequestSigner, StaticCredentialProvider};
//!
//! let pem = std::fs::read_to_string("private.pem").unwrap();
//! let signer = Signer::new(
//!     Context::new(),
//!     StaticCredentialProvider::new("my-key-id", &pem),
//!     RequestSigner::new(),
//! );
//!
//! let (mut parts, _) = http::Request::get("https://authservices.satispay.com/g_business/v1/payments")
//!     .body(())
//!     .unwrap()
//!     .into_parts();
//! signer.sign(&mut parts, b"").await?;
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{DEFAULT_KEY_BITS, MIN_KEY_BITS, SATISPAY_KEY_ID, SATISPAY_PRIVATE_KEY};

mod credential;
pub use credential::Credential;

mod key;
pub use key::{generate_key_pair, KeyPair};

mod sign_request;
pub use sign_request::{authorization, digest, sign, string_to_sign, RequestSigner};

mod provide_credential;
pub use provide_credential::*;
