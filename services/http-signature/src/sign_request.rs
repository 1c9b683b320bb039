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

use crate::constants::{DIGEST, DIGEST_PREFIX, SIGNATURE_ALGORITHM, SIGNED_HEADERS};
use crate::Credential;
use async_trait::async_trait;
use http::request::Parts;
use http::{
    header::{AUTHORIZATION, DATE, HOST},
    HeaderName, HeaderValue,
};
use log::debug;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs1v15::SigningKey;
use rsa::sha2::Sha256;
use rsa::signature::{SignatureEncoding, Signer};
use rsa::{pkcs8::DecodePrivateKey, RsaPrivateKey};
use satispay_core::hash::{base64_encode, base64_sha256};
use satispay_core::time::{format_http_date, now, DateTime};
use satispay_core::{Context, Error, Result, SignRequest, SigningRequest};
use std::fmt::{Debug, Formatter, Write};
use std::sync::{Arc, Mutex};

/// RequestSigner that implements the draft-cavage HTTP signature scheme
/// used by the Satispay G Business API.
///
/// Every request gets `Host`, `Date`, `Digest` and `Authorization` headers,
/// all computed from scratch for that request.
///
/// # Performance
///
/// The PEM private key is parsed once and kept until the credential carries
/// a different key. The RSA signature is still computed for every request,
/// inline on the calling task: around a millisecond for a 2048 bit key and
/// several for a 4096 bit one.
///
/// - [Signing HTTP Messages](https://datatracker.ietf.org/doc/html/draft-cavage-http-signatures-12)
#[derive(Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
    /// Parsed key along with the sha256 of the PEM it was parsed from.
    signing_key: Mutex<Option<(String, Arc<SigningKey<Sha256>>)>>,
}

impl Debug for RequestSigner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("time", &self.time)
            .finish_non_exhaustive()
    }
}

impl RequestSigner {
    /// Create a new request signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Get the signing key for this PEM, parsing it only when it changed.
    fn signing_key(&self, private_key: &str) -> Result<Arc<SigningKey<Sha256>>> {
        let fingerprint = base64_sha256(private_key.as_bytes());
        if let Some((cached, key)) = self.signing_key.lock().expect("lock poisoned").as_ref() {
            if *cached == fingerprint {
                return Ok(key.clone());
            }
        }

        let key = Arc::new(SigningKey::<Sha256>::new(load_private_key(private_key)?));
        *self.signing_key.lock().expect("lock poisoned") = Some((fingerprint, key.clone()));
        Ok(key)
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        body: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_invalid(
                "no credential available to sign the request",
            ));
        };

        // Formatted once, the same string is signed and sent.
        let date = format_http_date(self.time.unwrap_or_else(now));
        let digest = digest(body);

        let mut signing_req = SigningRequest::build(req)?;
        let string_to_sign = string_to_sign(
            &signing_req.request_target(),
            signing_req.authority.as_str(),
            &date,
            &digest,
        )?;
        debug!("string to sign: {}", &string_to_sign);

        let signing_key = self.signing_key(&cred.private_key)?;
        let signature = sign_with(&signing_key, &string_to_sign)?;
        let authorization = authorization(&cred.key_id, &signature)?;

        let host = HeaderValue::from_str(signing_req.authority.as_str())?;
        let headers = &mut signing_req.headers;
        headers.insert(HOST, host);
        headers.insert(DATE, HeaderValue::from_str(&date)?);
        headers.insert(
            HeaderName::from_static(DIGEST),
            HeaderValue::from_str(&digest)?,
        );
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&authorization)?);

        signing_req.apply(req)
    }
}

/// Compute the `Digest` header value of the body: `SHA-256=<base64(sha256(body))>`.
///
/// Bodyless requests digest the empty string, the header is never omitted.
pub fn digest(body: &[u8]) -> String {
    format!("{DIGEST_PREFIX}{}", base64_sha256(body))
}

/// Build the canonical string to sign.
///
/// ```text
/// (request-target): <lowercased-method> <path-with-query>
/// host: <host-without-scheme>
/// date: <formatted-timestamp>
/// digest: <digest>
/// ```
pub fn string_to_sign(
    request_target: &str,
    host: &str,
    date: &str,
    digest: &str,
) -> Result<String> {
    let mut f = String::new();
    writeln!(f, "(request-target): {request_target}")?;
    writeln!(f, "host: {}", host.trim_start_matches("https://"))?;
    writeln!(f, "date: {date}")?;
    write!(f, "digest: {digest}")?;
    Ok(f)
}

/// Sign the string with RSA PKCS#1 v1.5 over SHA-256, base64 encoded.
///
/// The PEM is parsed on every call, [`RequestSigner`] keeps the parsed key.
pub fn sign(private_key: &str, string_to_sign: &str) -> Result<String> {
    let signing_key = SigningKey::<Sha256>::new(load_private_key(private_key)?);
    sign_with(&signing_key, string_to_sign)
}

fn sign_with(signing_key: &SigningKey<Sha256>, string_to_sign: &str) -> Result<String> {
    let signature = signing_key
        .try_sign(string_to_sign.as_bytes())
        .map_err(|e| Error::unexpected(format!("failed to sign: {e}")).with_source(e))?;

    Ok(base64_encode(&signature.to_bytes()))
}

/// Build the `Authorization` header value.
pub fn authorization(key_id: &str, signature: &str) -> Result<String> {
    let mut auth_value = String::new();
    write!(auth_value, "Signature keyId=\"{key_id}\", ")?;
    write!(auth_value, "algorithm=\"{SIGNATURE_ALGORITHM}\", ")?;
    write!(auth_value, "headers=\"{SIGNED_HEADERS}\", ")?;
    write!(auth_value, "signature=\"{signature}\"")?;
    Ok(auth_value)
}

/// Parse a PEM private key, PKCS#8 first then PKCS#1.
fn load_private_key(pem: &str) -> Result<RsaPrivateKey> {
    RsaPrivateKey::from_pkcs8_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
        .map_err(|e| {
            Error::credential_invalid(format!("failed to read private key: {e}")).with_source(e)
        })
}
