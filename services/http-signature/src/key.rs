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

use crate::constants::MIN_KEY_BITS;
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::{RsaPrivateKey, RsaPublicKey};
use satispay_core::utils::Redact;
use satispay_core::{Error, Result};
use std::fmt::{self, Debug};

/// KeyPair holds a freshly generated RSA key pair in PEM encoding.
///
/// The public key is sent once to the activation endpoint, the private key
/// is kept to sign requests.
#[derive(Clone)]
pub struct KeyPair {
    /// SubjectPublicKeyInfo PEM.
    pub public_key: String,
    /// PKCS#8 PEM.
    pub private_key: String,
}

impl Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .field("private_key", &Redact::from(&self.private_key))
            .finish()
    }
}

/// Generate a new RSA key pair of `bits` modulus size.
///
/// This is a setup time utility, the generation of a 4096 bits key can take
/// several seconds.
pub fn generate_key_pair(bits: usize) -> Result<KeyPair> {
    if bits < MIN_KEY_BITS {
        return Err(Error::config_invalid(format!(
            "rsa key of {bits} bits is too small, at least {MIN_KEY_BITS} bits required"
        )));
    }

    let mut rng = rand::thread_rng();
    let private_key = RsaPrivateKey::new(&mut rng, bits)
        .map_err(|e| Error::unexpected(format!("failed to generate rsa key: {e}")).with_source(e))?;
    let public_key = RsaPublicKey::from(&private_key);

    let private_pem = private_key
        .to_pkcs8_pem(LineEnding::LF)
        .map_err(|e| Error::unexpected("failed to encode private key").with_source(e))?;
    let public_pem = public_key
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| Error::unexpected("failed to encode public key").with_source(e))?;

    Ok(KeyPair {
        public_key: public_pem,
        private_key: private_pem.to_string(),
    })
}
