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


use crate::{constants::*, Credential};
use async_trait::async_trait;
use log::debug;
use satispay_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads the signing credential from environment variables.
///
/// This provider looks for the following environment variables:
/// - `SATISPAY_KEY_ID`: The key id returned by the activation endpoint
/// - `SATISPAY_PRIVATE_KEY`: The PEM encoded RSA private key
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider {}

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let key_id = ctx.env_var(SATISPAY_KEY_ID);
        let private_key = ctx.env_var(SATISPAY_PRIVATE_KEY);

        match (key_id, private_key) {
            (Some(key_id), Some(private_key)) if !key_id.is_empty() && !private_key.is_empty() => {
                debug!("loading credential from environment variables");
                // Keys exported through env files often carry escaped newlines.
                let private_key = private_key.replace("\\n", "\n");
                Ok(Some(Credential::new(key_id, private_key)))
            }
            _ => Ok(None),
        }
    }
}
