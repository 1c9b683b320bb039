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

use crate::execute::{execute, ApiRequest};
use crate::payments::Payments;
use crate::Environment;
use log::debug;
use satispay_core::{Context, ProvideCredential, Result, Signer};
use satispay_http_signature::{
    Credential, EnvCredentialProvider, RequestSigner, StaticCredentialProvider,
};
use serde::de::DeserializeOwned;

/// Client of the G Business API.
///
/// Every request is signed with the credential of the client, the
/// credential is loaded on first use.
#[derive(Debug, Clone)]
pub struct Client {
    signer: Signer<Credential>,
    environment: Environment,
}

impl Client {
    /// Create a client with a known key id and private key.
    pub fn new(ctx: Context, environment: Environment, key_id: &str, private_key: &str) -> Self {
        ClientBuilder::new(ctx)
            .environment(environment)
            .build(StaticCredentialProvider::new(key_id, private_key))
    }

    /// Create a client configured from the environment.
    ///
    /// - `SATISPAY_ENVIRONMENT`: `production` (default) or `sandbox`
    /// - `SATISPAY_KEY_ID` and `SATISPAY_PRIVATE_KEY`: the credential, read
    ///   on first request
    pub fn from_env(ctx: Context) -> Result<Self> {
        let environment = Environment::from_env(&ctx)?;
        debug!("satispay client configured for {environment}");

        Ok(ClientBuilder::new(ctx)
            .environment(environment)
            .build(EnvCredentialProvider::new()))
    }

    /// Start building a client.
    pub fn builder(ctx: Context) -> ClientBuilder {
        ClientBuilder::new(ctx)
    }

    /// Environment the client talks to.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Context of the client.
    pub fn context(&self) -> &Context {
        self.signer.context()
    }

    /// Payments operations.
    pub fn payments(&self) -> Payments<'_> {
        Payments::new(self)
    }

    /// Execute a signed request and decode its json response.
    ///
    /// This is the building block of the typed operations, useful to reach
    /// endpoints they don't cover.
    pub async fn execute<T: DeserializeOwned>(&self, req: ApiRequest) -> Result<T> {
        execute(
            self.signer.context(),
            Some(&self.signer),
            self.environment.base_url(),
            req,
        )
        .await
    }
}

/// Builder of a [`Client`].
#[derive(Debug)]
pub struct ClientBuilder {
    ctx: Context,
    environment: Environment,
    request_signer: RequestSigner,
}

impl ClientBuilder {
    fn new(ctx: Context) -> Self {
        Self {
            ctx,
            environment: Environment::default(),
            request_signer: RequestSigner::new(),
        }
    }

    /// Set the environment, production by default.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Replace the request signer.
    ///
    /// Only useful to pin the signing time in tests.
    pub fn request_signer(mut self, request_signer: RequestSigner) -> Self {
        self.request_signer = request_signer;
        self
    }

    /// Build the client with the given credential provider.
    pub fn build(self, provider: impl ProvideCredential<Credential = Credential>) -> Client {
        Client {
            signer: Signer::new(self.ctx, provider, self.request_signer),
            environment: self.environment,
        }
    }
}
