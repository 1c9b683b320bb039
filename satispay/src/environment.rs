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

use crate::constants::{PRODUCTION_BASE_URL, SANDBOX_BASE_URL, SATISPAY_ENVIRONMENT};
use satispay_core::{Context, Error, Result};
use std::fmt;
use std::str::FromStr;

/// Environment selects the api endpoint, fixed for the lifetime of a client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Live payments.
    #[default]
    Production,
    /// Test accounts, no real money moves.
    Sandbox,
}

impl Environment {
    /// Base url of this environment, without trailing slash.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_BASE_URL,
            Environment::Sandbox => SANDBOX_BASE_URL,
        }
    }

    /// Load the environment from `SATISPAY_ENVIRONMENT`, production if unset.
    pub fn from_env(ctx: &Context) -> Result<Self> {
        match ctx.env_var(SATISPAY_ENVIRONMENT) {
            Some(v) if !v.is_empty() => v.parse(),
            _ => Ok(Environment::default()),
        }
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "production" => Ok(Environment::Production),
            "sandbox" => Ok(Environment::Sandbox),
            v => Err(Error::config_invalid(format!(
                "unknown environment {v}, expected production or sandbox"
            ))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Sandbox => write!(f, "sandbox"),
        }
    }
}
