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

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

pub const PRODUCTION_BASE_URL: &str = "https://authservices.satispay.com";
pub const SANDBOX_BASE_URL: &str = "https://staging.authservices.satispay.com";

pub const PAYMENTS_PATH: &str = "/g_business/v1/payments";
pub const AUTHENTICATION_KEYS_PATH: &str = "/g_business/v1/authentication_keys";

/// Environment variables
pub const SATISPAY_ENVIRONMENT: &str = "SATISPAY_ENVIRONMENT";

pub const APPLICATION_JSON: &str = "application/json";

/// Codes reported for responses with an error status.
pub const ERR_BAD_REQUEST: &str = "ERR_BAD_REQUEST";
pub const ERR_BAD_RESPONSE: &str = "ERR_BAD_RESPONSE";

/// Path segments keep unreserved characters only.
pub static PATH_SEGMENT_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub const MAX_LIST_LIMIT: u8 = 100;
pub const MAX_EXTERNAL_CODE_LEN: usize = 50;
pub const MAX_METADATA_ENTRIES: usize = 20;
pub const MAX_METADATA_KEY_LEN: usize = 45;
pub const MAX_METADATA_VALUE_LEN: usize = 500;
