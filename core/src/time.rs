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

//! Time related utils.

use crate::Error;
use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into http date: `Sat, 01 Jan 2000 00:00:00 +0000`
///
/// The same string must be used for the `date` line of the string to sign
/// and for the `Date` header.
pub fn format_http_date(t: DateTime) -> String {
    t.format("%a, %d %b %Y %H:%M:%S %z").to_string()
}

/// Convert a unix timestamp in milliseconds into datetime.
pub fn from_timestamp_millis(ms: i64) -> crate::Result<DateTime> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| Error::request_invalid(format!("timestamp {ms} is out of range")))
}

/// Convert datetime into a unix timestamp in milliseconds.
pub fn timestamp_millis(t: DateTime) -> i64 {
    t.timestamp_millis()
}
