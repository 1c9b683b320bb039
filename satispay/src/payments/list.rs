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

use super::{ListPaymentsResponse, PaymentStatus};
use crate::constants::{MAX_LIST_LIMIT, PAYMENTS_PATH};
use satispay_core::time::{timestamp_millis, DateTime};
use satispay_core::{Error, Result};

/// Filters and cursor of a list payments call.
///
/// Pages are fetched one call at a time: a payment created between two calls
/// may shift the cursor, there is no snapshot across pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPaymentsRequest {
    /// Only return payments with this status.
    pub status: Option<PaymentStatus>,
    /// Page size, between 1 and 100.
    pub limit: Option<u8>,
    /// Return payments older than the payment with this id.
    pub starting_after: Option<String>,
    /// Return payments older than this unix timestamp in milliseconds.
    pub starting_after_timestamp: Option<String>,
}

impl ListPaymentsRequest {
    /// Create a request without filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by status.
    pub fn with_status(mut self, status: PaymentStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the page size.
    pub fn with_limit(mut self, limit: u8) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Start after the payment with this id.
    pub fn with_starting_after(mut self, id: impl Into<String>) -> Self {
        self.starting_after = Some(id.into());
        self
    }

    /// Start after this point in time.
    pub fn with_starting_after_time(mut self, time: DateTime) -> Self {
        self.starting_after_timestamp = Some(timestamp_millis(time).to_string());
        self
    }

    /// Build the encoded query string, empty if no parameter is set.
    ///
    /// Parameters are always emitted in the order `status`, `limit`,
    /// `starting_after`, `starting_after_timestamp`. Empty cursors are
    /// skipped.
    pub fn query(&self) -> Result<String> {
        let mut ser = form_urlencoded::Serializer::new(String::new());

        if let Some(status) = self.status {
            ser.append_pair("status", status.as_str());
        }
        if let Some(limit) = self.limit {
            if !(1..=MAX_LIST_LIMIT).contains(&limit) {
                return Err(Error::request_invalid(format!(
                    "limit must be between 1 and {MAX_LIST_LIMIT}, got {limit}"
                )));
            }
            ser.append_pair("limit", &limit.to_string());
        }
        if let Some(v) = self.starting_after.as_deref().filter(|v| !v.is_empty()) {
            ser.append_pair("starting_after", v);
        }
        if let Some(v) = self
            .starting_after_timestamp
            .as_deref()
            .filter(|v| !v.is_empty())
        {
            if !v.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::request_invalid(format!(
                    "starting_after_timestamp must be a unix timestamp in milliseconds, got {v}"
                )));
            }
            ser.append_pair("starting_after_timestamp", v);
        }

        Ok(ser.finish())
    }

    /// Path with query of this request, without `?` when the query is empty.
    pub fn path(&self) -> Result<String> {
        let query = self.query()?;
        if query.is_empty() {
            Ok(PAYMENTS_PATH.to_string())
        } else {
            Ok(format!("{PAYMENTS_PATH}?{query}"))
        }
    }

    /// Request of the page following `resp`, `None` when `resp` is the last.
    ///
    /// Filters are kept, the cursor moves to the last payment of `resp`.
    pub fn next_page(&self, resp: &ListPaymentsResponse) -> Option<Self> {
        if !resp.has_more {
            return None;
        }
        let last = resp.data.last()?;

        Some(Self {
            starting_after: Some(last.id.clone()),
            starting_after_timestamp: None,
            ..self.clone()
        })
    }
}
