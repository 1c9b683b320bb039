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

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Currency of an amount, the api only settles in euro.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Euro
    #[default]
    #[serde(rename = "EUR")]
    Eur,
}

/// Lifecycle status of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Waiting for the counterpart.
    Pending,
    /// Funds are locked, waiting for an accept or cancel.
    Authorized,
    /// Completed.
    Accepted,
    /// Canceled or expired.
    Canceled,
}

impl PaymentStatus {
    /// Wire value of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Authorized => "AUTHORIZED",
            PaymentStatus::Accepted => "ACCEPTED",
            PaymentStatus::Canceled => "CANCELED",
        }
    }
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    ToBusiness,
    RefundToBusiness,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActorType {
    Consumer,
    Shop,
    Device,
}

/// A party of the payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Unique id of the actor.
    pub id: String,
    /// Kind of actor.
    #[serde(rename = "type")]
    pub kind: ActorType,
    /// Display name, only set for consumers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The accounting day a payment was settled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyClosure {
    /// Unique id of the closure.
    pub id: String,
    /// Day of the closure, `YYYY-MM-DD`.
    pub date: String,
}

/// Payment as returned by the api.
///
/// Timestamps are kept in their wire representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique id of the payment.
    pub id: String,
    /// Short code shown to the consumer.
    #[serde(default)]
    pub code_identifier: Option<String>,
    /// Kind of payment.
    #[serde(rename = "type")]
    pub kind: PaymentType,
    /// Amount in cents.
    pub amount_unit: u64,
    /// Currency of the amount.
    pub currency: Currency,
    /// Current status.
    pub status: PaymentStatus,
    /// Whether the payment expired before completion.
    #[serde(default)]
    pub expired: bool,
    /// Free form metadata sent at creation.
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub sender: Option<Actor>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub receiver: Option<Actor>,
    /// Whether the caller owns the status of the payment.
    #[serde(default)]
    pub status_ownership: Option<bool>,
    /// The actor that owns the status of the payment.
    #[serde(default)]
    pub status_owner: Option<Actor>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub daily_closure: Option<DailyClosure>,
    /// Creation timestamp, ISO 8601.
    #[serde(default)]
    pub insert_date: Option<String>,
    /// Expiration timestamp, ISO 8601.
    #[serde(default)]
    pub expire_date: Option<String>,
    /// Order id or payment external identifier.
    #[serde(default)]
    pub external_code: Option<String>,
    /// Url the consumer is redirected to after the payment.
    #[serde(default)]
    pub redirect_url: Option<String>,
}

/// One page of payments, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPaymentsResponse {
    /// Whether older payments are available.
    pub has_more: bool,
    /// Payments of this page.
    pub data: Vec<Payment>,
}
