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

use super::Currency;
use crate::constants::{
    MAX_EXTERNAL_CODE_LEN, MAX_METADATA_ENTRIES, MAX_METADATA_KEY_LEN, MAX_METADATA_VALUE_LEN,
};
use satispay_core::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Flow of a payment.
///
/// Some flows need a reference to another entity, carried by the variant so
/// that a flow can never be paired with the wrong field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "flow", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Flow {
    /// The consumer scans a code generated for the payment.
    MatchCode,
    /// Funds are locked on the consumer account until accepted or canceled.
    FundLock,
    /// Fund lock charged on a pre-authorized token.
    PreAuthorizedFundLock,
    /// Charge a pre-authorized token.
    #[serde(rename_all = "camelCase")]
    PreAuthorized {
        #[allow(missing_docs)]
        pre_authorized_payments_token: String,
    },
    /// Ask a specific consumer to pay.
    #[serde(rename_all = "camelCase")]
    MatchUser {
        #[allow(missing_docs)]
        consumer_uid: String,
    },
    /// Refund a previous payment.
    #[serde(rename_all = "camelCase")]
    Refund {
        #[allow(missing_docs)]
        parent_payment_uid: String,
    },
}

impl Flow {
    /// Wire value of the flow.
    pub fn as_str(&self) -> &'static str {
        match self {
            Flow::MatchCode => "MATCH_CODE",
            Flow::FundLock => "FUND_LOCK",
            Flow::PreAuthorizedFundLock => "PRE_AUTHORIZED_FUND_LOCK",
            Flow::PreAuthorized { .. } => "PRE_AUTHORIZED",
            Flow::MatchUser { .. } => "MATCH_USER",
            Flow::Refund { .. } => "REFUND",
        }
    }
}

/// Caller input to create a payment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    /// Flow and its flow specific reference.
    #[serde(flatten)]
    pub flow: Flow,
    /// Amount in cents.
    pub amount_unit: u64,
    /// Currency of the amount.
    #[serde(default)]
    pub currency: Currency,
    /// Order id or payment external identifier, at most 50 characters.
    #[serde(default)]
    pub external_code: Option<String>,
    /// Url called back when the payment changes status.
    #[serde(default)]
    pub callback_url: Option<String>,
    /// Url the consumer is sent to once the payment is done.
    #[serde(default)]
    pub redirect_url: Option<String>,
    /// Expiration of the payment, ISO 8601.
    #[serde(default)]
    pub expiration_date: Option<String>,
    /// Free form metadata, at most 20 entries with keys up to 45 and values
    /// up to 500 characters.
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

impl CreatePaymentRequest {
    /// Create a request in euro without optional fields.
    pub fn new(flow: Flow, amount_unit: u64) -> Self {
        Self {
            flow,
            amount_unit,
            currency: Currency::Eur,
            external_code: None,
            callback_url: None,
            redirect_url: None,
            expiration_date: None,
            metadata: None,
        }
    }

    /// Parse caller input expressed as camelCase json.
    ///
    /// An unknown flow or a flow without its required field is rejected.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| {
            Error::request_invalid(format!("invalid create payment request: {e}")).with_source(e)
        })
    }

    /// Build the wire payload, checking the flow specific field.
    pub fn to_payload(&self) -> Result<CreatePaymentPayload<'_>> {
        if let Some(code) = &self.external_code {
            if code.chars().count() > MAX_EXTERNAL_CODE_LEN {
                return Err(Error::request_invalid(format!(
                    "external_code is longer than {MAX_EXTERNAL_CODE_LEN} characters"
                )));
            }
        }
        if let Some(metadata) = &self.metadata {
            if metadata.len() > MAX_METADATA_ENTRIES {
                return Err(Error::request_invalid(format!(
                    "metadata has more than {MAX_METADATA_ENTRIES} entries"
                )));
            }
            for (key, value) in metadata {
                if key.chars().count() > MAX_METADATA_KEY_LEN {
                    return Err(Error::request_invalid(format!(
                        "metadata key {key} is longer than {MAX_METADATA_KEY_LEN} characters"
                    )));
                }
                // Non string values are measured on their json text.
                let value_len = match value {
                    Value::String(v) => v.chars().count(),
                    v => v.to_string().chars().count(),
                };
                if value_len > MAX_METADATA_VALUE_LEN {
                    return Err(Error::request_invalid(format!(
                        "metadata value of {key} is longer than {MAX_METADATA_VALUE_LEN} characters"
                    )));
                }
            }
        }

        let mut payload = CreatePaymentPayload {
            flow: self.flow.as_str(),
            amount_unit: self.amount_unit,
            currency: self.currency,
            external_code: self.external_code.as_deref(),
            callback_url: self.callback_url.as_deref(),
            redirect_url: self.redirect_url.as_deref(),
            expiration_date: self.expiration_date.as_deref(),
            metadata: self.metadata.as_ref(),
            pre_authorized_payments_token: None,
            consumer_uid: None,
            parent_payment_uid: None,
        };

        match &self.flow {
            Flow::MatchCode | Flow::FundLock | Flow::PreAuthorizedFundLock => {}
            Flow::PreAuthorized {
                pre_authorized_payments_token,
            } => {
                payload.pre_authorized_payments_token = Some(required(
                    "pre_authorized_payments_token",
                    pre_authorized_payments_token,
                )?)
            }
            Flow::MatchUser { consumer_uid } => {
                payload.consumer_uid = Some(required("consumer_uid", consumer_uid)?)
            }
            Flow::Refund { parent_payment_uid } => {
                payload.parent_payment_uid =
                    Some(required("parent_payment_uid", parent_payment_uid)?)
            }
        }

        Ok(payload)
    }
}

fn required<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(Error::request_invalid(format!("{name} must not be empty")));
    }
    Ok(value)
}

/// Wire payload of a create payment call.
///
/// Absent optional fields are omitted, at most one flow specific field is
/// present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePaymentPayload<'a> {
    flow: &'static str,
    amount_unit: u64,
    currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expiration_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pre_authorized_payments_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    consumer_uid: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_payment_uid: Option<&'a str>,
}
