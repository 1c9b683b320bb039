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

/// Action applied to an existing payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdateAction {
    /// Accept a pending or authorized payment.
    Accept,
    /// Cancel a pending or authorized payment.
    Cancel,
    /// Cancel the payment, or refund it if it was already accepted.
    CancelOrRefund,
}

/// Caller input to update a payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePaymentRequest {
    /// Id of the payment to update.
    pub id: String,
    /// Action to apply.
    pub action: UpdateAction,
    /// Amount to accept, lower than the authorized one for partial captures.
    pub amount_unit: Option<u64>,
}

impl UpdatePaymentRequest {
    /// Create a request applying `action` to the payment `id`.
    pub fn new(id: impl Into<String>, action: UpdateAction) -> Self {
        Self {
            id: id.into(),
            action,
            amount_unit: None,
        }
    }

    /// Set the amount, in cents.
    pub fn with_amount_unit(mut self, amount_unit: u64) -> Self {
        self.amount_unit = Some(amount_unit);
        self
    }

    pub(crate) fn to_payload(&self) -> UpdatePaymentPayload {
        UpdatePaymentPayload {
            action: self.action,
            amount_unit: self.amount_unit,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdatePaymentPayload {
    action: UpdateAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount_unit: Option<u64>,
}
