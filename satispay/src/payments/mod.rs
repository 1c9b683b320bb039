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

//! Payments of the G Business API.

mod create;
pub use create::{CreatePaymentPayload, CreatePaymentRequest, Flow};

mod list;
pub use list::ListPaymentsRequest;

mod types;
pub use types::*;

mod update;
pub use update::{UpdateAction, UpdatePaymentRequest};

use crate::constants::{PATH_SEGMENT_ENCODE_SET, PAYMENTS_PATH};
use crate::execute::ApiRequest;
use crate::Client;
use http::Method;
use log::debug;
use percent_encoding::utf8_percent_encode;
use satispay_core::{Error, Result};

/// Payments handle, borrowed from a [`Client`].
#[derive(Debug, Clone, Copy)]
pub struct Payments<'a> {
    client: &'a Client,
}

impl<'a> Payments<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Create a payment.
    ///
    /// Creation is not idempotent. When the outcome of a call is unknown,
    /// resolve it with [`UpdateAction::CancelOrRefund`] instead of calling
    /// `create` again.
    pub async fn create(&self, req: &CreatePaymentRequest) -> Result<Payment> {
        let req = ApiRequest::new(Method::POST, PAYMENTS_PATH).with_json(&req.to_payload()?)?;
        let payment: Payment = self.client.execute(req).await?;

        debug!("payment {} created with status {:?}", payment.id, payment.status);
        Ok(payment)
    }

    /// Get a payment by id.
    pub async fn get(&self, id: &str) -> Result<Payment> {
        let req = ApiRequest::new(Method::GET, payment_path(id)?);
        self.client.execute(req).await
    }

    /// List one page of payments.
    ///
    /// Use [`ListPaymentsRequest::next_page`] to walk the following pages.
    pub async fn list(&self, req: &ListPaymentsRequest) -> Result<ListPaymentsResponse> {
        let req = ApiRequest::new(Method::GET, req.path()?);
        self.client.execute(req).await
    }

    /// Accept, cancel or refund a payment.
    pub async fn update(&self, req: &UpdatePaymentRequest) -> Result<Payment> {
        let req = ApiRequest::new(Method::PUT, payment_path(&req.id)?).with_json(&req.to_payload())?;
        self.client.execute(req).await
    }
}

fn payment_path(id: &str) -> Result<String> {
    if id.is_empty() {
        return Err(Error::request_invalid("payment id must not be empty"));
    }

    Ok(format!(
        "{PAYMENTS_PATH}/{}",
        utf8_percent_encode(id, &PATH_SEGMENT_ENCODE_SET)
    ))
}
