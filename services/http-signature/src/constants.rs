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

/// Prefix of the `Digest` header value.
pub const DIGEST_PREFIX: &str = "SHA-256=";
/// Algorithm advertised in the `Authorization` header.
pub const SIGNATURE_ALGORITHM: &str = "rsa-sha256";
/// Headers covered by the signature, in signing order.
pub const SIGNED_HEADERS: &str = "(request-target) host date digest";

/// Header carrying the body digest.
pub const DIGEST: &str = "digest";

/// Environment variables for the signing credential
pub const SATISPAY_KEY_ID: &str = "SATISPAY_KEY_ID";
pub const SATISPAY_PRIVATE_KEY: &str = "SATISPAY_PRIVATE_KEY";

/// Modulus size used by [`crate::generate_key_pair`] callers by default.
pub const DEFAULT_KEY_BITS: usize = 4096;
/// Smallest modulus accepted for new key pairs.
pub const MIN_KEY_BITS: usize = 2048;
