// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Errors produced while configuring a projection.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProjectionError {
    /// No built-in projection is registered under this name.
    #[error("unknown projection `{name}` (expected `cartesian` or `polar`)")]
    UnknownProjection {
        /// The name that failed to resolve.
        name: String,
    },
}
