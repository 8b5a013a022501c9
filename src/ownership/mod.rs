// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Single-ownership handles.
//!
//! `Owned<T>` is the handle through which track clones travel from the
//! moment they are allocated until a playlist adopts them. It never hands
//! out a value it does not hold: every access on an empty handle returns
//! an `EmptyAccessError` instead of panicking.

pub mod owned;

pub use owned::{EmptyAccessError, Owned};
