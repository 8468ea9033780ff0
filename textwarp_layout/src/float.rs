// Copyright 2025 the textwarp Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! Trigonometry on `f64` is not available in `core`. This trait dispatches to
//! `libm` when the `std` feature is off.

/// Float math helpers for `f64` in `no_std` mode.
pub(crate) trait FloatExt {
    fn sin(self) -> Self;
    fn tan(self) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn sin(self) -> Self {
        libm::sin(self)
    }

    fn tan(self) -> Self {
        libm::tan(self)
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("textwarp_layout requires either the `std` or `libm` feature");
