// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Wraps a diagnostic into an [`Error`](crate::Error).
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::Error($crate::error::IntoDiagnostic::into_diagnostic($diagnostic))
	};
}

/// Returns early with an [`Error`](crate::Error) built from a diagnostic.
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::error!($diagnostic).into())
	};
}

/// Builds an `INTERNAL_ERROR` diagnostic from a format string.
#[macro_export]
macro_rules! internal {
	($($arg:tt)*) => {
		$crate::error::diagnostic::internal::internal(format!($($arg)*))
	};
}

#[macro_export]
macro_rules! internal_error {
	($($arg:tt)*) => {
		$crate::Error($crate::internal!($($arg)*))
	};
}

#[macro_export]
macro_rules! return_internal_error {
	($($arg:tt)*) => {
		return Err($crate::internal_error!($($arg)*).into())
	};
}
