// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::Diagnostic;
use crate::fragment::Fragment;

/// Invariant violation inside the dictionary; never caused by user input.
pub fn internal(reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "INTERNAL_ERROR".to_string(),
		statement: None,
		message: reason.into(),
		fragment: Fragment::None,
		label: None,
		help: Some("this is a bug, please report it together with the statement that triggered it".to_string()),
		notes: vec![],
		cause: None,
	}
}
