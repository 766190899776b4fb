// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::fragment::Fragment;

pub mod internal;
pub mod render;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub statement: Option<String>,
	pub message: String,
	pub fragment: Fragment,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!("{}", self.code))
	}
}

/// Converts a subsystem error into the diagnostic that is reported to users.
pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_diagnostic_serializes_to_json() {
		let diagnostic = Diagnostic {
			code: "TXN_005".to_string(),
			message: "deadlock detected".to_string(),
			fragment: Fragment::internal("db1.p1"),
			notes: vec!["roll back the transaction".to_string()],
			..Diagnostic::default()
		};

		let json = serde_json::to_string(&diagnostic).unwrap();
		assert!(json.contains("\"code\":\"TXN_005\""));

		let back: Diagnostic = serde_json::from_str(&json).unwrap();
		assert_eq!(back, diagnostic);
	}
}
