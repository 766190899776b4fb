// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The piece of user input a diagnostic points at.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Fragment {
	#[default]
	None,
	/// Text produced by the system rather than typed by the user, e.g. a
	/// routine name taken from an already compiled routine.
	Internal {
		text: String,
	},
	Statement {
		text: String,
		line: u32,
		column: u32,
	},
}

impl Fragment {
	pub fn internal(text: impl Into<String>) -> Self {
		Fragment::Internal {
			text: text.into(),
		}
	}

	pub fn statement(text: impl Into<String>, line: u32, column: u32) -> Self {
		Fragment::Statement {
			text: text.into(),
			line,
			column,
		}
	}

	pub fn text(&self) -> &str {
		match self {
			Fragment::None => "",
			Fragment::Internal {
				text,
			} => text,
			Fragment::Statement {
				text,
				..
			} => text,
		}
	}

	pub fn is_none(&self) -> bool {
		matches!(self, Fragment::None)
	}
}

impl Display for Fragment {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.text())
	}
}

impl From<&str> for Fragment {
	fn from(value: &str) -> Self {
		Fragment::internal(value)
	}
}

impl From<String> for Fragment {
	fn from(value: String) -> Self {
		Fragment::internal(value)
	}
}
