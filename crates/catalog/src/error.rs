// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use dictum_core::interface::catalog::routine::RoutineKind;
use dictum_type::{
	error::{Diagnostic, Error, IntoDiagnostic},
	fragment::Fragment,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CatalogObjectKind {
	Namespace,
	Procedure,
	Function,
}

impl Display for CatalogObjectKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			CatalogObjectKind::Namespace => f.write_str("namespace"),
			CatalogObjectKind::Procedure => f.write_str("procedure"),
			CatalogObjectKind::Function => f.write_str("function"),
		}
	}
}

impl From<RoutineKind> for CatalogObjectKind {
	fn from(kind: RoutineKind) -> Self {
		match kind {
			RoutineKind::Procedure => CatalogObjectKind::Procedure,
			RoutineKind::Function => CatalogObjectKind::Function,
		}
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
	#[error("{kind} `{namespace}.{name}` already exists")]
	AlreadyExists {
		kind: CatalogObjectKind,
		namespace: String,
		name: String,
		fragment: Fragment,
	},

	#[error("{kind} `{namespace}.{name}` does not exist")]
	NotFound {
		kind: CatalogObjectKind,
		namespace: String,
		name: String,
		fragment: Fragment,
	},

	#[error("invalid {kind} name `{name}`: {reason}")]
	InvalidName {
		kind: CatalogObjectKind,
		name: String,
		reason: String,
	},

	#[error("{kind} name `{name}` is longer than {max} characters")]
	NameTooLong {
		kind: CatalogObjectKind,
		name: String,
		max: usize,
	},

	#[error("comment for {kind} `{name}` is {length} characters, at most {max} are allowed")]
	CommentTooLong {
		kind: CatalogObjectKind,
		name: String,
		length: usize,
		max: usize,
	},

	#[error("{kind} `{name}`: {reason}")]
	InvalidCharacteristic {
		kind: CatalogObjectKind,
		name: String,
		reason: String,
	},

	#[error("invalid definer `{definer}`")]
	InvalidDefiner {
		definer: String,
	},
}

impl IntoDiagnostic for CatalogError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			CatalogError::AlreadyExists {
				kind,
				fragment,
				..
			} => {
				let code = match kind {
					CatalogObjectKind::Namespace => "CA_001",
					CatalogObjectKind::Procedure | CatalogObjectKind::Function => "CA_041",
				};
				Diagnostic {
					code: code.to_string(),
					statement: None,
					message,
					fragment,
					label: Some(format!("duplicate {kind} definition")),
					help: Some(format!("choose a different name or drop the existing {kind} first")),
					notes: vec![],
					cause: None,
				}
			}

			CatalogError::NotFound {
				kind,
				fragment,
				..
			} => {
				let code = match kind {
					CatalogObjectKind::Namespace => "CA_002",
					CatalogObjectKind::Procedure | CatalogObjectKind::Function => "CA_040",
				};
				Diagnostic {
					code: code.to_string(),
					statement: None,
					message,
					fragment,
					label: Some(format!("unknown {kind}")),
					help: Some(format!("make sure the {kind} exists and the name is spelled correctly")),
					notes: vec![],
					cause: None,
				}
			}

			CatalogError::InvalidName {
				name,
				..
			} => Diagnostic {
				code: "CA_042".to_string(),
				statement: None,
				message,
				fragment: Fragment::internal(name),
				label: Some("invalid identifier".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},

			CatalogError::NameTooLong {
				name,
				max,
				..
			} => Diagnostic {
				code: "CA_043".to_string(),
				statement: None,
				message,
				fragment: Fragment::internal(name),
				label: Some("identifier too long".to_string()),
				help: Some(format!("use a name of at most {max} characters")),
				notes: vec![],
				cause: None,
			},

			CatalogError::CommentTooLong {
				..
			} => Diagnostic {
				code: "CA_044".to_string(),
				statement: None,
				message,
				fragment: Fragment::None,
				label: Some("comment too long".to_string()),
				help: Some("shorten the COMMENT characteristic".to_string()),
				notes: vec![],
				cause: None,
			},

			CatalogError::InvalidCharacteristic {
				name,
				..
			} => Diagnostic {
				code: "CA_045".to_string(),
				statement: None,
				message,
				fragment: Fragment::internal(name),
				label: Some("invalid routine characteristics".to_string()),
				help: Some("functions must declare RETURNS, procedures must not".to_string()),
				notes: vec![],
				cause: None,
			},

			CatalogError::InvalidDefiner {
				definer,
			} => Diagnostic {
				code: "CA_046".to_string(),
				statement: None,
				message,
				fragment: Fragment::internal(definer),
				label: Some("invalid definer".to_string()),
				help: Some("specify the definer as `user@host`".to_string()),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<CatalogError> for Error {
	fn from(err: CatalogError) -> Self {
		Error(err.into_diagnostic())
	}
}
