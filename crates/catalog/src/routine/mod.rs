// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Stored routine DDL.
//!
//! Creation and alteration always finish the ambient unit of work: they
//! commit the statement and the transaction on success and roll both back on
//! failure. Removal lets the caller choose through [`CommitMode`].

use dictum_type::Error;
use tracing::debug;

use crate::DictionaryClient;

mod alter;
mod create;
mod find;
mod list;
mod remove;
mod validate;

pub use alter::alter_routine;
pub use create::create_routine;
pub use find::find_routine;
pub use list::list_routines;
pub use remove::{remove_namespace_routines, remove_routine};

/// Who finalises the unit of work of a removal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CommitMode {
	/// Commit statement and transaction on success, roll both back on
	/// failure.
	InternalCommit,
	/// Leave the unit of work open. On failure nothing is rolled back: the
	/// caller must roll back the statement and the transaction before using
	/// the dictionary again.
	DeferredCommit,
}

/// Failure classes of the routine operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RoutineFailure {
	NotFound,
	AlreadyExists,
	Validation,
	/// Storage, locking or transaction failure, including internal errors.
	Storage,
}

impl RoutineFailure {
	pub fn classify(err: &Error) -> Self {
		match err.code.as_str() {
			"CA_002" | "CA_040" => RoutineFailure::NotFound,
			"CA_001" | "CA_041" => RoutineFailure::AlreadyExists,
			"CA_042" | "CA_043" | "CA_044" | "CA_045" | "CA_046" => RoutineFailure::Validation,
			_ => RoutineFailure::Storage,
		}
	}
}

/// Finishes the unit of work after a successful mutation.
fn commit(client: &mut DictionaryClient<'_>) -> crate::Result<()> {
	let txn = client.transaction();
	txn.commit_statement()?;
	txn.commit()?;
	Ok(())
}

/// Rolls back statement and transaction after a failed mutation.
fn rollback(client: &mut DictionaryClient<'_>, err: &Error) {
	let txn = client.transaction();
	debug!(txn_id = %txn.id(), code = %err.code, "rolling back after failed routine ddl");
	txn.rollback_statement();
	txn.rollback();
}

/// Runs `f`, then commits; on any failure rolls back and returns the first
/// error.
fn with_internal_commit<T>(
	client: &mut DictionaryClient<'_>,
	f: impl FnOnce(&mut DictionaryClient<'_>) -> crate::Result<T>,
) -> crate::Result<T> {
	let result = f(client).and_then(|value| commit(client).map(|_| value));
	if let Err(err) = &result {
		rollback(client, err);
	}
	result
}

#[cfg(test)]
pub mod tests {
	use dictum_type::internal_error;

	use super::*;
	use crate::error::{CatalogError, CatalogObjectKind};

	#[test]
	fn test_classify() {
		let not_found: Error = CatalogError::NotFound {
			kind: CatalogObjectKind::Procedure,
			namespace: "db1".to_string(),
			name: "p1".to_string(),
			fragment: Default::default(),
		}
		.into();
		let invalid: Error = CatalogError::InvalidDefiner {
			definer: "@%".to_string(),
		}
		.into();

		assert_eq!(RoutineFailure::classify(&not_found), RoutineFailure::NotFound);
		assert_eq!(RoutineFailure::classify(&invalid), RoutineFailure::Validation);
		assert_eq!(RoutineFailure::classify(&internal_error!("broken")), RoutineFailure::Storage);
	}
}
