// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::time::Duration;

use dictum_type::{
	error::{Diagnostic, Error, IntoDiagnostic},
	fragment::Fragment,
};

use crate::TransactionId;

pub const DEADLOCK: &str = "TXN_005";
pub const LOCK_WAIT_TIMEOUT: &str = "TXN_006";
pub const ROLLBACK_REQUIRED: &str = "TXN_011";
pub const STATEMENT_NOT_COMMITTED: &str = "TXN_012";
pub const STORAGE_FAILURE: &str = "STORE_001";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransactionError {
	#[error("deadlock detected while transaction {transaction} waited for `{key}`")]
	Deadlock {
		transaction: TransactionId,
		key: String,
	},

	#[error("lock wait timeout exceeded for `{key}` after {waited:?}")]
	LockWaitTimeout {
		transaction: TransactionId,
		key: String,
		waited: Duration,
	},

	#[error("transaction {transaction} must be rolled back before it can be used again")]
	RollbackRequired {
		transaction: TransactionId,
	},

	#[error("transaction {transaction} cannot commit while a statement is still open")]
	StatementNotCommitted {
		transaction: TransactionId,
	},

	#[error("storage failure: {reason}")]
	Storage {
		reason: String,
	},
}

impl IntoDiagnostic for TransactionError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			TransactionError::Deadlock {
				key,
				..
			} => Diagnostic {
				code: DEADLOCK.to_string(),
				statement: None,
				message,
				fragment: Fragment::internal(key),
				label: Some("chosen as deadlock victim".to_string()),
				help: Some("roll back the statement and the transaction, then retry".to_string()),
				notes: vec![
					"the storage engine already discarded the writes of this transaction".to_string(),
					"no further reads are allowed through this transaction until it is rolled back"
						.to_string(),
				],
				cause: None,
			},

			TransactionError::LockWaitTimeout {
				key,
				..
			} => Diagnostic {
				code: LOCK_WAIT_TIMEOUT.to_string(),
				statement: None,
				message,
				fragment: Fragment::internal(key),
				label: Some("row is locked by another transaction".to_string()),
				help: Some("retry once the other transaction has finished".to_string()),
				notes: vec![],
				cause: None,
			},

			TransactionError::RollbackRequired {
				..
			} => Diagnostic {
				code: ROLLBACK_REQUIRED.to_string(),
				statement: None,
				message,
				fragment: Fragment::None,
				label: None,
				help: Some("roll back the statement and the transaction before any further access".to_string()),
				notes: vec![],
				cause: None,
			},

			TransactionError::StatementNotCommitted {
				..
			} => Diagnostic {
				code: STATEMENT_NOT_COMMITTED.to_string(),
				statement: None,
				message,
				fragment: Fragment::None,
				label: None,
				help: Some("commit or roll back the statement first".to_string()),
				notes: vec![],
				cause: None,
			},

			TransactionError::Storage {
				..
			} => Diagnostic {
				code: STORAGE_FAILURE.to_string(),
				statement: None,
				message,
				fragment: Fragment::None,
				label: None,
				help: Some("check the storage engine and retry".to_string()),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<TransactionError> for Error {
	fn from(err: TransactionError) -> Self {
		Error(err.into_diagnostic())
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_deadlock_diagnostic() {
		let err: Error = TransactionError::Deadlock {
			transaction: TransactionId::generate(),
			key: "routine/1025/procedure/p1".to_string(),
		}
		.into();

		assert_eq!(err.code, DEADLOCK);
		assert_eq!(err.fragment.text(), "routine/1025/procedure/p1");
		assert!(err.message.contains("deadlock"));
	}

	#[test]
	fn test_storage_diagnostic() {
		let err: Error = TransactionError::Storage {
			reason: "disk full".to_string(),
		}
		.into();

		assert_eq!(err.code, STORAGE_FAILURE);
		assert_eq!(err.message, "storage failure: disk full");
	}
}
