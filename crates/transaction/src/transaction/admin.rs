// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::BTreeMap, mem};

use dictum_core::{
	CommitVersion,
	key::{CatalogKey, CatalogKeyRange},
	row::CatalogRow,
};
use tracing::{debug, instrument, warn};

use crate::{
	TransactionId, TransactionManager,
	change::TransactionalChanges,
	error::TransactionError,
	event::PostCommitEvent,
	pending::{Pending, PendingWrites},
	store::{Failpoint, Sequence, StorageFault},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TransactionState {
	Active,
	/// The storage engine aborted the transaction. Every access fails until
	/// `rollback()` is called.
	RollbackRequired,
}

/// A session's unit of work against the catalog.
///
/// Writes are buffered in two scopes: the current statement and the
/// transaction (all committed statements). `commit()` and `rollback()` finish
/// the unit of work and start a fresh one on the same handle.
pub struct AdminTransaction {
	id: TransactionId,
	manager: TransactionManager,
	state: TransactionState,
	statement: PendingWrites,
	pending: PendingWrites,
	pub(crate) changes: TransactionalChanges,
}

impl AdminTransaction {
	pub(crate) fn new(manager: TransactionManager) -> Self {
		Self {
			id: TransactionId::generate(),
			manager,
			state: TransactionState::Active,
			statement: PendingWrites::new(),
			pending: PendingWrites::new(),
			changes: TransactionalChanges::default(),
		}
	}

	pub fn id(&self) -> TransactionId {
		self.id
	}

	pub fn state(&self) -> TransactionState {
		self.state
	}

	/// Latest committed version; reads see it plus this transaction's writes.
	pub fn version(&self) -> CommitVersion {
		self.manager.store().version()
	}

	pub fn manager(&self) -> &TransactionManager {
		&self.manager
	}

	pub fn changes(&self) -> &TransactionalChanges {
		&self.changes
	}

	/// Whether the transaction holds writes not yet committed, in either
	/// scope.
	pub fn is_dirty(&self) -> bool {
		!self.statement.is_empty() || !self.pending.is_empty()
	}

	pub fn get(&mut self, key: &CatalogKey) -> crate::Result<Option<CatalogRow>> {
		self.ensure_active()?;
		self.check(Failpoint::Get, Some(key))?;

		if let Some(pending) = self.statement.get(key).or_else(|| self.pending.get(key)) {
			return Ok(pending.row().cloned());
		}
		Ok(self.manager.store().get(key))
	}

	pub fn contains(&mut self, key: &CatalogKey) -> crate::Result<bool> {
		Ok(self.get(key)?.is_some())
	}

	/// Committed rows in `range` merged with this transaction's writes, in key
	/// order.
	pub fn range(&mut self, range: &CatalogKeyRange) -> crate::Result<Vec<(CatalogKey, CatalogRow)>> {
		self.ensure_active()?;
		self.check(Failpoint::Get, None)?;

		let mut rows: BTreeMap<CatalogKey, CatalogRow> = self.manager.store().range(range).into_iter().collect();
		for (key, pending) in self.pending.range(range).chain(self.statement.range(range)) {
			match pending {
				Pending::Set(row) => {
					rows.insert(key.clone(), row.clone());
				}
				Pending::Remove => {
					rows.remove(key);
				}
			}
		}
		Ok(rows.into_iter().collect())
	}

	/// Takes the exclusive row lock on `key`, held until commit or rollback.
	pub fn lock(&mut self, key: &CatalogKey) -> crate::Result<()> {
		self.ensure_active()?;
		self.check(Failpoint::Lock, Some(key))?;

		let config = self.manager.config();
		let result = self.manager.locks().acquire(self.id, key, config.lock_wait_timeout, config.deadlock_detection);
		if let Err(err) = result {
			if matches!(err, TransactionError::Deadlock { .. }) {
				self.abort();
			}
			return Err(err.into());
		}
		Ok(())
	}

	#[instrument(name = "transaction::admin::set", level = "trace", skip(self, row), fields(txn_id = %self.id))]
	pub fn set(&mut self, key: &CatalogKey, row: CatalogRow) -> crate::Result<()> {
		self.lock(key)?;
		self.check(Failpoint::Set, Some(key))?;
		self.statement.insert(key.clone(), Pending::Set(row));
		Ok(())
	}

	#[instrument(name = "transaction::admin::remove", level = "trace", skip(self), fields(txn_id = %self.id))]
	pub fn remove(&mut self, key: &CatalogKey) -> crate::Result<()> {
		self.lock(key)?;
		self.check(Failpoint::Remove, Some(key))?;
		self.statement.insert(key.clone(), Pending::Remove);
		Ok(())
	}

	pub fn next_sequence(&mut self, sequence: Sequence) -> crate::Result<u64> {
		self.ensure_active()?;
		Ok(self.manager.store().next_sequence(sequence))
	}

	/// Ends the current statement, keeping its writes in the transaction.
	pub fn commit_statement(&mut self) -> crate::Result<()> {
		self.ensure_active()?;
		let statement = mem::take(&mut self.statement);
		self.pending.merge(statement);
		self.changes.mark_statement();
		Ok(())
	}

	/// Discards the writes and tracked changes of the current statement.
	/// Locks stay held until the transaction ends.
	pub fn rollback_statement(&mut self) {
		self.statement.clear();
		self.changes.truncate_statement();
		debug!(txn_id = %self.id, "statement rolled back");
	}

	/// Applies the transaction's writes, refreshes every post-commit listener
	/// and starts a new unit of work. A transaction without writes commits at
	/// the current version.
	#[instrument(name = "transaction::admin::commit", level = "info", skip(self), fields(txn_id = %self.id))]
	pub fn commit(&mut self) -> crate::Result<CommitVersion> {
		self.ensure_active()?;
		if !self.statement.is_empty() {
			return Err(TransactionError::StatementNotCommitted {
				transaction: self.id,
			}
			.into());
		}
		self.check(Failpoint::Commit, None)?;

		let pending = mem::take(&mut self.pending);
		let changes = mem::take(&mut self.changes);

		let version = if pending.is_empty() {
			self.version()
		} else {
			let manager = &self.manager;
			manager.store().apply(pending, |version| {
				manager.notify(&PostCommitEvent {
					version,
					changes,
				})
			})
		};

		self.restart();
		Ok(version)
	}

	/// Discards all writes and tracked changes, releases every lock and starts
	/// a new unit of work. Clears the rollback-required state.
	#[instrument(name = "transaction::admin::rollback", level = "debug", skip(self), fields(txn_id = %self.id))]
	pub fn rollback(&mut self) {
		self.statement.clear();
		self.pending.clear();
		self.changes.clear();
		self.restart();
	}

	fn restart(&mut self) {
		self.manager.locks().release_all(self.id);
		self.state = TransactionState::Active;
		self.id = TransactionId::generate();
	}

	/// The storage engine gave up on this transaction: its writes are gone
	/// and its locks released, but the handle stays unusable until rolled
	/// back.
	fn abort(&mut self) {
		warn!(txn_id = %self.id, "transaction aborted by storage, rollback required");
		self.statement.clear();
		self.pending.clear();
		self.changes.clear();
		self.manager.locks().release_all(self.id);
		self.state = TransactionState::RollbackRequired;
	}

	/// Fails with a rollback-required error once storage aborted the
	/// transaction.
	pub fn ensure_active(&self) -> crate::Result<()> {
		match self.state {
			TransactionState::Active => Ok(()),
			TransactionState::RollbackRequired => Err(TransactionError::RollbackRequired {
				transaction: self.id,
			}
			.into()),
		}
	}

	fn check(&mut self, point: Failpoint, key: Option<&CatalogKey>) -> crate::Result<()> {
		let Err(fault) = self.manager.store().faults().check(point) else {
			return Ok(());
		};
		let key = key.map(ToString::to_string).unwrap_or_default();
		debug!(txn_id = %self.id, ?point, ?fault, "failpoint fired");

		let err = match fault {
			StorageFault::Deadlock => {
				self.abort();
				TransactionError::Deadlock {
					transaction: self.id,
					key,
				}
			}
			StorageFault::LockWaitTimeout => TransactionError::LockWaitTimeout {
				transaction: self.id,
				key,
				waited: self.manager.config().lock_wait_timeout,
			},
			StorageFault::Io(reason) => TransactionError::Storage {
				reason,
			},
		};
		Err(err.into())
	}
}

impl Drop for AdminTransaction {
	fn drop(&mut self) {
		self.manager.locks().release_all(self.id);
	}
}
