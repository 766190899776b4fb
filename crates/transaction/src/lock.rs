// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	collections::HashMap,
	time::{Duration, Instant},
};

use dictum_core::key::CatalogKey;
use parking_lot::{Condvar, Mutex};
use tracing::{debug, warn};

use crate::{TransactionId, error::TransactionError};

#[derive(Debug, Default)]
struct LockTable {
	owners: HashMap<CatalogKey, TransactionId>,
	/// Edge `a -> b`: transaction `a` is blocked on a row held by `b`.
	waits_for: HashMap<TransactionId, TransactionId>,
}

impl LockTable {
	/// Whether letting `waiter` wait on `owner` closes a cycle.
	fn closes_cycle(&self, waiter: TransactionId, owner: TransactionId) -> bool {
		let mut current = owner;
		for _ in 0..=self.waits_for.len() {
			if current == waiter {
				return true;
			}
			match self.waits_for.get(&current) {
				Some(next) => current = *next,
				None => return false,
			}
		}
		false
	}
}

/// Exclusive row locks held until the owning transaction commits or rolls
/// back.
#[derive(Debug, Default)]
pub struct LockManager {
	table: Mutex<LockTable>,
	released: Condvar,
}

impl LockManager {
	pub fn new() -> Self {
		Self::default()
	}

	/// Blocks until `transaction` owns `key`. Re-acquiring a held lock is a
	/// no-op.
	pub fn acquire(
		&self,
		transaction: TransactionId,
		key: &CatalogKey,
		timeout: Duration,
		deadlock_detection: bool,
	) -> Result<(), TransactionError> {
		let started = Instant::now();
		let deadline = started + timeout;
		let mut table = self.table.lock();

		loop {
			let owner = match table.owners.get(key) {
				None => {
					table.owners.insert(key.clone(), transaction);
					table.waits_for.remove(&transaction);
					return Ok(());
				}
				Some(owner) if *owner == transaction => {
					table.waits_for.remove(&transaction);
					return Ok(());
				}
				Some(owner) => *owner,
			};

			if deadlock_detection && table.closes_cycle(transaction, owner) {
				table.waits_for.remove(&transaction);
				warn!(%transaction, %key, "deadlock detected, aborting waiter");
				return Err(TransactionError::Deadlock {
					transaction,
					key: key.to_string(),
				});
			}

			table.waits_for.insert(transaction, owner);
			debug!(%transaction, %owner, %key, "waiting for row lock");

			let timed_out = self.released.wait_until(&mut table, deadline).timed_out();
			if timed_out && table.owners.get(key).is_some_and(|o| *o != transaction) {
				table.waits_for.remove(&transaction);
				warn!(%transaction, %key, "lock wait timeout");
				return Err(TransactionError::LockWaitTimeout {
					transaction,
					key: key.to_string(),
					waited: started.elapsed(),
				});
			}
		}
	}

	pub fn is_locked_by(&self, transaction: TransactionId, key: &CatalogKey) -> bool {
		self.table.lock().owners.get(key) == Some(&transaction)
	}

	/// Releases every lock held by `transaction` and wakes all waiters.
	pub fn release_all(&self, transaction: TransactionId) {
		let mut table = self.table.lock();
		let before = table.owners.len();
		table.owners.retain(|_, owner| *owner != transaction);
		table.waits_for.remove(&transaction);
		let released = before - table.owners.len();
		drop(table);

		if released > 0 {
			debug!(%transaction, released, "released row locks");
			self.released.notify_all();
		}
	}
}
