// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{fmt, sync::Arc};

use parking_lot::RwLock;
use tracing::{instrument, trace};

use crate::{
	TransactionConfig,
	event::{PostCommitEvent, PostCommitListener},
	lock::LockManager,
	store::MemoryStore,
	transaction::admin::AdminTransaction,
};

struct Inner {
	store: MemoryStore,
	locks: LockManager,
	config: TransactionConfig,
	listeners: RwLock<Vec<Arc<dyn PostCommitListener>>>,
}

/// Shared entry point for sessions: owns the storage, the lock manager and
/// the post-commit listeners.
#[derive(Clone)]
pub struct TransactionManager(Arc<Inner>);

impl fmt::Debug for TransactionManager {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TransactionManager")
			.field("store", &self.0.store)
			.field("config", &self.0.config)
			.field("listeners", &self.0.listeners.read().len())
			.finish()
	}
}

impl TransactionManager {
	pub fn new(store: MemoryStore, config: TransactionConfig) -> Self {
		Self(Arc::new(Inner {
			store,
			locks: LockManager::new(),
			config,
			listeners: RwLock::new(Vec::new()),
		}))
	}

	pub fn testing() -> Self {
		Self::new(MemoryStore::new(), TransactionConfig::default())
	}

	#[instrument(name = "transaction::manager::begin_admin", level = "trace", skip(self))]
	pub fn begin_admin(&self) -> AdminTransaction {
		AdminTransaction::new(self.clone())
	}

	pub fn store(&self) -> &MemoryStore {
		&self.0.store
	}

	pub fn config(&self) -> &TransactionConfig {
		&self.0.config
	}

	pub fn register_listener(&self, listener: Arc<dyn PostCommitListener>) {
		self.0.listeners.write().push(listener);
	}

	pub(crate) fn locks(&self) -> &LockManager {
		&self.0.locks
	}

	pub(crate) fn notify(&self, event: &PostCommitEvent) {
		let listeners = self.0.listeners.read().clone();
		trace!(version = %event.version, listeners = listeners.len(), "post commit");
		for listener in listeners {
			listener.on_commit(event);
		}
	}
}
