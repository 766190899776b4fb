// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::time::Duration;

/// Configuration for the transaction manager.
#[derive(Debug, Clone)]
pub struct TransactionConfig {
	/// How long a transaction waits for a row lock held by another
	/// transaction before giving up.
	pub lock_wait_timeout: Duration,
	/// Whether lock requests check the wait-for graph for cycles. Without
	/// detection, deadlocks only resolve through the lock wait timeout.
	pub deadlock_detection: bool,
}

impl Default for TransactionConfig {
	fn default() -> Self {
		Self {
			lock_wait_timeout: Duration::from_secs(50),
			deadlock_detection: true,
		}
	}
}

impl TransactionConfig {
	pub fn with_lock_wait_timeout(mut self, timeout: Duration) -> Self {
		self.lock_wait_timeout = timeout;
		self
	}

	pub fn with_deadlock_detection(mut self, enabled: bool) -> Self {
		self.deadlock_detection = enabled;
		self
	}
}
