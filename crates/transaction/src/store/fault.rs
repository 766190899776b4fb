// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::{HashMap, VecDeque};

use parking_lot::Mutex;

/// Points in the storage path where a fault can be injected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Failpoint {
	Get,
	Set,
	Remove,
	Lock,
	Commit,
}

/// A failure the storage engine reports instead of completing a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageFault {
	/// The engine chose this transaction as a deadlock victim and already
	/// discarded its writes.
	Deadlock,
	LockWaitTimeout,
	Io(String),
}

/// One-shot faults queued per failpoint. Every hit of a failpoint consumes
/// one queue entry; `None` entries let the hit pass.
#[derive(Debug, Default)]
pub struct Faults {
	armed: Mutex<HashMap<Failpoint, VecDeque<Option<StorageFault>>>>,
}

impl Faults {
	pub fn arm(&self, point: Failpoint, fault: StorageFault) {
		self.armed.lock().entry(point).or_default().push_back(Some(fault));
	}

	/// Lets `skip` hits of `point` pass, then fails the next one.
	pub fn arm_after(&self, point: Failpoint, skip: usize, fault: StorageFault) {
		let mut armed = self.armed.lock();
		let queue = armed.entry(point).or_default();
		queue.extend(std::iter::repeat_n(None, skip));
		queue.push_back(Some(fault));
	}

	pub fn disarm_all(&self) {
		self.armed.lock().clear();
	}

	pub fn check(&self, point: Failpoint) -> Result<(), StorageFault> {
		let mut armed = self.armed.lock();
		let Some(queue) = armed.get_mut(&point) else {
			return Ok(());
		};
		match queue.pop_front() {
			Some(Some(fault)) => Err(fault),
			_ => Ok(()),
		}
	}
}
