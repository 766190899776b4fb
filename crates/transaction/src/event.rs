// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::CommitVersion;

use crate::change::TransactionalChanges;

/// Emitted once per committed transaction that wrote at least one row. The
/// batch is applied but its version is not yet observable by other sessions.
#[derive(Debug)]
pub struct PostCommitEvent {
	pub version: CommitVersion,
	pub changes: TransactionalChanges,
}

/// Listeners run while storage excludes readers and must not read the store.
pub trait PostCommitListener: Send + Sync {
	fn on_commit(&self, event: &PostCommitEvent);
}
