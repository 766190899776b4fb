// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_transaction::event::{PostCommitEvent, PostCommitListener};
use tracing::trace;

use crate::materialized::MaterializedCatalog;

impl PostCommitListener for MaterializedCatalog {
	fn on_commit(&self, event: &PostCommitEvent) {
		let version = event.version;

		for change in &event.changes.namespace_def {
			if let Some(namespace) = change.post.as_ref().or(change.pre.as_ref()) {
				self.set_namespace(namespace.id, version, change.post.clone());
			}
		}

		for change in &event.changes.routine_def {
			if let Some(routine) = change.post.as_ref().or(change.pre.as_ref()) {
				self.set_routine(routine.id, version, change.post.clone());
			}
		}

		trace!(
			%version,
			namespaces = event.changes.namespace_def.len(),
			routines = event.changes.routine_def.len(),
			"materialized catalog refreshed"
		);
	}
}
