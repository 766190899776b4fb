// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::interface::catalog::{namespace::NamespaceDef, routine::RoutineDef};
use tracing::{debug, instrument};

use crate::{
	DictionaryClient,
	routine::{CommitMode, with_internal_commit},
};

/// Removes `routine`.
///
/// With [`CommitMode::DeferredCommit`] the removal stays in the open
/// statement and any failure is returned untouched: the caller has to roll
/// back the statement and the transaction before issuing further dictionary
/// operations, read-only ones included.
#[instrument(name = "catalog::routine::remove_routine", level = "debug", skip(client, routine), fields(id = %routine.id, name = %routine.name))]
pub fn remove_routine(client: &mut DictionaryClient<'_>, routine: &RoutineDef, mode: CommitMode) -> crate::Result<()> {
	match mode {
		CommitMode::InternalCommit => with_internal_commit(client, |client| client.delete(routine)),
		CommitMode::DeferredCommit => client.delete(routine),
	}
}

/// Removes every routine of `schema` and returns how many were removed.
#[instrument(name = "catalog::routine::remove_namespace_routines", level = "debug", skip(client, schema), fields(namespace = %schema.name))]
pub fn remove_namespace_routines(
	client: &mut DictionaryClient<'_>,
	schema: &NamespaceDef,
	mode: CommitMode,
) -> crate::Result<usize> {
	let removed = match mode {
		CommitMode::InternalCommit => with_internal_commit(client, |client| remove_all(client, schema))?,
		CommitMode::DeferredCommit => remove_all(client, schema)?,
	};
	debug!(removed, "namespace routines removed");
	Ok(removed)
}

fn remove_all(client: &mut DictionaryClient<'_>, schema: &NamespaceDef) -> crate::Result<usize> {
	let routines = client.list(schema.id)?;
	for routine in &routines {
		client.delete(routine)?;
	}
	Ok(routines.len())
}
