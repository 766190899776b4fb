// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::interface::catalog::{
	namespace::NamespaceDef,
	routine::{CompiledRoutine, Definer, RoutineDef},
};
use tracing::{debug, instrument};

use crate::{
	DictionaryClient,
	routine::{
		validate::{validate_compiled, validate_target_namespace},
		with_internal_commit,
	},
	store::routine::RoutineToCreate,
};

/// Persists `compiled` in `schema` and commits. On failure the statement and
/// the transaction are rolled back before returning; invalid input fails
/// before the transaction is touched, including a routine qualified with a
/// namespace other than `schema`.
#[instrument(
	name = "catalog::routine::create_routine",
	level = "debug",
	skip_all,
	fields(routine = %compiled.name, kind = %compiled.kind, definer = %definer)
)]
pub fn create_routine(
	client: &mut DictionaryClient<'_>,
	schema: &NamespaceDef,
	compiled: &CompiledRoutine,
	definer: &Definer,
) -> crate::Result<RoutineDef> {
	validate_compiled(client.catalog().config(), compiled, definer)?;
	validate_target_namespace(compiled, schema)?;

	let to_create = RoutineToCreate {
		fragment: None,
		namespace: schema.clone(),
		name: compiled.name.name.clone(),
		kind: compiled.kind,
		definer: definer.clone(),
		characteristics: compiled.characteristics.clone(),
		parameters: compiled.parameters.clone(),
		returns: compiled.returns.clone(),
		body: compiled.body.clone(),
		sql_mode: compiled.sql_mode,
	};

	let routine = with_internal_commit(client, |client| client.store(to_create))?;
	debug!(id = %routine.id, "routine created");
	Ok(routine)
}
