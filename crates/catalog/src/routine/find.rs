// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::{
	interface::catalog::routine::{RoutineDef, RoutineKind, RoutineName},
	key::RoutineKey,
};
use tracing::instrument;

use crate::{DictionaryClient, routine::validate::validate_routine_name};

/// Resolves a routine by qualified name and kind. `Ok(None)` when either the
/// namespace or the routine does not exist.
#[instrument(name = "catalog::routine::find_by_name", level = "trace", skip(client))]
pub fn find_routine(
	client: &mut DictionaryClient<'_>,
	name: &RoutineName,
	kind: RoutineKind,
) -> crate::Result<Option<RoutineDef>> {
	validate_routine_name(name, kind)?;

	let Some(namespace) = client.find_namespace_by_name(&name.namespace)? else {
		return Ok(None);
	};

	client.lookup(&RoutineKey::new(namespace.id, kind, &name.name))
}

#[cfg(test)]
pub mod tests {
	use dictum_core::interface::catalog::routine::{Definer, RoutineKind, RoutineName};

	use super::*;
	use crate::{
		routine::create_routine,
		test_utils::{compiled_procedure, create_namespace, create_test_catalog},
	};

	#[test]
	fn test_find_is_case_insensitive() {
		let (manager, catalog) = create_test_catalog();
		let mut txn = manager.begin_admin();
		let db1 = create_namespace(&catalog, &mut txn, "db1");
		let mut client = DictionaryClient::new(&catalog, &mut txn);
		let created =
			create_routine(&mut client, &db1, &compiled_procedure("db1", "MyProc"), &Definer::new("u1", "%"))
				.unwrap();

		let found = find_routine(&mut client, &RoutineName::new("DB1", "myproc"), RoutineKind::Procedure).unwrap();

		assert_eq!(found.as_ref().map(|r| r.name.as_str()), Some("MyProc"));
		assert_eq!(found, Some(created));
	}

	#[test]
	fn test_find_in_unknown_namespace() {
		let (manager, catalog) = create_test_catalog();
		let mut txn = manager.begin_admin();
		let mut client = DictionaryClient::new(&catalog, &mut txn);

		let found = find_routine(&mut client, &RoutineName::new("nope", "p1"), RoutineKind::Procedure).unwrap();
		assert_eq!(found, None);
	}

	#[test]
	fn test_find_rejects_invalid_name() {
		let (manager, catalog) = create_test_catalog();
		let mut txn = manager.begin_admin();
		let mut client = DictionaryClient::new(&catalog, &mut txn);

		let err = find_routine(&mut client, &RoutineName::new("db1", ""), RoutineKind::Function).unwrap_err();
		assert_eq!(err.code, "CA_042");
	}
}
