// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::interface::catalog::{namespace::NamespaceDef, routine::RoutineDef};
use tracing::instrument;

use crate::DictionaryClient;

#[instrument(name = "catalog::routine::list_routines", level = "trace", skip(client, schema), fields(namespace = %schema.name))]
pub fn list_routines(client: &mut DictionaryClient<'_>, schema: &NamespaceDef) -> crate::Result<Vec<RoutineDef>> {
	client.list(schema.id)
}
