// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_transaction::transaction::AdminTransaction;

use crate::MaterializedCatalog;

mod namespace;
mod routine;

pub(crate) use namespace::load_namespaces;
pub(crate) use routine::load_routines;

/// Loads catalog data from storage and populates a MaterializedCatalog
pub struct MaterializedCatalogLoader;

impl MaterializedCatalogLoader {
	/// Load all catalog data from storage into the MaterializedCatalog
	pub fn load_all(txn: &mut AdminTransaction, catalog: &MaterializedCatalog) -> crate::Result<()> {
		load_namespaces(txn, catalog)?;
		load_routines(txn, catalog)?;
		Ok(())
	}
}
