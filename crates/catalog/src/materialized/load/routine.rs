// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_transaction::transaction::AdminTransaction;
use tracing::debug;

use crate::{CatalogStore, MaterializedCatalog};

/// Load all routines from storage
pub(crate) fn load_routines(txn: &mut AdminTransaction, catalog: &MaterializedCatalog) -> crate::Result<()> {
	let version = txn.version();
	let routines = CatalogStore::list_all_routines(txn)?;
	debug!(count = routines.len(), %version, "loading routines");
	for routine in routines {
		catalog.set_routine(routine.id, version, Some(routine));
	}
	Ok(())
}
