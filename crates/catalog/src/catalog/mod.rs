// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use dictum_transaction::TransactionManager;
use tracing::{info, instrument};

use crate::{CatalogConfig, MaterializedCatalog, materialized::load::MaterializedCatalogLoader};

pub mod namespace;
pub mod routine;

/// High level catalog access. Lookups consult the transaction's own changes,
/// then the materialized catalog, then storage.
#[derive(Debug, Clone)]
pub struct Catalog {
	pub(crate) materialized: MaterializedCatalog,
	pub(crate) config: CatalogConfig,
}

impl Catalog {
	/// Loads the committed catalog from storage and subscribes the
	/// materialized catalog to every later commit of `manager`.
	#[instrument(name = "catalog::open", level = "info", skip_all)]
	pub fn open(manager: &TransactionManager, config: CatalogConfig) -> crate::Result<Self> {
		let materialized = MaterializedCatalog::new();

		let mut txn = manager.begin_admin();
		MaterializedCatalogLoader::load_all(&mut txn, &materialized)?;
		txn.rollback();

		manager.register_listener(Arc::new(materialized.clone()));
		info!(version = %manager.store().version(), "catalog opened");

		Ok(Self {
			materialized,
			config,
		})
	}

	pub fn materialized(&self) -> &MaterializedCatalog {
		&self.materialized
	}

	pub fn config(&self) -> &CatalogConfig {
		&self.config
	}
}
