// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{ops::Deref, sync::Arc};

use crossbeam_skiplist::SkipMap;
use dictum_core::{
	interface::catalog::{
		id::{NamespaceId, RoutineId},
		namespace::NamespaceDef,
		routine::RoutineDef,
	},
	key::{NamespaceKey, RoutineKey},
	util::multi::MultiVersionContainer,
};

pub mod listener;
pub mod load;
mod namespace;
mod routine;

pub type MultiVersionNamespaceDef = MultiVersionContainer<NamespaceDef>;
pub type MultiVersionRoutineDef = MultiVersionContainer<RoutineDef>;

/// Shared, multi-version view of committed catalog objects. Cloning is cheap
/// and shares the same maps.
#[derive(Debug, Clone)]
pub struct MaterializedCatalog(Arc<MaterializedCatalogInner>);

#[derive(Debug)]
pub struct MaterializedCatalogInner {
	/// MultiVersion namespace definitions
	pub(crate) namespaces: SkipMap<NamespaceId, MultiVersionNamespaceDef>,
	/// Index from case-folded namespace name to namespace ID
	pub(crate) namespaces_by_name: SkipMap<NamespaceKey, NamespaceId>,

	/// MultiVersion routine definitions
	pub(crate) routines: SkipMap<RoutineId, MultiVersionRoutineDef>,
	/// Index from routine key to routine ID
	pub(crate) routines_by_key: SkipMap<RoutineKey, RoutineId>,
}

impl Deref for MaterializedCatalog {
	type Target = MaterializedCatalogInner;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Default for MaterializedCatalog {
	fn default() -> Self {
		Self::new()
	}
}

impl MaterializedCatalog {
	pub fn new() -> Self {
		Self(Arc::new(MaterializedCatalogInner {
			namespaces: SkipMap::new(),
			namespaces_by_name: SkipMap::new(),
			routines: SkipMap::new(),
			routines_by_key: SkipMap::new(),
		}))
	}
}
