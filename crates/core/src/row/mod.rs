// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::interface::catalog::{namespace::NamespaceDef, routine::RoutineDef};

/// A catalog row as held by the storage engine.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogRow {
	Namespace(NamespaceDef),
	Routine(RoutineDef),
}

impl CatalogRow {
	pub fn as_namespace(&self) -> Option<&NamespaceDef> {
		match self {
			CatalogRow::Namespace(namespace) => Some(namespace),
			_ => None,
		}
	}

	pub fn into_namespace(self) -> Option<NamespaceDef> {
		match self {
			CatalogRow::Namespace(namespace) => Some(namespace),
			_ => None,
		}
	}

	pub fn as_routine(&self) -> Option<&RoutineDef> {
		match self {
			CatalogRow::Routine(routine) => Some(routine),
			_ => None,
		}
	}

	pub fn into_routine(self) -> Option<RoutineDef> {
		match self {
			CatalogRow::Routine(routine) => Some(routine),
			_ => None,
		}
	}
}

impl From<NamespaceDef> for CatalogRow {
	fn from(namespace: NamespaceDef) -> Self {
		CatalogRow::Namespace(namespace)
	}
}

impl From<RoutineDef> for CatalogRow {
	fn from(routine: RoutineDef) -> Self {
		CatalogRow::Routine(routine)
	}
}
