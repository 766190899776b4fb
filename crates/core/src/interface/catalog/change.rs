// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Catalog change tracking traits.
//!
//! These traits are used by admin transactions to track changes to catalog entities
//! during a transaction, allowing for proper transactional semantics and rollback.

use crate::interface::catalog::{namespace::NamespaceDef, routine::RoutineDef};

/// Trait for tracking namespace definition changes during a transaction.
pub trait CatalogTrackNamespaceChangeOperations {
	fn track_namespace_def_created(&mut self, namespace: NamespaceDef) -> dictum_type::Result<()>;

	fn track_namespace_def_deleted(&mut self, namespace: NamespaceDef) -> dictum_type::Result<()>;
}

/// Trait for tracking routine definition changes during a transaction.
pub trait CatalogTrackRoutineChangeOperations {
	fn track_routine_def_created(&mut self, routine: RoutineDef) -> dictum_type::Result<()>;

	fn track_routine_def_updated(&mut self, pre: RoutineDef, post: RoutineDef) -> dictum_type::Result<()>;

	fn track_routine_def_deleted(&mut self, routine: RoutineDef) -> dictum_type::Result<()>;
}

pub trait CatalogTrackChangeOperations:
	CatalogTrackNamespaceChangeOperations + CatalogTrackRoutineChangeOperations
{
}
