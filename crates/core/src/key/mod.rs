// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Display, Formatter},
	ops::{Bound, RangeBounds},
};

pub use namespace::NamespaceKey;
pub use routine::RoutineKey;

mod namespace;
mod routine;

/// Address of one row in the catalog storage.
///
/// Keys order by variant first, so all namespace rows sort before all routine
/// rows, and routine rows are clustered by namespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CatalogKey {
	Namespace(NamespaceKey),
	Routine(RoutineKey),
}

impl Display for CatalogKey {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			CatalogKey::Namespace(key) => Display::fmt(key, f),
			CatalogKey::Routine(key) => Display::fmt(key, f),
		}
	}
}

impl From<NamespaceKey> for CatalogKey {
	fn from(key: NamespaceKey) -> Self {
		CatalogKey::Namespace(key)
	}
}

impl From<RoutineKey> for CatalogKey {
	fn from(key: RoutineKey) -> Self {
		CatalogKey::Routine(key)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogKeyRange {
	pub start: Bound<CatalogKey>,
	pub end: Bound<CatalogKey>,
}

impl CatalogKeyRange {
	pub fn all() -> Self {
		Self {
			start: Bound::Unbounded,
			end: Bound::Unbounded,
		}
	}

	pub fn contains_key(&self, key: &CatalogKey) -> bool {
		self.contains(key)
	}
}

impl RangeBounds<CatalogKey> for CatalogKeyRange {
	fn start_bound(&self) -> Bound<&CatalogKey> {
		self.start.as_ref()
	}

	fn end_bound(&self) -> Bound<&CatalogKey> {
		self.end.as_ref()
	}
}
