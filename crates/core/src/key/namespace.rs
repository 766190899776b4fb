// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Display, Formatter},
	ops::Bound,
};

use crate::{
	interface::catalog::{id::NamespaceId, routine::RoutineKind},
	key::{CatalogKey, CatalogKeyRange, RoutineKey},
};

/// Namespaces are unique by case-folded name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamespaceKey {
	name: String,
}

impl NamespaceKey {
	pub fn new(name: &str) -> Self {
		Self {
			name: name.to_lowercase(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn encoded(name: &str) -> CatalogKey {
		CatalogKey::Namespace(Self::new(name))
	}

	pub fn full_scan() -> CatalogKeyRange {
		CatalogKeyRange {
			start: Bound::Included(CatalogKey::Namespace(NamespaceKey {
				name: String::new(),
			})),
			end: Bound::Excluded(CatalogKey::Routine(RoutineKey::new(
				NamespaceId(0),
				RoutineKind::Procedure,
				"",
			))),
		}
	}
}

impl Display for NamespaceKey {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "namespace/{}", self.name)
	}
}
