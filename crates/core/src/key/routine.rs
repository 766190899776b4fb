// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Display, Formatter},
	ops::Bound,
};

use crate::{
	interface::catalog::{id::NamespaceId, routine::RoutineKind},
	key::{CatalogKey, CatalogKeyRange},
};

/// Identity of a live routine: `(namespace, kind, name)`. Routine names are
/// case-insensitive, so the key holds the case-folded name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoutineKey {
	pub namespace: NamespaceId,
	pub kind: RoutineKind,
	name: String,
}

impl RoutineKey {
	pub fn new(namespace: NamespaceId, kind: RoutineKind, name: &str) -> Self {
		Self {
			namespace,
			kind,
			name: name.to_lowercase(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn encoded(namespace: NamespaceId, kind: RoutineKind, name: &str) -> CatalogKey {
		CatalogKey::Routine(Self::new(namespace, kind, name))
	}

	/// All routines of one namespace, procedures before functions.
	pub fn namespace_scan(namespace: NamespaceId) -> CatalogKeyRange {
		CatalogKeyRange {
			start: Bound::Included(Self::encoded(namespace, RoutineKind::Procedure, "")),
			end: Bound::Excluded(Self::encoded(NamespaceId(namespace.0 + 1), RoutineKind::Procedure, "")),
		}
	}
}

impl Display for RoutineKey {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "routine/{}/{}/{}", self.namespace, self.kind, self.name)
	}
}
