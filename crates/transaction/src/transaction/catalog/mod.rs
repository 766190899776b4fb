// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::interface::catalog::change::CatalogTrackChangeOperations;

use crate::transaction::admin::AdminTransaction;

mod namespace;
mod routine;

impl CatalogTrackChangeOperations for AdminTransaction {}
