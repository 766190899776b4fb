// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use catalog::Catalog;
pub use client::DictionaryClient;
pub use config::CatalogConfig;
pub use dictum_type::Result;
pub use materialized::MaterializedCatalog;
pub use store::{namespace::NamespaceToCreate, routine::RoutineToCreate};

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod materialized;
pub mod routine;
pub(crate) mod store;
pub mod test_utils;

/// Storage level catalog access. Functions take the row lock, read the
/// current row and write through the transaction; they never touch the
/// materialized catalog or the transaction's tracked changes.
pub struct CatalogStore;
