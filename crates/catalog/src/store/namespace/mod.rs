// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub(crate) mod create;
pub(crate) mod drop;
pub(crate) mod find;
pub(crate) mod list;

pub use create::NamespaceToCreate;
