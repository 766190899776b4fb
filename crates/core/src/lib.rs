// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod common;
pub mod interface;
pub mod key;
pub mod row;
pub mod util;

pub use common::CommitVersion;
