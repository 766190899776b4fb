// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod admin;
mod catalog;

pub use admin::{AdminTransaction, TransactionState};
