// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod change;
pub mod id;
pub mod namespace;
pub mod routine;
