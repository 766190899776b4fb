// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::time::{SystemTime, UNIX_EPOCH};

/// Wall clock in milliseconds since the unix epoch. A clock set before the
/// epoch reads as zero.
pub fn now_millis() -> u64 {
	SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis() as u64).unwrap_or(0)
}
