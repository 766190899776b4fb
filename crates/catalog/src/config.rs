// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Limits enforced on routine definitions.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
	/// Maximum length of a routine name, in characters.
	pub max_name_length: usize,
	/// Maximum length of a routine comment, in characters.
	pub max_comment_length: usize,
}

impl Default for CatalogConfig {
	fn default() -> Self {
		Self {
			max_name_length: 64,
			max_comment_length: 65_535,
		}
	}
}

impl CatalogConfig {
	pub fn with_max_name_length(mut self, max: usize) -> Self {
		self.max_name_length = max;
		self
	}

	pub fn with_max_comment_length(mut self, max: usize) -> Self {
		self.max_comment_length = max;
		self
	}
}
