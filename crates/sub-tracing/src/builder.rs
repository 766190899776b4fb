// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_type::{Error, error::Diagnostic, fragment::Fragment};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TracingFormat {
	#[default]
	Pretty,
	Compact,
	Json,
}

/// Builds and installs the global tracing subscriber.
///
/// The filter uses `EnvFilter` directive syntax. `RUST_LOG` takes precedence
/// over the configured filter when set.
#[derive(Debug, Clone)]
pub struct TracingBuilder {
	filter: String,
	format: TracingFormat,
	with_target: bool,
	with_ansi: bool,
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self {
			filter: "info".to_string(),
			format: TracingFormat::default(),
			with_target: true,
			with_ansi: true,
		}
	}
}

impl TracingBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
		self.filter = filter.into();
		self
	}

	pub fn with_format(mut self, format: TracingFormat) -> Self {
		self.format = format;
		self
	}

	pub fn with_target(mut self, with_target: bool) -> Self {
		self.with_target = with_target;
		self
	}

	pub fn with_ansi(mut self, with_ansi: bool) -> Self {
		self.with_ansi = with_ansi;
		self
	}

	pub fn filter(&self) -> &str {
		&self.filter
	}

	pub fn format(&self) -> TracingFormat {
		self.format
	}

	fn env_filter(&self) -> dictum_type::Result<EnvFilter> {
		if let Ok(filter) = EnvFilter::try_from_default_env() {
			return Ok(filter);
		}
		EnvFilter::try_new(&self.filter)
			.map_err(|err| tracing_error(format!("invalid tracing filter `{}`: {err}", self.filter)))
	}

	/// Installs the subscriber. Fails if the filter does not parse or a
	/// global subscriber is already set.
	pub fn try_init(self) -> dictum_type::Result<()> {
		let filter = self.env_filter()?;
		let registry = tracing_subscriber::registry().with(filter);

		let result = match self.format {
			TracingFormat::Pretty => registry
				.with(fmt::layer().pretty().with_target(self.with_target).with_ansi(self.with_ansi))
				.try_init(),
			TracingFormat::Compact => registry
				.with(fmt::layer().compact().with_target(self.with_target).with_ansi(self.with_ansi))
				.try_init(),
			TracingFormat::Json => registry
				.with(fmt::layer().json().with_target(self.with_target).with_ansi(false))
				.try_init(),
		};
		result.map_err(|err| tracing_error(format!("failed to install tracing subscriber: {err}")))?;

		debug!(filter = %self.filter, format = ?self.format, "tracing initialised");
		Ok(())
	}

	/// Like [`TracingBuilder::try_init`], but ignores failures. Meant for
	/// tests, where several tests race to install the subscriber.
	pub fn init(self) {
		let _ = self.try_init();
	}
}

fn tracing_error(message: String) -> Error {
	Error(Diagnostic {
		code: "TRACING_001".to_string(),
		statement: None,
		message,
		fragment: Fragment::None,
		label: None,
		help: Some("check the log filter directives, e.g. `info,dictum_catalog=debug`".to_string()),
		notes: vec![],
		cause: None,
	})
}
