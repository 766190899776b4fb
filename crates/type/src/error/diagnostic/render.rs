// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use super::Diagnostic;

pub struct DefaultRenderer;

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		let mut out = String::new();
		Self::render(&mut out, diagnostic, 0);
		out
	}

	fn render(out: &mut String, diagnostic: &Diagnostic, depth: usize) {
		let indent = "  ".repeat(depth);

		let _ = writeln!(out, "{indent}Error {}", diagnostic.code);
		let _ = writeln!(out, "{indent}  {}", diagnostic.message);

		if let Some(statement) = &diagnostic.statement {
			let _ = writeln!(out, "{indent}  statement: {statement}");
		}

		if !diagnostic.fragment.is_none() {
			match &diagnostic.label {
				Some(label) => {
					let _ = writeln!(out, "{indent}  at `{}`: {label}", diagnostic.fragment.text());
				}
				None => {
					let _ = writeln!(out, "{indent}  at `{}`", diagnostic.fragment.text());
				}
			}
		} else if let Some(label) = &diagnostic.label {
			let _ = writeln!(out, "{indent}  {label}");
		}

		if let Some(help) = &diagnostic.help {
			let _ = writeln!(out, "{indent}  help: {help}");
		}

		for note in &diagnostic.notes {
			let _ = writeln!(out, "{indent}  note: {note}");
		}

		if let Some(cause) = &diagnostic.cause {
			let _ = writeln!(out, "{indent}  caused by:");
			Self::render(out, cause, depth + 2);
		}
	}
}
