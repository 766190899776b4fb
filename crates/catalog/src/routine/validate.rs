// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use dictum_core::{
	interface::catalog::{
		namespace::NamespaceDef,
		routine::{CharacteristicsDelta, CompiledRoutine, Definer, RoutineKind, RoutineName},
	},
	key::NamespaceKey,
};

use crate::{
	CatalogConfig,
	error::{CatalogError, CatalogObjectKind},
};

fn validate_name(config: &CatalogConfig, kind: CatalogObjectKind, name: &str) -> crate::Result<()> {
	if name.is_empty() {
		return Err(CatalogError::InvalidName {
			kind,
			name: name.to_string(),
			reason: "name must not be empty".to_string(),
		}
		.into());
	}
	if name.ends_with(' ') {
		return Err(CatalogError::InvalidName {
			kind,
			name: name.to_string(),
			reason: "name must not end with a space".to_string(),
		}
		.into());
	}
	if name.chars().count() > config.max_name_length {
		return Err(CatalogError::NameTooLong {
			kind,
			name: name.to_string(),
			max: config.max_name_length,
		}
		.into());
	}
	Ok(())
}

pub(crate) fn validate_routine_name(name: &RoutineName, kind: RoutineKind) -> crate::Result<()> {
	for part in [&name.namespace, &name.name] {
		if part.is_empty() {
			return Err(CatalogError::InvalidName {
				kind: kind.into(),
				name: name.to_string(),
				reason: "qualified name has an empty part".to_string(),
			}
			.into());
		}
	}
	Ok(())
}

/// A routine qualified with one namespace cannot be created in another.
pub(crate) fn validate_target_namespace(compiled: &CompiledRoutine, schema: &NamespaceDef) -> crate::Result<()> {
	if NamespaceKey::new(&compiled.name.namespace) != NamespaceKey::new(&schema.name) {
		return Err(CatalogError::InvalidName {
			kind: compiled.kind.into(),
			name: compiled.name.to_string(),
			reason: format!("qualified with namespace `{}` but created in `{}`", compiled.name.namespace, schema.name),
		}
		.into());
	}
	Ok(())
}

fn validate_comment(config: &CatalogConfig, kind: RoutineKind, name: &str, comment: &str) -> crate::Result<()> {
	let length = comment.chars().count();
	if length > config.max_comment_length {
		return Err(CatalogError::CommentTooLong {
			kind: kind.into(),
			name: name.to_string(),
			length,
			max: config.max_comment_length,
		}
		.into());
	}
	Ok(())
}

pub(crate) fn validate_compiled(config: &CatalogConfig, compiled: &CompiledRoutine, definer: &Definer) -> crate::Result<()> {
	validate_name(config, compiled.kind.into(), &compiled.name.name)?;
	validate_comment(config, compiled.kind, &compiled.name.name, &compiled.characteristics.comment)?;

	match (compiled.kind, &compiled.returns) {
		(RoutineKind::Function, None) => {
			return Err(CatalogError::InvalidCharacteristic {
				kind: compiled.kind.into(),
				name: compiled.name.to_string(),
				reason: "a function must declare a return type".to_string(),
			}
			.into());
		}
		(RoutineKind::Procedure, Some(_)) => {
			return Err(CatalogError::InvalidCharacteristic {
				kind: compiled.kind.into(),
				name: compiled.name.to_string(),
				reason: "a procedure cannot declare a return type".to_string(),
			}
			.into());
		}
		_ => {}
	}

	if definer.user.is_empty() {
		return Err(CatalogError::InvalidDefiner {
			definer: format!("{}@{}", definer.user, definer.host),
		}
		.into());
	}
	Ok(())
}

pub(crate) fn validate_delta(
	config: &CatalogConfig,
	kind: RoutineKind,
	name: &str,
	delta: &CharacteristicsDelta,
) -> crate::Result<()> {
	if let Some(comment) = &delta.comment {
		validate_comment(config, kind, name, comment)?;
	}
	Ok(())
}
