// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Display, Formatter},
	sync::Arc,
};

use serde::{Deserialize, Serialize};

use crate::{
	interface::catalog::id::{NamespaceId, RoutineId},
	key::RoutineKey,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoutineKind {
	Procedure,
	Function,
}

impl RoutineKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			RoutineKind::Procedure => "procedure",
			RoutineKind::Function => "function",
		}
	}
}

impl Display for RoutineKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// What a routine body is declared to do with SQL data.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SqlDataAccess {
	#[default]
	ContainsSql,
	NoSql,
	ReadsSqlData,
	ModifiesSqlData,
}

impl SqlDataAccess {
	pub fn as_str(&self) -> &'static str {
		match self {
			SqlDataAccess::ContainsSql => "CONTAINS SQL",
			SqlDataAccess::NoSql => "NO SQL",
			SqlDataAccess::ReadsSqlData => "READS SQL DATA",
			SqlDataAccess::ModifiesSqlData => "MODIFIES SQL DATA",
		}
	}
}

impl Display for SqlDataAccess {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// SQL SECURITY characteristic for procedures and functions
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SqlSecurity {
	#[default]
	Definer,
	Invoker,
}

impl SqlSecurity {
	pub fn as_str(&self) -> &'static str {
		match self {
			SqlSecurity::Definer => "DEFINER",
			SqlSecurity::Invoker => "INVOKER",
		}
	}
}

impl Display for SqlSecurity {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The principal a routine was created by, `user@host`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Definer {
	pub user: String,
	pub host: String,
}

impl Definer {
	pub const ANY_HOST: &'static str = "%";

	pub fn new(user: impl Into<String>, host: impl Into<String>) -> Self {
		Self {
			user: user.into(),
			host: host.into(),
		}
	}

	/// Parses `user@host`; a missing host means any host.
	pub fn parse(value: &str) -> Self {
		match value.rsplit_once('@') {
			Some((user, host)) => Self::new(user, host),
			None => Self::new(value, Self::ANY_HOST),
		}
	}
}

impl Display for Definer {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "`{}`@`{}`", self.user, self.host)
	}
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterMode {
	In,
	Out,
	InOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineParameter {
	pub name: String,
	pub mode: ParameterMode,
	pub data_type: String,
}

/// Definition text of a routine. Owned by the execution layer; the dictionary
/// stores it verbatim and never looks inside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineBody(Arc<str>);

impl RoutineBody {
	pub fn new(text: impl Into<Arc<str>>) -> Self {
		Self(text.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

/// The declarative properties of a routine that ALTER may change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoutineCharacteristics {
	pub comment: String,
	pub data_access: SqlDataAccess,
	pub security: SqlSecurity,
	pub deterministic: bool,
}

/// New values for a subset of [`RoutineCharacteristics`]. Fields left `None`
/// keep their current value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharacteristicsDelta {
	pub comment: Option<String>,
	pub data_access: Option<SqlDataAccess>,
	pub security: Option<SqlSecurity>,
	pub deterministic: Option<bool>,
}

impl CharacteristicsDelta {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
		self.comment = Some(comment.into());
		self
	}

	pub fn with_data_access(mut self, data_access: SqlDataAccess) -> Self {
		self.data_access = Some(data_access);
		self
	}

	pub fn with_security(mut self, security: SqlSecurity) -> Self {
		self.security = Some(security);
		self
	}

	pub fn with_deterministic(mut self, deterministic: bool) -> Self {
		self.deterministic = Some(deterministic);
		self
	}

	pub fn is_empty(&self) -> bool {
		self.comment.is_none()
			&& self.data_access.is_none()
			&& self.security.is_none()
			&& self.deterministic.is_none()
	}

	pub fn apply_to(&self, characteristics: &mut RoutineCharacteristics) {
		if let Some(comment) = &self.comment {
			characteristics.comment = comment.clone();
		}
		if let Some(data_access) = self.data_access {
			characteristics.data_access = data_access;
		}
		if let Some(security) = self.security {
			characteristics.security = security;
		}
		if let Some(deterministic) = self.deterministic {
			characteristics.deterministic = deterministic;
		}
	}
}

/// Schema-qualified routine name as written in a statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutineName {
	pub namespace: String,
	pub name: String,
}

impl RoutineName {
	pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			namespace: namespace.into(),
			name: name.into(),
		}
	}
}

impl Display for RoutineName {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.namespace, self.name)
	}
}

/// A routine as produced by the compiler, handed to the dictionary for
/// persistence. Only its declared properties are read.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledRoutine {
	pub name: RoutineName,
	pub kind: RoutineKind,
	pub characteristics: RoutineCharacteristics,
	pub parameters: Vec<RoutineParameter>,
	pub returns: Option<String>,
	pub body: RoutineBody,
	pub sql_mode: u64,
}

/// The persisted catalog record of one stored procedure or function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineDef {
	pub id: RoutineId,
	pub namespace: NamespaceId,
	pub name: String,
	pub kind: RoutineKind,
	pub definer: Definer,
	pub characteristics: RoutineCharacteristics,
	pub parameters: Vec<RoutineParameter>,
	pub returns: Option<String>,
	pub body: RoutineBody,
	pub sql_mode: u64,
	/// Milliseconds since the unix epoch.
	pub created: u64,
	pub last_altered: u64,
}

impl RoutineDef {
	pub fn key(&self) -> RoutineKey {
		RoutineKey::new(self.namespace, self.kind, &self.name)
	}
}
