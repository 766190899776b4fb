// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Visitor};

macro_rules! catalog_id {
	($name:ident) => {
		#[repr(transparent)]
		#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash)]
		pub struct $name(pub u64);

		impl Deref for $name {
			type Target = u64;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}

		impl PartialEq<u64> for $name {
			fn eq(&self, other: &u64) -> bool {
				self.0.eq(other)
			}
		}

		impl From<$name> for u64 {
			fn from(value: $name) -> Self {
				value.0
			}
		}

		impl Display for $name {
			fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
				Display::fmt(&self.0, f)
			}
		}

		impl Serialize for $name {
			fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
			where
				S: Serializer,
			{
				serializer.serialize_u64(self.0)
			}
		}

		impl<'de> Deserialize<'de> for $name {
			fn deserialize<D>(deserializer: D) -> Result<$name, D::Error>
			where
				D: Deserializer<'de>,
			{
				struct U64Visitor;

				impl Visitor<'_> for U64Visitor {
					type Value = $name;

					fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
						formatter.write_str("an unsigned 64-bit number")
					}

					fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
						Ok($name(value))
					}
				}

				deserializer.deserialize_u64(U64Visitor)
			}
		}
	};
}

catalog_id!(NamespaceId);
catalog_id!(RoutineId);
