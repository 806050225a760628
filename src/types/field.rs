// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Tri-state optional field used throughout the cluster document.
//!
//! A field is either absent from the input (`Unset`), filled in by the
//! defaulter (`Defaulted`), or written by the user (`Explicit`). Explicit
//! values are never replaced, including `false`, `0` and empty lists.

use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Field<T> {
    #[default]
    Unset,
    Defaulted(T),
    Explicit(T),
}

impl<T> Field<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self, Field::Explicit(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Unset => None,
            Field::Defaulted(v) | Field::Explicit(v) => Some(v),
        }
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Field::Unset => None,
            Field::Defaulted(v) | Field::Explicit(v) => Some(v),
        }
    }

    /// Fill the field with `value` only when the user left it out.
    /// Returns true when the default was applied.
    pub fn apply_default(&mut self, value: T) -> bool {
        self.apply_default_with(|| value)
    }

    pub fn apply_default_with(&mut self, f: impl FnOnce() -> T) -> bool {
        if self.is_unset() {
            *self = Field::Defaulted(f());
            true
        } else {
            false
        }
    }
}

impl<T: Copy> Field<T> {
    pub fn get(&self) -> Option<T> {
        self.value().copied()
    }
}

impl Field<String> {
    pub fn as_str(&self) -> Option<&str> {
        self.value().map(String::as_str)
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Explicit(value)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // An explicit YAML null reads the same as an absent key.
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Field::Explicit(v),
            None => Field::Unset,
        })
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value() {
            Some(v) => v.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<T: JsonSchema> JsonSchema for Field<T> {
    fn is_referenceable() -> bool {
        false
    }

    fn schema_name() -> String {
        Option::<T>::schema_name()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        Option::<T>::json_schema(gen)
    }
}
