//! Nullable column wrappers
//!
//! Small adapters for marshaling single database columns to and from JSON
//! and database driver values.

use crate::errors::TypeMappingError;
use serde::{Deserialize, Serialize};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::{Database, Decode, Encode, Type};
use std::fmt;
use std::str::FromStr;

/// Nullable 64-bit integer column
///
/// Serializes as a JSON number or `null`, binds as BIGINT or NULL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NullInt(pub Option<i64>);

impl NullInt {
    pub fn new(value: i64) -> Self {
        Self(Some(value))
    }

    pub fn null() -> Self {
        Self(None)
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    /// The wrapped value, `None` when NULL
    pub fn value(&self) -> Option<i64> {
        self.0
    }
}

impl From<i64> for NullInt {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Option<i64>> for NullInt {
    fn from(value: Option<i64>) -> Self {
        Self(value)
    }
}

impl<DB: Database> Type<DB> for NullInt
where
    i64: Type<DB>,
{
    fn type_info() -> DB::TypeInfo {
        <i64 as Type<DB>>::type_info()
    }

    fn compatible(ty: &DB::TypeInfo) -> bool {
        <i64 as Type<DB>>::compatible(ty)
    }
}

impl<'q, DB: Database> Encode<'q, DB> for NullInt
where
    Option<i64>: Encode<'q, DB>,
{
    fn encode_by_ref(
        &self,
        buf: &mut <DB as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        <Option<i64> as Encode<'q, DB>>::encode_by_ref(&self.0, buf)
    }
}

impl<'r, DB: Database> Decode<'r, DB> for NullInt
where
    Option<i64>: Decode<'r, DB>,
{
    fn decode(value: <DB as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
        Ok(Self(<Option<i64> as Decode<'r, DB>>::decode(value)?))
    }
}

/// List of `i16` stored as comma separated text
///
/// Serializes as a JSON array. An empty list is stored as an empty string
/// and reported as NULL by [`Int16Slice::value`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Int16Slice(pub Vec<i16>);

impl Int16Slice {
    pub fn new(ints: Vec<i16>) -> Self {
        Self(ints)
    }

    pub fn as_slice(&self) -> &[i16] {
        &self.0
    }

    /// Comma separated form, `None` for an empty list
    pub fn value(&self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for Int16Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

impl FromStr for Int16Slice {
    type Err = TypeMappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        trimmed
            .split(',')
            .map(|item| {
                item.trim()
                    .parse::<i16>()
                    .map_err(|e| TypeMappingError::InvalidInt16Slice {
                        item: item.to_string(),
                        reason: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl From<Vec<i16>> for Int16Slice {
    fn from(ints: Vec<i16>) -> Self {
        Self(ints)
    }
}

impl<DB: Database> Type<DB> for Int16Slice
where
    String: Type<DB>,
{
    fn type_info() -> DB::TypeInfo {
        <String as Type<DB>>::type_info()
    }

    fn compatible(ty: &DB::TypeInfo) -> bool {
        <String as Type<DB>>::compatible(ty)
    }
}

impl<'q, DB: Database> Encode<'q, DB> for Int16Slice
where
    String: Encode<'q, DB>,
{
    fn encode_by_ref(
        &self,
        buf: &mut <DB as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        <String as Encode<'q, DB>>::encode(self.to_string(), buf)
    }
}

impl<'r, DB: Database> Decode<'r, DB> for Int16Slice
where
    Option<String>: Decode<'r, DB>,
{
    fn decode(value: <DB as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
        match <Option<String> as Decode<'r, DB>>::decode(value)? {
            Some(text) => Ok(text.parse::<Int16Slice>()?),
            None => Ok(Self::default()),
        }
    }
}
