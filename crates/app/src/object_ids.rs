//! Typed Object Ids

use std::{
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
    str::FromStr,
};

use mongodb::bson::{Bson, oid::ObjectId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A document identifier tagged with the record type it belongs to.
pub struct TypedObjectId<T>(ObjectId, PhantomData<T>);

impl<T> TypedObjectId<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::from_object_id(ObjectId::new())
    }

    #[must_use]
    pub const fn from_object_id(id: ObjectId) -> Self {
        Self(id, PhantomData)
    }

    #[must_use]
    pub const fn into_object_id(self) -> ObjectId {
        self.0
    }

    #[must_use]
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl<T> Default for TypedObjectId<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TypedObjectId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedObjectId<T> {}

impl<T> Debug for TypedObjectId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedObjectId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedObjectId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedObjectId<T> {}

impl<T> Hash for TypedObjectId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> FromStr for TypedObjectId<T> {
    type Err = mongodb::bson::oid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(value).map(Self::from_object_id)
    }
}

impl<T> From<ObjectId> for TypedObjectId<T> {
    fn from(value: ObjectId) -> Self {
        Self::from_object_id(value)
    }
}

impl<T> From<TypedObjectId<T>> for ObjectId {
    fn from(value: TypedObjectId<T>) -> Self {
        value.into_object_id()
    }
}

impl<T> From<TypedObjectId<T>> for Bson {
    fn from(value: TypedObjectId<T>) -> Self {
        Bson::ObjectId(value.into_object_id())
    }
}

impl<T> Serialize for TypedObjectId<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for TypedObjectId<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ObjectId::deserialize(deserializer).map(Self::from_object_id)
    }
}
