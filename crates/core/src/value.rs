// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dynamic interpreter values.
//!
//! The interpreter hands the pipeline a nested, dynamically-typed result
//! graph. [`Value`] models it as a tagged variant with type-checked
//! accessors; the extractor walks the graph through these accessors only,
//! so a wrong-typed slot reads as absent rather than being coerced.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A value in the interpreter's object model.
///
/// Frames keep slot insertion order, matching the interpreter's own
/// frame semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// The interpreter's nil.
    Nil,
    /// A text string.
    String(String),
    /// A symbolic identifier (e.g. an app symbol).
    Symbol(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A named-slot container.
    Frame(IndexMap<String, Value>),
}

/// Tag-only variant of [`Value`] for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Nil,
    String,
    Symbol,
    Array,
    Frame,
}

crate::simple_display! {
    ValueKind {
        Nil => "nil",
        String => "string",
        Symbol => "symbol",
        Array => "array",
        Frame => "frame",
    }
}

impl Value {
    /// Build a frame from slot pairs, keeping the given order.
    pub fn frame<K, I>(slots: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Frame(slots.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a string value.
    pub fn string(s: impl Into<String>) -> Value {
        Value::String(s.into())
    }

    /// Build a symbol value.
    pub fn symbol(s: impl Into<String>) -> Value {
        Value::Symbol(s.into())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Nil => ValueKind::Nil,
            Value::String(_) => ValueKind::String,
            Value::Symbol(_) => ValueKind::Symbol,
            Value::Array(_) => ValueKind::Array,
            Value::Frame(_) => ValueKind::Frame,
        }
    }

    /// The string payload, if this is a string.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The symbol name, if this is a symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// The elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The slot map, if this is a frame.
    pub fn as_frame(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Frame(slots) => Some(slots),
            _ => None,
        }
    }

    /// Look up a named slot. `None` unless this is a frame holding `name`.
    pub fn slot(&self, name: &str) -> Option<&Value> {
        self.as_frame().and_then(|slots| slots.get(name))
    }

    /// Look up an element by index. `None` unless this is an array of
    /// sufficient length.
    pub fn element(&self, index: usize) -> Option<&Value> {
        self.as_array().and_then(|items| items.get(index))
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
