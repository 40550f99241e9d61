//! Provenance trail of a type: its qualified path split into nesting scopes,
//! outer to inner, tagged with the type's classification.

use super::kind::{Inspect, TypeKind};
use std::any::type_name;
use std::fmt;

/// Derived on demand for every report; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Path segments, outermost first. Never empty.
    pub trail: Vec<String>,
    pub kind: TypeKind,
}

impl TypeDescriptor {
    #[must_use]
    pub fn of<T: Inspect + ?Sized>() -> Self {
        Self {
            trail: split_path(type_name::<T>()),
            kind: T::KIND,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.kind.label();
        if !label.is_empty() {
            write!(f, "{label} ")?;
        }
        write!(f, "at ({})", self.trail.join(" > "))
    }
}

/// `Struct at (app > geometry > Point)\n`; scalars carry no label.
#[must_use]
pub fn trace_name<T: Inspect + ?Sized>() -> String {
    format!("{}\n", TypeDescriptor::of::<T>())
}

/// Splits on `::` outside generic arguments, so `alloc::vec::Vec<core::option::Option<u8>>`
/// yields `alloc`, `vec`, `Vec<core::option::Option<u8>>`.
fn split_path(name: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let bytes = name.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' | b'(' | b'[' => depth += 1,
            b'>' | b')' | b']' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                if i > start {
                    segments.push(name[start..i].to_string());
                }
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }

    if start < name.len() {
        segments.push(name[start..].to_string());
    }
    if segments.is_empty() {
        segments.push(name.to_string());
    }
    segments
}
