//! Type classification as an explicit capability.
//!
//! There is no runtime reflection to ask a value for its fields, so values
//! opt in through [`Inspect`]: the associated `KIND` classifies the type and
//! `fields` lists a record's fields one level deep.

use crate::fmt::Color;
use std::borrow::Cow;

/// How a type is rendered in a collection report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeKind {
    /// A composite of named fields, rendered field by field.
    Record,
    /// A closed set of named constants.
    Enumerated,
    /// Anything rendered through its textual form.
    #[default]
    Scalar,
}

impl TypeKind {
    /// Label used in type headers. Scalars have none.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Record => "Struct",
            Self::Enumerated => "Enum",
            Self::Scalar => "",
        }
    }
}

/// One field of a record, already rendered to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub value: String,
}

impl Field {
    #[must_use]
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Values that collection reports know how to render.
///
/// Implement it with [`inspect_record!`](crate::inspect_record),
/// [`inspect_enum!`](crate::inspect_enum) or
/// [`inspect_scalar!`](crate::inspect_scalar), or by hand when a value's
/// classification depends on its contents.
pub trait Inspect {
    /// Static classification, used for type headers.
    const KIND: TypeKind = TypeKind::Scalar;

    /// Classification of this particular value. Reports check it per element.
    fn kind(&self) -> TypeKind {
        Self::KIND
    }

    /// Ordered `(name, text)` pairs. Only consulted for records.
    fn fields(&self) -> Vec<Field> {
        Vec::new()
    }

    /// Human-readable text for the value.
    fn to_text(&self) -> String;
}

/// Classification of `T`.
#[must_use]
pub const fn classify<T: Inspect + ?Sized>() -> TypeKind {
    T::KIND
}

/// `Name { a: 1, b: 2 }`, the textual form of a record used outside sequence reports.
#[must_use]
pub fn record_text(name: &str, fields: &[Field]) -> String {
    let body = fields
        .iter()
        .map(|f| format!("{}: {}", f.name, f.value))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{name} {{ {body} }}")
}

/// Implements [`Inspect`] as a record whose listed fields implement `Display`.
///
/// ```
/// struct Point { x: i32, y: i32 }
/// logex::inspect_record!(Point { x, y });
///
/// use logex::inspect::{Inspect, TypeKind};
/// assert_eq!(Point { x: 1, y: 2 }.kind(), TypeKind::Record);
/// ```
#[macro_export]
macro_rules! inspect_record {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::inspect::Inspect for $ty {
            const KIND: $crate::inspect::TypeKind = $crate::inspect::TypeKind::Record;

            fn fields(&self) -> ::std::vec::Vec<$crate::inspect::Field> {
                ::std::vec![
                    $($crate::inspect::Field::new(
                        ::std::stringify!($field),
                        ::std::string::ToString::to_string(&self.$field),
                    )),+
                ]
            }

            fn to_text(&self) -> ::std::string::String {
                $crate::inspect::record_text(::std::stringify!($ty), &self.fields())
            }
        }
    };
}

/// Implements [`Inspect`] as an enumerated type rendered through `Debug`,
/// which prints the variant name for fieldless enums.
#[macro_export]
macro_rules! inspect_enum {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::inspect::Inspect for $ty {
                const KIND: $crate::inspect::TypeKind = $crate::inspect::TypeKind::Enumerated;

                fn to_text(&self) -> ::std::string::String {
                    ::std::format!("{self:?}")
                }
            }
        )+
    };
}

/// Implements [`Inspect`] as a scalar rendered through `Display`.
#[macro_export]
macro_rules! inspect_scalar {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::inspect::Inspect for $ty {
                fn to_text(&self) -> ::std::string::String {
                    ::std::string::ToString::to_string(self)
                }
            }
        )+
    };
}

inspect_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String, Color,
);

impl Inspect for Cow<'_, str> {
    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    const KIND: TypeKind = T::KIND;

    fn kind(&self) -> TypeKind {
        (**self).kind()
    }

    fn fields(&self) -> Vec<Field> {
        (**self).fields()
    }

    fn to_text(&self) -> String {
        (**self).to_text()
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    const KIND: TypeKind = T::KIND;

    fn kind(&self) -> TypeKind {
        (**self).kind()
    }

    fn fields(&self) -> Vec<Field> {
        (**self).fields()
    }

    fn to_text(&self) -> String {
        (**self).to_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum Axis {
        X,
    }
    crate::inspect_enum!(Axis);

    struct Size {
        w: u32,
        h: u32,
    }
    crate::inspect_record!(Size { w, h });

    #[test]
    fn references_keep_the_inner_kind() {
        assert_eq!(classify::<&Size>(), TypeKind::Record);
        assert_eq!(classify::<Box<Axis>>(), TypeKind::Enumerated);
        assert_eq!(classify::<&str>(), TypeKind::Scalar);
    }

    #[test]
    fn record_text_lists_fields() {
        let size = Size { w: 3, h: 4 };
        assert_eq!(size.to_text(), "Size { w: 3, h: 4 }");
        assert_eq!(Axis::X.to_text(), "X");
    }
}
