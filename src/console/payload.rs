//! The tagged value a single logging call accepts.

use crate::fmt::Color;
use crate::inspect::{self, Inspect, MarkerColors};
use std::borrow::Cow;
use std::fmt;

/// A collection erased behind its renderer, so [`Payload`] stays one type
/// whatever the element types are.
pub trait Report {
    /// # Errors
    /// [`crate::Error::ProfileMissing`] when the report needs marker colors and none are configured.
    fn render(&self, markers: Option<&MarkerColors>, line_breaks: bool)
    -> Result<String, crate::Error>;
}

struct SequenceReport<'a, T>(&'a [T]);

impl<T: Inspect> Report for SequenceReport<'_, T> {
    fn render(&self, _: Option<&MarkerColors>, line_breaks: bool) -> Result<String, crate::Error> {
        Ok(inspect::sequence(self.0, line_breaks))
    }
}

struct SetReport<'a, T>(Vec<&'a T>);

impl<T: Inspect> Report for SetReport<'_, T> {
    fn render(&self, _: Option<&MarkerColors>, line_breaks: bool) -> Result<String, crate::Error> {
        Ok(inspect::set(self.0.iter().copied(), line_breaks))
    }
}

struct MappingReport<'a, K, V>(Vec<(&'a K, &'a V)>);

impl<K: Inspect, V: Inspect> Report for MappingReport<'_, K, V> {
    fn render(
        &self,
        markers: Option<&MarkerColors>,
        line_breaks: bool,
    ) -> Result<String, crate::Error> {
        let markers = markers.ok_or(crate::Error::ProfileMissing)?;
        Ok(inspect::mapping(
            self.0.iter().copied(),
            markers,
            line_breaks,
        ))
    }
}

/// Everything a console call can log.
pub enum Payload<'a> {
    Message(Cow<'a, str>),
    Color(Color),
    Sequence(Box<dyn Report + 'a>),
    Set(Box<dyn Report + 'a>),
    Mapping(Box<dyn Report + 'a>),
}

impl<'a> Payload<'a> {
    #[must_use]
    pub fn sequence<T: Inspect>(values: &'a [T]) -> Self {
        Self::Sequence(Box::new(SequenceReport(values)))
    }

    /// Captures the set's iteration order at construction.
    #[must_use]
    pub fn set<T, I>(values: I) -> Self
    where
        T: Inspect + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        Self::Set(Box::new(SetReport(values.into_iter().collect())))
    }

    /// Captures the mapping's iteration order at construction.
    #[must_use]
    pub fn mapping<K, V, I>(values: I) -> Self
    where
        K: Inspect + 'a,
        V: Inspect + 'a,
        I: IntoIterator<Item = (&'a K, &'a V)>,
    {
        Self::Mapping(Box::new(MappingReport(values.into_iter().collect())))
    }

    /// Renders the payload into the message text.
    ///
    /// # Errors
    /// [`crate::Error::ProfileMissing`] for a mapping when `markers` is `None`.
    pub fn render(
        &self,
        markers: Option<&MarkerColors>,
        line_breaks: bool,
    ) -> Result<String, crate::Error> {
        match self {
            Self::Message(msg) => Ok(msg.to_string()),
            Self::Color(color) => Ok(color.report()),
            Self::Sequence(report) | Self::Set(report) | Self::Mapping(report) => {
                report.render(markers, line_breaks)
            }
        }
    }

    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Message(_) => "message",
            Self::Color(_) => "color",
            Self::Sequence(_) => "sequence",
            Self::Set(_) => "set",
            Self::Mapping(_) => "mapping",
        }
    }
}

impl fmt::Debug for Payload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(msg) => f.debug_tuple("Message").field(msg).finish(),
            Self::Color(color) => f.debug_tuple("Color").field(color).finish(),
            other => write!(f, "Payload::{}", other.shape()),
        }
    }
}

impl<'a> From<&'a str> for Payload<'a> {
    fn from(msg: &'a str) -> Self {
        Self::Message(Cow::Borrowed(msg))
    }
}

impl<'a> From<&'a String> for Payload<'a> {
    fn from(msg: &'a String) -> Self {
        Self::Message(Cow::Borrowed(msg.as_str()))
    }
}

impl From<String> for Payload<'_> {
    fn from(msg: String) -> Self {
        Self::Message(Cow::Owned(msg))
    }
}

impl<'a> From<Cow<'a, str>> for Payload<'a> {
    fn from(msg: Cow<'a, str>) -> Self {
        Self::Message(msg)
    }
}

impl From<fmt::Arguments<'_>> for Payload<'_> {
    fn from(args: fmt::Arguments<'_>) -> Self {
        Self::Message(Cow::Owned(args.to_string()))
    }
}

impl From<Color> for Payload<'_> {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}
