//! Grammar-driven text engine.
//!
//! One serializer and one deserializer cover a family of notations.
//! The notation is selected by a [`DataLanguageParams`] (the grammar's
//! tokens) and output layout by a [`TextSerializerParams`].
//!
//! Deserializer never aborts. Malformed input produces [`Diagnostic`]s in a
//! [`DiagnosticLog`], and parsing continues with the next field or element.
//! Check [`DiagnosticLog::is_empty`] after deserializing to know whether the
//! result can be trusted.

mod deserializer;
mod diagnostic;
mod grammar;
mod params;
mod serializer;
pub use deserializer::TextDeserializer;
pub use diagnostic::{Diagnostic, DiagnosticLog};
pub use grammar::DataLanguageParams;
pub use params::TextSerializerParams;
pub use serializer::TextSerializer;
