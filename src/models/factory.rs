//! Record mapping strategies.
//!
//! A strategy is picked once, as the type parameter of
//! [`WebexApi`](crate::WebexApi), and every resource wrapper maps its
//! responses through it.

use super::{JsonObject, Record, SimpleRecord};

/// Maps raw JSON objects into the record type callers receive.
///
/// `Output<R>` is what a call returning resource `R` produces under this
/// strategy.
pub trait ModelFactory: Send + Sync + 'static {
    /// The output type for records of type `R`.
    type Output<R: Record>: Send + 'static;

    /// Maps one JSON object.
    fn build<R: Record>(data: JsonObject) -> Self::Output<R>;
}

/// Produces the typed record for each resource, e.g. [`Room`](super::Room).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypedModels;

impl ModelFactory for TypedModels {
    type Output<R: Record> = R;

    fn build<R: Record>(data: JsonObject) -> R {
        R::from_json(data)
    }
}

/// Hands back the raw JSON object untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawModels;

impl ModelFactory for RawModels {
    type Output<R: Record> = JsonObject;

    fn build<R: Record>(data: JsonObject) -> JsonObject {
        data
    }
}

/// Produces a [`SimpleRecord`] tagged with the resource's model name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimpleModels;

impl ModelFactory for SimpleModels {
    type Output<R: Record> = SimpleRecord;

    fn build<R: Record>(data: JsonObject) -> SimpleRecord {
        SimpleRecord::new(R::MODEL, data)
    }
}
