//! Domain records for Webex API responses.
//!
//! Every item the API returns is a JSON object. This module decides what
//! callers receive in its place:
//!
//! - [`JsonObject`]: The raw, order-preserving JSON mapping
//! - [`Record`]: Read-only typed records such as [`Room`] or [`Person`],
//!   each backed by the mapping it was built from
//! - [`SimpleRecord`]: A dynamic record with attribute lookup by name
//! - [`ModelFactory`]: The strategy that picks one of the above, chosen
//!   once per client and applied to every response
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use webex_api::models::{JsonObject, Record, Room};
//!
//! let data: JsonObject = serde_json::from_value(json!({
//!     "id": "Y2lz",
//!     "title": "Project Unicorn",
//!     "isLocked": false,
//!     "created": "2015-10-18T14:26:16.000Z"
//! }))
//! .unwrap();
//!
//! let room = Room::from_json(data);
//! assert_eq!(room.title(), Some("Project Unicorn"));
//! assert_eq!(room.is_locked(), Some(false));
//! assert!(room.created().is_some());
//! assert!(room.team_id().is_none());
//! ```

/// Declares a typed record: a newtype over [`JsonObject`] with one
/// read-only accessor per field.
///
/// Field kinds map to accessor return types:
/// `string` → `Option<&str>`, `boolean` → `Option<bool>`,
/// `integer` → `Option<i64>`, `datetime` → `Option<DateTime<Utc>>`,
/// `strings` → `Vec<&str>`, `value` → `Option<&Value>`.
macro_rules! record {
    (@ty string) => { Option<&str> };
    (@ty boolean) => { Option<bool> };
    (@ty integer) => { Option<i64> };
    (@ty datetime) => { Option<chrono::DateTime<chrono::Utc>> };
    (@ty strings) => { Vec<&str> };
    (@ty value) => { Option<&serde_json::Value> };

    (
        $(#[$meta:meta])*
        $name:ident => $model:literal {
            $(
                $(#[$field_meta:meta])*
                $method:ident: $kind:ident($key:literal)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name($crate::models::JsonObject);

        impl $crate::models::Record for $name {
            const MODEL: &'static str = $model;

            fn from_json(data: $crate::models::JsonObject) -> Self {
                Self(data)
            }

            fn json_data(&self) -> &$crate::models::JsonObject {
                &self.0
            }

            fn into_json(self) -> $crate::models::JsonObject {
                self.0
            }
        }

        impl $name {
            $(
                $(#[$field_meta])*
                #[must_use]
                pub fn $method(&self) -> record!(@ty $kind) {
                    $crate::models::fields::$kind(&self.0, $key)
                }
            )*
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let pretty = serde_json::to_string_pretty(&self.0).map_err(|_| std::fmt::Error)?;
                f.write_str(&pretty)
            }
        }
    };
}

mod factory;
pub(crate) mod fields;
mod records;
mod simple;

pub use factory::{ModelFactory, RawModels, SimpleModels, TypedModels};
pub use records::{
    AttachmentAction, Event, GuestIssuerToken, Meeting, MeetingInvitee, Membership, Message,
    Person, Recording, Room, RoomMeetingInfo, Team, TeamMembership, Webhook,
};
pub use simple::SimpleRecord;

use serde_json::Value;

/// A JSON object as returned by the API, keys in server order.
pub type JsonObject = serde_json::Map<String, Value>;

/// A read-only record backed by a JSON object.
///
/// Records never change after construction. Two fetches of the same
/// server-side entity are separate records.
pub trait Record: Clone + std::fmt::Debug + Send + Sync + 'static {
    /// The model name, e.g. `"room"`.
    const MODEL: &'static str;

    /// Wraps a JSON object.
    fn from_json(data: JsonObject) -> Self;

    /// Returns the underlying JSON object.
    fn json_data(&self) -> &JsonObject;

    /// Consumes the record, returning the underlying JSON object.
    fn into_json(self) -> JsonObject;

    /// Serializes the record back to a compact JSON string.
    fn to_json(&self) -> String {
        Value::Object(self.json_data().clone()).to_string()
    }
}

