//! Type-safe identifier wrappers around [`String`].
//!
//! Zones, resources, and stations are keyed by short human-readable slugs
//! (`davis-1`, `truck-2`, `SAC-1`) assigned by the ingestion layer. Each kind
//! of entity gets its own newtype so a resource id can never be used to look
//! up a zone.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around [`String`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub String);

        impl $name {
            /// Create an identifier from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a fire zone.
    ZoneId
}

define_id! {
    /// Unique identifier for a mobile response resource.
    ResourceId
}

define_id! {
    /// Unique identifier for a fire station.
    StationId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_raw_slug() {
        let zone = ZoneId::new("davis-1");
        assert_eq!(zone.to_string(), "davis-1");
        assert_eq!(zone.as_str(), "davis-1");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ResourceId::from("truck-1");
        let json = serde_json::to_string(&id).unwrap_or_default();
        assert_eq!(json, "\"truck-1\"");

        let back: Result<ResourceId, _> = serde_json::from_str("\"crew-1\"");
        assert_eq!(back.ok(), Some(ResourceId::new("crew-1")));
    }

    #[test]
    fn ids_order_lexicographically() {
        let mut ids = vec![ZoneId::new("woodland-1"), ZoneId::new("davis-1")];
        ids.sort();
        assert_eq!(ids.first().map(ZoneId::as_str), Some("davis-1"));
    }
}
