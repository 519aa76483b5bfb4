//! Primitive types and newtypes for type-safe API interactions.
//!
//! Lightdash identifies almost everything by UUID string. Wrapping each kind
//! of identifier in its own type keeps a project UUID from being passed where
//! a group UUID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id! {
    /// UUID of a Lightdash project.
    ///
    /// # Example
    ///
    /// ```
    /// use lightdash_rs::ProjectUuid;
    ///
    /// let project = ProjectUuid::new("3675b69e-8324-4110-bdca-059031aa8da3");
    /// assert_eq!(project.as_str(), "3675b69e-8324-4110-bdca-059031aa8da3");
    /// ```
    ProjectUuid
}

string_id! {
    /// UUID of an organization.
    OrganizationUuid
}

string_id! {
    /// UUID of a user.
    UserUuid
}

string_id! {
    /// UUID of a user group.
    GroupUuid
}

string_id! {
    /// UUID of a space.
    SpaceUuid
}

string_id! {
    /// Identifier of an explore within a project (its table name, e.g. `orders`).
    ExploreId
}
