//! Deserializers for fields that must never be printed.
//!
//! Values land in a [`SecretString`], whose `Debug` output is `[REDACTED]`
//! and which has no `Display` or `Serialize` implementation.

use secrecy::SecretString;
use serde::{Deserialize, Deserializer};

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

pub(crate) fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(SecretString::from))
}
