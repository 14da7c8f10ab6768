//! Deserialization helpers shared by the record models.

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` the same way as an omitted field: as the type's
/// zero value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
