mod match_state;
mod player;
pub mod timestamp;
mod tournament;

pub use match_state::*;
pub use player::*;
pub use tournament::*;

use serde::{Deserialize, Deserializer};

/// The backend writes empty lists as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
