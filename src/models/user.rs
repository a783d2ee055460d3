use serde::Deserialize;

/// Caller-asserted identity attached to mutating requests. The role is
/// trusted as supplied; there is no token or session behind it.
#[derive(Debug, Deserialize, Clone)]
pub struct Actor {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: String,
}
