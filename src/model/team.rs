use serde::Serialize;

/// A club. Matches reference teams by [`Team::id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub logo: String,
    /// Accent color as a CSS hex string.
    pub color: String,
}
