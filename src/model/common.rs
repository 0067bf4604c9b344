use serde::Serialize;

/// A country leagues are filed under in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    pub id: String,
    pub name: String,
}

/// A competition. `country` references [`Country::id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct League {
    pub id: String,
    pub name: String,
    pub country: String,
    /// Listed under the sidebar's featured section.
    pub featured: bool,
    pub logo: String,
}
