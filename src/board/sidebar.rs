use serde::Serialize;

use crate::model::{Country, League};
use crate::store::Store;

/// A league button in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarEntry<'a> {
    pub league: &'a League,
    pub country: Option<&'a Country>,
    pub selected: bool,
}

/// A country heading followed by its leagues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountrySection<'a> {
    pub country: &'a Country,
    pub leagues: Vec<SidebarEntry<'a>>,
}

/// Featured leagues first, then every league filed under its country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sidebar<'a> {
    pub featured: Vec<SidebarEntry<'a>>,
    pub by_country: Vec<CountrySection<'a>>,
}

impl<'a> Sidebar<'a> {
    pub fn new(store: &'a Store, selected_league: Option<&str>) -> Self {
        let entry = |league: &'a League| SidebarEntry {
            league,
            country: store.get_country(&league.country),
            selected: selected_league == Some(league.id.as_str()),
        };

        let featured = store.get_featured_leagues().into_iter().map(entry).collect();

        // Countries without any league are left out.
        let by_country = store
            .countries()
            .iter()
            .filter_map(|country| {
                let leagues: Vec<_> = store
                    .get_leagues_by_country(&country.id)
                    .into_iter()
                    .map(entry)
                    .collect();
                (!leagues.is_empty()).then_some(CountrySection { country, leagues })
            })
            .collect();

        Self {
            featured,
            by_country,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::fixture;

    fn store() -> Store {
        fixture::load(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()).unwrap()
    }

    #[test]
    fn test_sidebar_sections() {
        let store = store();
        let sidebar = Sidebar::new(&store, None);

        assert_eq!(sidebar.featured.len(), 8);
        assert_eq!(sidebar.featured[0].league.id, "laliga");
        assert_eq!(sidebar.featured[0].country.unwrap().name, "Espana");

        let countries: Vec<&str> = sidebar
            .by_country
            .iter()
            .map(|s| s.country.id.as_str())
            .collect();
        assert_eq!(countries, ["esp", "eng", "ita", "ger", "fra", "arg", "bra", "int"]);
        let total: usize = sidebar.by_country.iter().map(|s| s.leagues.len()).sum();
        assert_eq!(total, store.leagues().len());

        assert!(sidebar
            .featured
            .iter()
            .chain(sidebar.by_country.iter().flat_map(|s| &s.leagues))
            .all(|e| !e.selected));
    }

    #[test]
    fn test_sidebar_marks_selection_everywhere_it_appears() {
        let store = store();
        let sidebar = Sidebar::new(&store, Some("ucl"));

        let featured: Vec<&str> = sidebar
            .featured
            .iter()
            .filter(|e| e.selected)
            .map(|e| e.league.id.as_str())
            .collect();
        assert_eq!(featured, ["ucl"]);

        let international = sidebar.by_country.last().unwrap();
        assert_eq!(international.country.id, "int");
        assert!(international.leagues[0].selected);
        assert!(!international.leagues[1].selected);
    }

    #[test]
    fn test_sidebar_skips_countries_without_leagues() {
        let mut countries = store().countries().to_vec();
        countries.push(Country {
            id: "por".to_string(),
            name: "Portugal".to_string(),
        });
        let base = store();
        let store = Store::try_new(
            countries,
            base.leagues().to_vec(),
            base.teams().to_vec(),
            base.matches().to_vec(),
        )
        .unwrap();

        let sidebar = Sidebar::new(&store, None);
        assert_eq!(sidebar.by_country.len(), 8);
        assert!(sidebar.by_country.iter().all(|s| s.country.id != "por"));
    }
}
