//! Board composition: selector state plus store queries, turned into the
//! sections a view draws. Nothing here is cached; every call to
//! [`BoardView::compose`] re-derives the whole board from the store.

mod card;
mod dates;
mod sidebar;

pub use card::{score_text, status_label, team_name, MatchCard, FINAL_LABEL, NO_SCORE};
pub use dates::{date_chips, day_abbrev, DateChip, DATE_FORMAT};
pub use sidebar::{CountrySection, Sidebar, SidebarEntry};

use chrono::NaiveDate;
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

use crate::config::BoardConfig;
use crate::enums::StatusTab;
use crate::error::Result;
use crate::model::{Country, League, Match, Team};
use crate::store::Store;

/// Shown when the current selection leaves no matches.
pub const EMPTY_BOARD_MESSAGE: &str = "NO HAY PARTIDOS";

/// What the visitor has picked on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub selected_date: NaiveDate,
    pub selected_league: Option<String>,
    pub active_tab: StatusTab,
    pub expanded_match: Option<u32>,
}

impl BoardState {
    /// Today selected, no league, every status.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selected_date: today,
            selected_league: None,
            active_tab: StatusTab::All,
            expanded_match: None,
        }
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    /// Select a league, or clear the selection if it is already selected.
    pub fn toggle_league(&mut self, league_id: &str) {
        if self.selected_league.as_deref() == Some(league_id) {
            self.selected_league = None;
        } else {
            self.selected_league = Some(league_id.to_string());
        }
    }

    pub fn clear_league(&mut self) {
        self.selected_league = None;
    }

    pub fn set_tab(&mut self, tab: StatusTab) {
        self.active_tab = tab;
    }

    /// Switch tab from a tab id passed back by a view.
    pub fn set_tab_param(&mut self, tab: &str) -> Result<()> {
        self.active_tab = StatusTab::parse_param(tab)?;
        Ok(())
    }

    /// Expand a match's event panel, or collapse it if already expanded.
    /// Matches without events never expand.
    pub fn toggle_expanded(&mut self, fixture: &Match) {
        if !fixture.has_events() {
            return;
        }
        self.expanded_match = if self.expanded_match == Some(fixture.id) {
            None
        } else {
            Some(fixture.id)
        };
    }
}

/// A status tab with the number of matches behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabCount {
    pub tab: StatusTab,
    pub label: &'static str,
    pub count: usize,
    pub active: bool,
}

/// Tab counts over the whole store. The league selection does not change them.
pub fn tab_counts(store: &Store, active: StatusTab) -> Vec<TabCount> {
    StatusTab::iter()
        .map(|tab| TabCount {
            tab,
            label: tab.label(),
            count: match tab.status() {
                None => store.matches().len(),
                Some(status) => store.get_matches_by_status(status).len(),
            },
            active: tab == active,
        })
        .collect()
}

/// A live match in the scrolling ticker.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerEntry<'a> {
    #[serde(rename = "match")]
    pub fixture: &'a Match,
    pub home: Option<&'a Team>,
    pub away: Option<&'a Team>,
    pub minute_label: String,
}

impl TickerEntry<'_> {
    pub fn home_name(&self) -> &str {
        team_name(self.home)
    }

    pub fn away_name(&self) -> &str {
        team_name(self.away)
    }
}

/// Every live match, in store order, regardless of the current selection.
pub fn ticker(store: &Store) -> Vec<TickerEntry<'_>> {
    store
        .get_matches_by_status(crate::enums::MatchStatus::Live)
        .into_iter()
        .map(|fixture| TickerEntry {
            fixture,
            home: store.get_team(&fixture.home_team),
            away: store.get_team(&fixture.away_team),
            minute_label: status_label(fixture),
        })
        .collect()
}

/// Matches of one league under a league heading.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSection<'a> {
    pub league_id: &'a str,
    /// `None` when the id does not resolve; views show a bare heading.
    pub league: Option<&'a League>,
    pub country: Option<&'a Country>,
    pub cards: Vec<MatchCard<'a>>,
}

impl LeagueSection<'_> {
    pub fn title(&self) -> &str {
        self.league.map(|l| l.name.as_str()).unwrap_or_default()
    }
}

/// The whole board for one [`BoardState`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView<'a> {
    pub dates: Vec<DateChip>,
    pub ticker: Vec<TickerEntry<'a>>,
    pub tabs: Vec<TabCount>,
    pub sidebar: Sidebar<'a>,
    pub sections: Vec<LeagueSection<'a>>,
}

impl<'a> BoardView<'a> {
    /// Filter by league then tab, group by league and resolve every id the
    /// view will print.
    #[instrument(skip(store, config))]
    pub fn compose(
        store: &'a Store,
        state: &BoardState,
        today: NaiveDate,
        config: &BoardConfig,
    ) -> Self {
        let visible =
            store.get_filtered_matches(state.selected_league.as_deref(), state.active_tab);
        let groups = store.group_matches_by_league(visible);

        let sections: Vec<LeagueSection<'a>> = groups
            .into_iter()
            .map(|group| {
                let league = store.get_league(group.league_id);
                LeagueSection {
                    league_id: group.league_id,
                    league,
                    country: league.and_then(|l| store.get_country(&l.country)),
                    cards: group
                        .matches
                        .into_iter()
                        .map(|m| MatchCard::new(store, m, state.expanded_match == Some(m.id)))
                        .collect(),
                }
            })
            .collect();

        debug!(sections = sections.len(), "composed board");
        Self {
            dates: date_chips(today, state.selected_date, config),
            ticker: ticker(store),
            tabs: tab_counts(store, state.active_tab),
            sidebar: Sidebar::new(store, state.selected_league.as_deref()),
            sections,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// [`EMPTY_BOARD_MESSAGE`] when there is nothing to list.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_BOARD_MESSAGE)
    }

    pub fn card_count(&self) -> usize {
        self.sections.iter().map(|s| s.cards.len()).sum()
    }
}
