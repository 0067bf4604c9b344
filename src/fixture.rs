//! The canonical La Pizarra dataset.
//!
//! Every match is scheduled on the day passed to [`load`], so the board always
//! has something live, upcoming and finished for "today".

use chrono::{NaiveDate, NaiveTime, Utc};
use tracing::{debug, instrument};

use crate::enums::{MatchStatus, TeamSide};
use crate::error::Result;
use crate::model::{Country, League, Match, MatchEvent, Team, KICKOFF_FORMAT};
use crate::store::Store;

use TeamSide::{Away, Home};

const ESPN_TEAM_LOGO: &str = "https://a.espncdn.com/i/teamlogos/soccer/500";
const ESPN_LEAGUE_LOGO: &str = "https://a.espncdn.com/i/leaguelogos/soccer/500";

pub(crate) fn team_logo(espn_id: u32) -> String {
    format!("{ESPN_TEAM_LOGO}/{espn_id}.png")
}

pub(crate) fn league_logo(espn_id: u32) -> String {
    format!("{ESPN_LEAGUE_LOGO}/{espn_id}.png")
}

/// (id, name)
const COUNTRIES: &[(&str, &str)] = &[
    ("esp", "Espana"),
    ("eng", "Inglaterra"),
    ("ita", "Italia"),
    ("ger", "Alemania"),
    ("fra", "Francia"),
    ("arg", "Argentina"),
    ("bra", "Brasil"),
    ("int", "Internacional"),
];

/// (id, name, country, featured, espn logo id)
const LEAGUES: &[(&str, &str, &str, bool, u32)] = &[
    ("laliga", "La Liga", "esp", true, 15),
    ("coparey", "Copa del Rey", "esp", false, 80),
    ("segunda", "La Liga 2", "esp", false, 107),
    ("premier", "Premier League", "eng", true, 23),
    ("facup", "FA Cup", "eng", false, 40),
    ("championship", "Championship", "eng", false, 24),
    ("eflcup", "EFL Cup", "eng", false, 41),
    ("seriea", "Serie A", "ita", true, 12),
    ("copaitalia", "Coppa Italia", "ita", false, 2192),
    ("bundesliga", "Bundesliga", "ger", true, 10),
    ("dfbpokal", "DFB-Pokal", "ger", false, 2061),
    ("ligue1", "Ligue 1", "fra", false, 9),
    ("coupedefrance", "Coupe de France", "fra", false, 182),
    ("lpf", "Liga Profesional", "arg", true, 1),
    ("copaarg", "Copa Argentina", "arg", false, 2320),
    ("brasileirao", "Brasileirao", "bra", false, 85),
    ("copabrasil", "Copa do Brasil", "bra", false, 528),
    ("ucl", "Champions League", "int", true, 2),
    ("uel", "Europa League", "int", true, 2310),
    ("uecl", "Conference League", "int", false, 20296),
    ("libertadores", "Copa Libertadores", "int", true, 58),
    ("sudamericana", "Copa Sudamericana", "int", false, 1208),
];

/// (id, name, short name, espn logo id, color)
const TEAMS: &[(&str, &str, &str, u32, &str)] = &[
    // La Liga
    ("real-madrid", "Real Madrid", "RMA", 86, "#FFFFFF"),
    ("barcelona", "FC Barcelona", "BAR", 83, "#A50044"),
    ("atletico", "Atlético Madrid", "ATM", 1068, "#CB3524"),
    ("sevilla", "Sevilla FC", "SEV", 243, "#F43333"),
    ("villarreal", "Villarreal CF", "VIL", 102, "#FFE667"),
    ("real-sociedad", "Real Sociedad", "RSO", 89, "#0067B1"),
    ("betis", "Real Betis", "BET", 244, "#00954C"),
    ("athletic", "Athletic Club", "ATH", 93, "#EE2523"),
    // Premier League
    ("man-city", "Manchester City", "MCI", 382, "#6CABDD"),
    ("arsenal", "Arsenal", "ARS", 359, "#EF0107"),
    ("liverpool", "Liverpool", "LIV", 364, "#C8102E"),
    ("man-utd", "Manchester United", "MUN", 360, "#DA291C"),
    ("chelsea", "Chelsea", "CHE", 363, "#034694"),
    ("tottenham", "Tottenham", "TOT", 367, "#132257"),
    ("newcastle", "Newcastle United", "NEW", 361, "#241F20"),
    ("aston-villa", "Aston Villa", "AVL", 362, "#95BFE5"),
    // Serie A
    ("inter", "Inter Milan", "INT", 110, "#0068A8"),
    ("milan", "AC Milan", "MIL", 103, "#FB090B"),
    ("juventus", "Juventus", "JUV", 111, "#000000"),
    ("napoli", "Napoli", "NAP", 114, "#12A0D7"),
    ("roma", "AS Roma", "ROM", 104, "#8E1F2F"),
    ("lazio", "Lazio", "LAZ", 112, "#87D8F7"),
    // Bundesliga
    ("bayern", "Bayern Munich", "BAY", 132, "#DC052D"),
    ("dortmund", "Borussia Dortmund", "BVB", 124, "#FDE100"),
    ("leverkusen", "Bayer Leverkusen", "B04", 131, "#E32221"),
    ("leipzig", "RB Leipzig", "RBL", 11420, "#DD0741"),
    // Ligue 1
    ("psg", "Paris Saint-Germain", "PSG", 160, "#004170"),
    ("marseille", "Olympique Marseille", "OM", 176, "#2FAEE0"),
    ("lyon", "Olympique Lyon", "OL", 167, "#1A4571"),
    ("monaco", "AS Monaco", "MON", 174, "#E2001A"),
    // Argentina
    ("boca", "Boca Juniors", "BOC", 5, "#003DA5"),
    ("river", "River Plate", "RIV", 16, "#E4002B"),
    ("racing", "Racing Club", "RAC", 15, "#72C5F1"),
    ("independiente", "Independiente", "IND", 11, "#E31837"),
    ("san-lorenzo", "San Lorenzo", "SL", 18, "#0033A0"),
    ("estudiantes", "Estudiantes LP", "EST", 8, "#E31837"),
    // Brasil
    ("flamengo", "Flamengo", "FLA", 819, "#E4002B"),
    ("palmeiras", "Palmeiras", "PAL", 2029, "#006437"),
    ("corinthians", "Corinthians", "COR", 874, "#000000"),
    ("santos", "Santos", "SAN", 2674, "#000000"),
];

/// Load the dataset with every match dated `today`.
#[instrument]
pub fn load(today: NaiveDate) -> Result<Store> {
    let countries = COUNTRIES
        .iter()
        .map(|&(id, name)| Country {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect();

    let leagues = LEAGUES
        .iter()
        .map(|&(id, name, country, featured, logo)| League {
            id: id.to_string(),
            name: name.to_string(),
            country: country.to_string(),
            featured,
            logo: league_logo(logo),
        })
        .collect();

    let teams = TEAMS
        .iter()
        .map(|&(id, name, short_name, logo, color)| Team {
            id: id.to_string(),
            name: name.to_string(),
            short_name: short_name.to_string(),
            logo: team_logo(logo),
            color: color.to_string(),
        })
        .collect();

    let matches = matches(today)?;
    debug!(count = matches.len(), "built fixture matches");

    Store::try_new(countries, leagues, teams, matches)
}

/// Load the dataset for the current UTC date.
pub fn load_today() -> Result<Store> {
    load(Utc::now().date_naive())
}

struct Fixture {
    id: u32,
    league: &'static str,
    home: &'static str,
    away: &'static str,
    status: MatchStatus,
    score: Option<(u8, u8)>,
    minute: Option<u8>,
    time: &'static str,
    events: Vec<MatchEvent>,
}

impl Fixture {
    fn live(
        id: u32,
        league: &'static str,
        (home, away): (&'static str, &'static str),
        score: (u8, u8),
        minute: u8,
        time: &'static str,
    ) -> Self {
        Self {
            id,
            league,
            home,
            away,
            status: MatchStatus::Live,
            score: Some(score),
            minute: Some(minute),
            time,
            events: Vec::new(),
        }
    }

    fn upcoming(
        id: u32,
        league: &'static str,
        (home, away): (&'static str, &'static str),
        time: &'static str,
    ) -> Self {
        Self {
            id,
            league,
            home,
            away,
            status: MatchStatus::Upcoming,
            score: None,
            minute: None,
            time,
            events: Vec::new(),
        }
    }

    fn finished(
        id: u32,
        league: &'static str,
        (home, away): (&'static str, &'static str),
        score: (u8, u8),
        time: &'static str,
    ) -> Self {
        Self {
            id,
            league,
            home,
            away,
            status: MatchStatus::Finished,
            score: Some(score),
            minute: None,
            time,
            events: Vec::new(),
        }
    }

    fn events(mut self, events: Vec<MatchEvent>) -> Self {
        self.events = events;
        self
    }

    fn build(self, date: NaiveDate) -> Result<Match> {
        Ok(Match {
            id: self.id,
            league: self.league.to_string(),
            home_team: self.home.to_string(),
            away_team: self.away.to_string(),
            home_score: self.score.map(|(home, _)| home),
            away_score: self.score.map(|(_, away)| away),
            status: self.status,
            minute: self.minute,
            date,
            time: NaiveTime::parse_from_str(self.time, KICKOFF_FORMAT)?,
            events: self.events,
        })
    }
}

fn matches(today: NaiveDate) -> Result<Vec<Match>> {
    let goal = MatchEvent::goal;
    let red = MatchEvent::red_card;

    let fixtures = vec![
        Fixture::live(1, "ucl", ("real-madrid", "man-city"), (2, 1), 67, "21:00").events(vec![
            goal(12, Home, "Vinicius Jr."),
            goal(34, Away, "Haaland"),
            goal(58, Home, "Bellingham"),
            red(63, Away, "Walker"),
        ]),
        Fixture::live(2, "ucl", ("barcelona", "psg"), (1, 1), 72, "21:00").events(vec![
            goal(23, Away, "Dembele"),
            goal(45, Home, "Lewandowski"),
        ]),
        Fixture::live(3, "premier", ("arsenal", "liverpool"), (0, 0), 23, "20:45"),
        Fixture::live(4, "lpf", ("boca", "river"), (1, 2), 81, "19:00").events(vec![
            goal(15, Away, "Borja"),
            goal(44, Home, "Cavani"),
            goal(67, Away, "Solari"),
            red(75, Home, "Rojo"),
        ]),
        Fixture::live(5, "seriea", ("inter", "milan"), (3, 0), 55, "20:45").events(vec![
            goal(8, Home, "Lautaro"),
            goal(31, Home, "Barella"),
            goal(52, Home, "Thuram"),
        ]),
        Fixture::upcoming(6, "laliga", ("atletico", "sevilla"), "22:00"),
        Fixture::upcoming(7, "bundesliga", ("bayern", "dortmund"), "20:30"),
        Fixture::upcoming(8, "premier", ("chelsea", "tottenham"), "18:30"),
        Fixture::upcoming(9, "ligue1", ("psg", "marseille"), "21:00"),
        Fixture::upcoming(10, "libertadores", ("flamengo", "palmeiras"), "21:30"),
        Fixture::upcoming(11, "uel", ("roma", "leverkusen"), "21:00"),
        Fixture::finished(12, "laliga", ("real-sociedad", "betis"), (2, 1), "14:00").events(vec![
            goal(22, Home, "Oyarzabal"),
            goal(56, Away, "Fekir"),
            goal(78, Home, "Take Kubo"),
        ]),
        Fixture::finished(13, "premier", ("man-utd", "newcastle"), (1, 3), "15:00").events(vec![
            goal(11, Away, "Isak"),
            goal(33, Home, "Rashford"),
            goal(67, Away, "Gordon"),
            goal(89, Away, "Isak"),
        ]),
        Fixture::finished(14, "seriea", ("juventus", "napoli"), (0, 1), "18:00")
            .events(vec![goal(44, Away, "Osimhen")]),
        Fixture::finished(15, "bundesliga", ("leverkusen", "leipzig"), (4, 2), "15:30").events(
            vec![
                goal(5, Home, "Wirtz"),
                goal(19, Away, "Openda"),
                goal(34, Home, "Boniface"),
                goal(55, Home, "Grimaldo"),
                goal(72, Away, "Nkunku"),
                goal(88, Home, "Wirtz"),
            ],
        ),
        Fixture::finished(16, "lpf", ("racing", "independiente"), (2, 2), "16:00").events(vec![
            goal(12, Home, "Maravilla"),
            goal(38, Away, "Romero"),
            goal(61, Home, "Chancalay"),
            goal(85, Away, "Velasco"),
        ]),
        Fixture::finished(17, "coparey", ("athletic", "villarreal"), (3, 1), "19:00").events(vec![
            goal(22, Home, "Williams"),
            goal(47, Home, "Muniain"),
            goal(68, Away, "Gerard Moreno"),
            goal(82, Home, "Williams"),
        ]),
    ];

    fixtures.into_iter().map(|f| f.build(today)).collect()
}
