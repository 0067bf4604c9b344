use pizarra::{fixture, BoardConfig, BoardState, BoardView, StatusTab};
use tracing_subscriber::EnvFilter;

fn main() -> pizarra::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let store = fixture::load_today()?;
    let today = chrono::Utc::now().date_naive();
    let config = BoardConfig::default();

    let mut state = BoardState::new(today);
    if let Some(league) = std::env::args().nth(1) {
        state.toggle_league(&league);
    }
    if let Some(tab) = std::env::args().nth(2) {
        state.set_tab_param(&tab)?;
    }

    let view = BoardView::compose(&store, &state, today, &config);

    let dates: Vec<String> = view
        .dates
        .iter()
        .map(|d| {
            let mark = if d.is_selected { "*" } else { " " };
            format!("{mark}{} {}", d.day_abbrev, d.day_of_month)
        })
        .collect();
    println!("{}", dates.join("  "));

    for entry in &view.ticker {
        println!(
            "EN VIVO {:>4} {} {}-{} {}",
            entry.minute_label,
            entry.home_name(),
            entry.fixture.home_score.unwrap_or_default(),
            entry.fixture.away_score.unwrap_or_default(),
            entry.away_name()
        );
    }
    println!();

    for tab in &view.tabs {
        let mark = if tab.active { ">" } else { " " };
        print!("{mark}{} ({})  ", tab.label, tab.count);
    }
    println!("\n");

    if let Some(message) = view.empty_message() {
        println!("{message}");
    }
    for section in &view.sections {
        let country = section.country.map(|c| c.name.as_str()).unwrap_or_default();
        println!("{} [{}]", section.title(), country);
        for card in &section.cards {
            println!(
                "  {:>6}  {} {} - {} {}",
                card.status_label,
                card.home_name(),
                card.home_score,
                card.away_score,
                card.away_name()
            );
        }
    }

    if state.active_tab == StatusTab::All && state.selected_league.is_none() {
        let grouped = store.group_matches_by_league(store.matches());
        println!("\n{}", serde_json::to_string_pretty(&grouped).unwrap_or_default());
    }
    Ok(())
}
