use crate::core::{
    DivisionView, League, MatchedDivision, Standings, StandingsView, Team, TeamView,
};
use crate::utils::error::{Result, StandingsError};
use feruca::{Collator, Tailoring};
use std::cmp::Ordering;

/// CLDR root order with spaces and punctuation weighted like letters, the
/// same defaults `localeCompare` uses. Accents are secondary to the base
/// letter and lowercase sorts ahead of uppercase on a case-only tie.
fn name_collator() -> Collator {
    Collator::new(Tailoring::default(), false, true)
}

pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    name_collator().collate(a, b)
}

/// Keeps divisions whose name contains `keyword` (case-sensitive; unnamed
/// divisions never match) and orders them by name. Equal names fall back to
/// the division id so the result never depends on map iteration order.
pub fn filter_and_order<'a>(data: &'a Standings, keyword: &str) -> Vec<MatchedDivision<'a>> {
    let mut matched: Vec<MatchedDivision<'a>> = data
        .iter()
        .filter_map(|(id, division)| {
            let name = division.div_name.as_deref()?;
            name.contains(keyword).then_some(MatchedDivision {
                id: id.as_str(),
                name,
                division,
            })
        })
        .collect();

    let mut collator = name_collator();
    matched.sort_by(|a, b| {
        collator
            .collate(a.name, b.name)
            .then_with(|| a.id.cmp(b.id))
    });
    matched
}

/// Most wins first. `sort_by` is stable, so teams level on wins keep their input order.
pub fn order_teams(teams: &[Team]) -> Vec<&Team> {
    let mut ordered: Vec<&Team> = teams.iter().collect();
    ordered.sort_by(|a, b| b.w.cmp(&a.w));
    ordered
}

/// `w / (w + l)`, or `None` before any game has been played.
pub fn raw_pct(w: u32, l: u32) -> Option<f64> {
    let games = u64::from(w) + u64::from(l);
    if games == 0 {
        None
    } else {
        Some(w as f64 / games as f64)
    }
}

/// Winning percentage with the zero-games case pinned to `0.0`.
pub fn win_pct(w: u32, l: u32) -> f64 {
    raw_pct(w, l).unwrap_or(0.0)
}

pub fn format_pct(pct: f64) -> String {
    format!("{:.3}", pct)
}

/// Box-score style: `0.500` becomes `.500`. A perfect `1.000` keeps its digit.
pub fn format_pct_fixed(pct: f64) -> String {
    let formatted = format_pct(pct);
    match formatted.strip_prefix('0') {
        Some(rest) => rest.to_string(),
        None => formatted,
    }
}

pub fn format_raw_pct(raw: Option<f64>) -> String {
    match raw {
        Some(value) => value.to_string(),
        None => "NaN".to_string(),
    }
}

pub fn team_view(team: &Team) -> TeamView {
    let raw = raw_pct(team.w, team.l);
    TeamView {
        name: team.name.clone(),
        team_id: team.team_id,
        w: team.w,
        l: team.l,
        gb: team.gb.clone(),
        raw_pct: raw,
        pct: raw.unwrap_or(0.0),
    }
}

pub fn division_view(matched: &MatchedDivision<'_>) -> Result<DivisionView> {
    let teams = matched.division.teams.as_ref().ok_or_else(|| {
        StandingsError::render_failure(format!(
            "division {} ({}) has no team list",
            matched.id, matched.name
        ))
    })?;

    Ok(DivisionView {
        id: matched.id.to_string(),
        name: matched.name.to_string(),
        league: League::from_division_name(matched.name),
        teams: order_teams(teams).into_iter().map(team_view).collect(),
    })
}

/// Filter, order and compute percentages for every matching division.
pub fn build_view(data: &Standings, keyword: &str) -> Result<StandingsView> {
    let divisions = filter_and_order(data, keyword)
        .iter()
        .map(division_view)
        .collect::<Result<Vec<_>>>()?;

    Ok(StandingsView {
        keyword: keyword.to_string(),
        divisions,
    })
}

pub fn header_line(keyword: &str) -> String {
    format!("Rendering for {}", keyword)
}

pub fn count_line(count: usize) -> String {
    format!("Found {} divisions", count)
}

pub fn division_lines(division: &DivisionView, show_fixed: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(division.teams.len() + 1);
    lines.push(format!(
        "{} [{} {}]",
        division.name,
        division.league.league_id(),
        division.id
    ));

    for (idx, team) in division.teams.iter().enumerate() {
        let mut line = format!(
            "  {}. {} {}-{} GB {} | PCT raw: {} | PCT: {}",
            idx + 1,
            team.name,
            team.w,
            team.l,
            team.gb,
            format_raw_pct(team.raw_pct),
            format_pct(team.pct)
        );
        if show_fixed {
            line.push_str(&format!(" | Fixed: {}", format_pct_fixed(team.pct)));
        }
        lines.push(line);
    }

    lines
}
