use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Division id (a numeric string such as `"200"`) to division record.
pub type Standings = HashMap<String, Division>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Division {
    #[serde(default)]
    pub div_name: Option<String>,
    #[serde(default)]
    pub teams: Option<Vec<Team>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub w: u32,
    pub l: u32,
    #[serde(default = "default_gb")]
    pub gb: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<u32>,
}

fn default_gb() -> String {
    "-".to_string()
}

/// A division that passed the keyword filter, borrowed from the input mapping.
#[derive(Debug, Clone, Copy)]
pub struct MatchedDivision<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub division: &'a Division,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum League {
    American,
    National,
}

impl League {
    pub fn from_division_name(div_name: &str) -> Self {
        if div_name.contains("American") {
            League::American
        } else {
            League::National
        }
    }

    pub fn league_id(&self) -> &'static str {
        match self {
            League::American => "103",
            League::National => "104",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamView {
    pub name: String,
    pub team_id: Option<u32>,
    pub w: u32,
    pub l: u32,
    pub gb: String,
    /// `None` when no games have been played.
    pub raw_pct: Option<f64>,
    pub pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionView {
    pub id: String,
    pub name: String,
    pub league: League,
    pub teams: Vec<TeamView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsView {
    pub keyword: String,
    pub divisions: Vec<DivisionView>,
}

impl StandingsView {
    pub fn division_count(&self) -> usize {
        self.divisions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_without_name_deserializes() {
        let div: Division = serde_json::from_value(serde_json::json!({
            "teams": [{ "name": "Angels", "w": 1, "l": 2 }]
        }))
        .unwrap();

        assert!(div.div_name.is_none());
        let teams = div.teams.unwrap();
        assert_eq!(teams[0].gb, "-");
        assert_eq!(teams[0].team_id, None);
    }

    #[test]
    fn test_league_from_division_name() {
        assert_eq!(
            League::from_division_name("American League West"),
            League::American
        );
        assert_eq!(
            League::from_division_name("National League East"),
            League::National
        );
        assert_eq!(League::American.league_id(), "103");
        assert_eq!(League::National.league_id(), "104");
    }
}
