use crate::domain::model::Standings;
use crate::utils::error::Result;

/// The built-in debugging dataset: a single division with one team that has
/// not played yet.
pub fn sample_standings() -> Result<Standings> {
    let literal = serde_json::json!({
        "200": {
            "div_name": "American League West",
            "teams": [
                { "name": "Angels", "w": 0, "l": 0, "gb": "-" }
            ]
        }
    });

    Ok(serde_json::from_value(literal)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_standings() {
        let data = sample_standings().unwrap();
        assert_eq!(data.len(), 1);

        let div = &data["200"];
        assert_eq!(div.div_name.as_deref(), Some("American League West"));
        let teams = div.teams.as_ref().unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].name, "Angels");
        assert_eq!((teams[0].w, teams[0].l), (0, 0));
    }
}
