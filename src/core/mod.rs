pub mod pipeline;
pub mod renderer;
pub mod standings;

pub use crate::domain::model::{
    Division, DivisionView, League, MatchedDivision, Standings, StandingsView, Team, TeamView,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, TraceSink};
pub use crate::utils::error::Result;
