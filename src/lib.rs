pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::RenderOptions;
pub use crate::core::{
    pipeline::StandingsPipeline,
    renderer::{render, render_with, StandingsRenderer},
    standings::{build_view, win_pct},
};
pub use crate::domain::model::{Division, League, Standings, StandingsView, Team};
pub use crate::domain::sample::sample_standings;
pub use crate::utils::error::{Result, StandingsError};
