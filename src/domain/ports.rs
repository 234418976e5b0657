use crate::domain::model::{MatchedDivision, Standings, StandingsView};
use crate::utils::error::Result;

pub trait ConfigProvider {
    fn keyword(&self) -> &str;
    fn show_fixed(&self) -> bool;
    fn emit_json(&self) -> bool;
}

/// Receives the human-readable trace lines.
pub trait TraceSink {
    fn emit(&mut self, line: &str);
}

impl<T: TraceSink + ?Sized> TraceSink for &mut T {
    fn emit(&mut self, line: &str) {
        (**self).emit(line)
    }
}

/// Each phase writes its trace lines as it goes, so a failing phase leaves
/// the output of the earlier ones in the sink.
pub trait Pipeline {
    /// Selects and orders the divisions to render.
    fn extract<'d>(&mut self, data: &'d Standings) -> Result<Vec<MatchedDivision<'d>>>;
    /// Orders teams and computes percentages, one division at a time.
    fn transform(&mut self, matched: &[MatchedDivision<'_>]) -> Result<StandingsView>;
    /// Finishes the output. Returns the number of lines written over the whole run.
    fn load(&mut self, view: &StandingsView) -> Result<usize>;
}
