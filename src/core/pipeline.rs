use crate::core::standings::{
    count_line, division_lines, division_view, filter_and_order, header_line,
};
use crate::core::{
    ConfigProvider, MatchedDivision, Pipeline, Standings, StandingsView, TraceSink,
};
use crate::utils::error::Result;

pub struct StandingsPipeline<C: ConfigProvider, S: TraceSink> {
    config: C,
    sink: S,
    written: usize,
}

impl<C: ConfigProvider, S: TraceSink> StandingsPipeline<C, S> {
    pub fn new(config: C, sink: S) -> Self {
        Self {
            config,
            sink,
            written: 0,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn emit(&mut self, line: &str) {
        self.sink.emit(line);
        self.written += 1;
    }
}

impl<C: ConfigProvider, S: TraceSink> Pipeline for StandingsPipeline<C, S> {
    fn extract<'d>(&mut self, data: &'d Standings) -> Result<Vec<MatchedDivision<'d>>> {
        let keyword = self.config.keyword().to_string();
        self.emit(&header_line(&keyword));

        tracing::debug!("Filtering {} divisions on keyword '{}'", data.len(), keyword);
        let matched = filter_and_order(data, &keyword);
        self.emit(&count_line(matched.len()));

        Ok(matched)
    }

    fn transform(&mut self, matched: &[MatchedDivision<'_>]) -> Result<StandingsView> {
        let show_fixed = self.config.show_fixed();
        let mut divisions = Vec::with_capacity(matched.len());

        for division in matched {
            let view = division_view(division)?;
            for line in division_lines(&view, show_fixed) {
                self.emit(&line);
            }
            divisions.push(view);
        }

        Ok(StandingsView {
            keyword: self.config.keyword().to_string(),
            divisions,
        })
    }

    fn load(&mut self, view: &StandingsView) -> Result<usize> {
        if self.config.emit_json() {
            let json = serde_json::to_string_pretty(view)?;
            for line in json.lines() {
                self.emit(line);
            }
        }

        Ok(self.written)
    }
}
