use crate::config::RenderOptions;
use crate::core::pipeline::StandingsPipeline;
use crate::core::{Pipeline, Standings, TraceSink};
use crate::utils::error::Result;

/// Drives a pipeline through extract, transform and load.
pub struct StandingsRenderer<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> StandingsRenderer<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn into_pipeline(self) -> P {
        self.pipeline
    }

    pub fn try_run(&mut self, data: &Standings) -> Result<usize> {
        tracing::debug!("Extracting from {} divisions", data.len());
        let matched = self.pipeline.extract(data)?;
        tracing::debug!("Matched {} divisions", matched.len());

        let view = self.pipeline.transform(&matched)?;

        let written = self.pipeline.load(&view)?;
        tracing::debug!("Wrote {} trace lines", written);

        Ok(written)
    }

    /// Runs the pipeline and swallows any failure after logging it. Lines
    /// already handed to the sink stay there.
    pub fn run(&mut self, data: &Standings) {
        if let Err(e) = self.try_run(data) {
            tracing::error!("Standings render failed: {}", e);
        }
    }
}

/// Renders `data` filtered on `keyword` into `sink`. Never fails; problems are logged.
pub fn render<S: TraceSink>(data: &Standings, keyword: &str, sink: S) {
    render_with(data, RenderOptions::new(keyword), sink)
}

pub fn render_with<S: TraceSink>(data: &Standings, options: RenderOptions, sink: S) {
    StandingsRenderer::new(StandingsPipeline::new(options, sink)).run(data);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MatchedDivision, StandingsView};
    use crate::utils::error::StandingsError;
    use crate::utils::sink::MemorySink;

    #[derive(Default)]
    struct FailingPipeline {
        loaded: bool,
    }

    impl Pipeline for FailingPipeline {
        fn extract<'d>(&mut self, _data: &'d Standings) -> Result<Vec<MatchedDivision<'d>>> {
            Ok(Vec::new())
        }

        fn transform(&mut self, _matched: &[MatchedDivision<'_>]) -> Result<StandingsView> {
            Err(StandingsError::render_failure("malformed division entry"))
        }

        fn load(&mut self, _view: &StandingsView) -> Result<usize> {
            self.loaded = true;
            Ok(0)
        }
    }

    #[test]
    fn test_failure_stops_before_load() {
        let data = Standings::new();
        let mut renderer = StandingsRenderer::new(FailingPipeline::default());

        assert!(renderer.try_run(&data).is_err());
        renderer.run(&data);
        assert!(!renderer.into_pipeline().loaded);
    }

    #[test]
    fn test_render_into_borrowed_sink() {
        let data: Standings = serde_json::from_value(serde_json::json!({
            "204": { "div_name": "National League East", "teams": [] }
        }))
        .unwrap();

        let mut sink = MemorySink::new();
        render(&data, "American", &mut sink);

        assert_eq!(sink.lines(), ["Rendering for American", "Found 0 divisions"]);
    }

    #[test]
    fn test_failed_render_keeps_header_and_count() {
        let data: Standings = serde_json::from_value(serde_json::json!({
            "200": { "div_name": "American League West" }
        }))
        .unwrap();

        let mut sink = MemorySink::new();
        render(&data, "American", &mut sink);

        assert_eq!(sink.lines(), ["Rendering for American", "Found 1 divisions"]);
    }
}
