use crate::workflow::config::RunConfig;
use anyhow::Context;
use log::info;
use statcore::loader::SampleLoader;
use statcore::Statistics;

pub struct Runner {
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Loads the input file and reduces it to [`Statistics`].
    pub fn execute(&self) -> anyhow::Result<Statistics> {
        let input = self.config.input();
        let samples = SampleLoader::load(input).context("loading samples")?;
        info!("loaded {} samples from {}", samples.len(), input.display());

        let stats = Statistics::compute(&samples).context("computing statistics")?;
        Ok(stats)
    }
}
