use anyhow::Context;

use stocktake_core::PromptReader;
use stocktake_demo::DemoConfig;

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env();
    stocktake_observability::init(config.log_format);

    for var in &config.fallbacks {
        tracing::warn!(var, "ignoring unusable value; using default");
    }
    tracing::info!(search = %config.search, grid = ?config.grid, "starting stocktake demo");

    let mut input = PromptReader::stdio();
    let mut out = std::io::stdout();
    stocktake_demo::script::run(&config, &mut input, &mut out).context("demo script failed")
}
