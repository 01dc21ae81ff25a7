use std::io;

use anyhow::Context;

use reckon::{demo, logging, Config, Reporter};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;
    logging::init_with_config(&config.logging);
    tracing::debug!(?config, "starting");

    let stdout = io::stdout();
    let mut reporter = Reporter::with_rendering(stdout.lock(), config.float_rendering);
    demo::run(&mut reporter, &config.newton).context("writing report")?;
    Ok(())
}
