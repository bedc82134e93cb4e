use anyhow::Result;
use mcq_paper_gen::utils::logging;
use mcq_paper_gen::{App, Config};

fn main() -> Result<()> {
    // Load configuration first: the verbose flag feeds the log filter
    let config = Config::from_env();
    logging::init(config.verbose_logging);

    App::new(config).run()
}
