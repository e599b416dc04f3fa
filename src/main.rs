use newton_render::config::{load_config_or_default, DEFAULT_CONFIG_FILE};
use newton_render::logging::init_logging;
use newton_render::visualization::{default_presenter, print_summary};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let config_path = Path::new(DEFAULT_CONFIG_FILE);
    let config = load_config_or_default(config_path.exists().then_some(config_path));

    let _log_guard = init_logging(&config.logging)?;
    tracing::debug!(?config, "Configuration loaded");

    let presenter = default_presenter(config.display.show);
    let summary = newton_render::run_and_present(&config, presenter.as_ref())?;

    print_summary(&summary);
    Ok(())
}
