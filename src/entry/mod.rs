mod session;
mod workload;

use clap::Parser;
use resprobe::config::{SessionSettings, apply_config, load_config};
use resprobe::error::AppResult;
use tracing::debug;

use crate::args::SamplerArgs;
use session::run_session;

pub(crate) fn run() -> AppResult<()> {
    let args = SamplerArgs::parse();

    crate::logger::init_logging(args.verbose, args.no_color);

    let settings = resolve_settings(&args)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_session(&settings, &args.command))
}

/// Defaults, then the config file, then CLI flags.
fn resolve_settings(args: &SamplerArgs) -> AppResult<SessionSettings> {
    let mut settings = SessionSettings::default();
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut settings, config)?;
    }
    args.apply_to(&mut settings);
    debug!(?settings, "Resolved session settings");
    Ok(settings)
}
