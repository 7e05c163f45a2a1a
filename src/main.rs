// SPDX-License-Identifier: MPL-2.0
use media_ribbon::app::{self, paths, Flags};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "media_ribbon=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();

    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, "ignoring invalid --config-dir");
            None
        }
    };
    let camera_last = args.contains("--camera-last");
    let directory = args.finish().into_iter().next().map(PathBuf::from);

    paths::init_cli_overrides(config_dir);

    app::run(Flags {
        directory,
        camera_last,
    })
}
