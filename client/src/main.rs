use log::info;
use macroquad::prelude::Conf;

use client::run;
use common::config::Settings;

fn window_conf() -> Conf {
    Conf {
        window_title: "Mazes".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let settings = Settings::from_env();
    info!("starting with {:?}", settings);

    run::run(settings).await;
}
