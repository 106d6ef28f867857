//! Headless demo entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting Hoverline headless demo");

    match hoverline_web::run_scripted_episode(hoverline_core::HoverConfig::default()) {
        Ok(frames) => log::info!("Episode finished after {} steps", frames.len()),
        Err(e) => {
            log::error!("Demo widget failed to initialize: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
