use std::{error::Error, io, thread, time::Duration};

use log::{LevelFilter, info, warn};
use tasbih_core::{
    app::{AppConfig, TasbihApp, TickResult},
    capability::{Capabilities, Clock},
};
use tasbih_host::{
    input::{HELP, TerminalInput},
    platform::{LogClipboard, LogHaptics, SystemClock, TerminalNotifier},
    render::TerminalRenderer,
    storage::FileStore,
};

use config::HostConfig;

#[path = "main/config.rs"]
mod config;

const TITLE: &str = "Tasbih";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = HostConfig::from_env();
    info!(
        "{TITLE} starting: store={} tick_ms={} notifications={:?} retention={:?}",
        config.store_path.display(),
        config.tick_ms,
        config.notifications,
        config.retention
    );

    let store = FileStore::open(&config.store_path)?;
    let input = TerminalInput::spawn()?;
    let caps = Capabilities::default()
        .with_haptics(LogHaptics::new(config.bell))
        .with_notifier(TerminalNotifier::new(config.notifications))
        .with_clipboard(LogClipboard::new());
    let clock = SystemClock::new();

    let mut app = TasbihApp::new(
        store,
        input,
        caps,
        AppConfig {
            retention: config.retention,
            rng_seed: None,
        },
    );
    let mut renderer = TerminalRenderer::new(io::stdout());
    let mut render_fault_logged = false;

    println!("{HELP}");
    let tick = Duration::from_millis(config.tick_ms);
    loop {
        if app.tick(clock.now()) == TickResult::RenderRequested {
            let mut result = Ok(());
            app.with_screen(|screen| result = renderer.render(screen));
            if let Err(err) = result
                && !render_fault_logged
            {
                warn!("terminal render failed: {err}");
                render_fault_logged = true;
            }
        }

        if app.should_quit() {
            break;
        }
        thread::sleep(tick);
    }

    app.shutdown();
    info!("{TITLE} stopped");
    Ok(())
}
