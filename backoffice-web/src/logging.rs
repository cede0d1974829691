//! Console logging through `wasm-logger`.

use log::Level;

/// Install the console logger. Level comes from `BACKOFFICE_LOG` at build
/// time and defaults to `info`.
pub fn init() {
    wasm_logger::init(wasm_logger::Config::new(parse_level(option_env!(
        "BACKOFFICE_LOG"
    ))));
}

fn parse_level(raw: Option<&str>) -> Level {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(Level::Info)
}
