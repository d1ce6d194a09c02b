pub mod commands;

use env_logger::Env;

/// Installs the stderr logger, filtered by `RUST_LOG` and defaulting to `warn`
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn")).try_init();
}
