use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are no-ops.
///
/// `filter` follows the `env_logger` syntax (e.g. `"info"`,
/// `"halo_rings=trace"`). When `None`, the `RUST_LOG` environment variable
/// applies, falling back to info level. Intended usage is early in `main`.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match filter {
            Some(f) => {
                builder.parse_filters(f);
            }
            None => match std::env::var("RUST_LOG") {
                Ok(f) => {
                    builder.parse_filters(&f);
                }
                Err(_) => {
                    builder.filter_level(log::LevelFilter::Info);
                }
            },
        }

        builder.init();

        log::debug!("logging initialized");
    });
}
