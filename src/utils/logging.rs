use log::LevelFilter;

/// Install the process logger. `RUST_LOG` overrides the verbosity flag.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(default_level).parse_default_env();
    // Ignore a second initialization (e.g. from tests)
    let _ = builder.try_init();
}
