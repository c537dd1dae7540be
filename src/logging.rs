use env_logger::{Builder, Env};

/// Setup and configure the logger.
///
/// `default_filter` applies when `RUST_LOG` is unset; `RUST_LOG` always wins.
/// Only the first call installs the logger, later calls are no-ops.
pub fn setup_logger(default_filter: &str) {
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init()
        .unwrap_or(()); // Ignore initialization errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_setup() {
        // Multiple calls should be safe (though only the first takes effect)
        setup_logger("info");
        setup_logger("debug");
        log::info!("logger ready");
    }
}
