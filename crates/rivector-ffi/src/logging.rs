//! Opt-in diagnostics.
//!
//! The library emits `tracing` events but never installs a subscriber on
//! its own. Hosts that want the output call [`rivec_logging_init`] once.

use tracing::{debug, warn};
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::status::RivecStatus;
use crate::types::RivecLogLevel;

/// Environment variable holding an `EnvFilter` directive that overrides the
/// level passed to [`rivec_logging_init`].
pub const LOG_ENV: &str = "RIVEC_LOG";

fn filter_for(level: RivecLogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level.directive()))
}

/// Install a stderr `tracing` subscriber at `level` (a `RivecLogLevel`).
///
/// If `RIVEC_LOG` is set, its directive wins over `level`. Calling this
/// again, or after the host process already installed a global subscriber,
/// is a no-op that returns `Ok`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn rivec_logging_init(level: i32) -> i32 {
    ffi_guard!({
        let Some(parsed) = RivecLogLevel::from_raw(level) else {
            warn!(level, "unknown log level");
            return RivecStatus::InvalidArgument as i32;
        };
        let installed = tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(filter_for(parsed))
            .try_init();
        match installed {
            Ok(()) => debug!(level = ?parsed, "logging initialised"),
            Err(_) => debug!("global subscriber already installed"),
        }
        RivecStatus::Ok as i32
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_level_is_invalid_argument() {
        assert_eq!(
            rivec_logging_init(42),
            RivecStatus::InvalidArgument as i32
        );
        assert_eq!(
            rivec_logging_init(-1),
            RivecStatus::InvalidArgument as i32
        );
    }

    #[test]
    fn init_is_idempotent() {
        assert_eq!(rivec_logging_init(RivecLogLevel::Warn as i32), 0);
        assert_eq!(rivec_logging_init(RivecLogLevel::Trace as i32), 0);
    }
}
