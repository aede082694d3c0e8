//! Logging seam for the versioner
//!
//! The versioner reports its progress through a [Logger] handed in by the
//! caller. Logging is a pure side channel: predicates have no effect on
//! the computed version, and a disabled level must never change control
//! flow. Warnings carry a numeric code so embedders can match on them
//! without parsing message text.

/// Leveled log sink consumed by the versioner.
pub trait Logger {
    fn is_trace(&self) -> bool;
    fn is_debug(&self) -> bool;
    fn is_info(&self) -> bool;
    fn is_warn(&self) -> bool;

    fn trace(&self, message: &str);
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, code: u32, message: &str);
}

/// Forwards everything to the `log` facade.
///
/// Level predicates follow whatever logger the host process installed
/// (the CLI installs `env_logger`). Warning codes are folded into the
/// message as a `[code]` prefix.
pub struct FacadeLogger;

impl Logger for FacadeLogger {
    fn is_trace(&self) -> bool {
        log::log_enabled!(log::Level::Trace)
    }

    fn is_debug(&self) -> bool {
        log::log_enabled!(log::Level::Debug)
    }

    fn is_info(&self) -> bool {
        log::log_enabled!(log::Level::Info)
    }

    fn is_warn(&self) -> bool {
        log::log_enabled!(log::Level::Warn)
    }

    fn trace(&self, message: &str) {
        log::trace!("{}", message);
    }

    fn debug(&self, message: &str) {
        log::debug!("{}", message);
    }

    fn info(&self, message: &str) {
        log::info!("{}", message);
    }

    fn warn(&self, code: u32, message: &str) {
        log::warn!("[{}] {}", code, message);
    }
}

/// Discards everything. All predicates report disabled.
pub struct NullLogger;

impl Logger for NullLogger {
    fn is_trace(&self) -> bool {
        false
    }

    fn is_debug(&self) -> bool {
        false
    }

    fn is_info(&self) -> bool {
        false
    }

    fn is_warn(&self) -> bool {
        false
    }

    fn trace(&self, _message: &str) {}

    fn debug(&self, _message: &str) {}

    fn info(&self, _message: &str) {}

    fn warn(&self, _code: u32, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_logger_reports_all_levels_disabled() {
        let logger = NullLogger;
        assert!(!logger.is_trace());
        assert!(!logger.is_debug());
        assert!(!logger.is_info());
        assert!(!logger.is_warn());
        // Sinks are no-ops; just exercise them.
        logger.trace("t");
        logger.debug("d");
        logger.info("i");
        logger.warn(1001, "w");
    }
}
