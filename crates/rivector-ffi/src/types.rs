//! C-compatible enums for configuration arguments.

use rivector_core::InputPolicy;

/// Operand screening mode for `rivec_config_set_input_policy`.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RivecInputPolicy {
    /// Evaluate formulas as given; NaN/∞ propagate.
    Propagate = 0,
    /// Reject non-finite operands and negative lengths/durations.
    Reject = 1,
}

impl RivecInputPolicy {
    /// Parse a raw C value. `None` if out of range.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            x if x == Self::Propagate as i32 => Some(Self::Propagate),
            x if x == Self::Reject as i32 => Some(Self::Reject),
            _ => None,
        }
    }
}

impl From<RivecInputPolicy> for InputPolicy {
    fn from(p: RivecInputPolicy) -> Self {
        match p {
            RivecInputPolicy::Propagate => InputPolicy::Propagate,
            RivecInputPolicy::Reject => InputPolicy::Reject,
        }
    }
}

impl From<InputPolicy> for RivecInputPolicy {
    fn from(p: InputPolicy) -> Self {
        match p {
            InputPolicy::Propagate => RivecInputPolicy::Propagate,
            InputPolicy::Reject => RivecInputPolicy::Reject,
        }
    }
}

/// Maximum log verbosity for `rivec_logging_init`.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RivecLogLevel {
    /// No output.
    Off = 0,
    /// Errors only.
    Error = 1,
    /// Warnings and errors.
    Warn = 2,
    /// Informational messages and above.
    Info = 3,
    /// Debug messages and above.
    Debug = 4,
    /// Everything, including per-handle traces.
    Trace = 5,
}

impl RivecLogLevel {
    /// Parse a raw C value. `None` if out of range.
    pub fn from_raw(raw: i32) -> Option<Self> {
        Some(match raw {
            0 => Self::Off,
            1 => Self::Error,
            2 => Self::Warn,
            3 => Self::Info,
            4 => Self::Debug,
            5 => Self::Trace,
            _ => return None,
        })
    }

    /// `EnvFilter` directive selecting this level for the whole crate graph.
    pub fn directive(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_policy_values_are_stable() {
        assert_eq!(RivecInputPolicy::Propagate as i32, 0);
        assert_eq!(RivecInputPolicy::Reject as i32, 1);
        assert_eq!(RivecInputPolicy::from_raw(1), Some(RivecInputPolicy::Reject));
        assert_eq!(RivecInputPolicy::from_raw(2), None);
        assert_eq!(RivecInputPolicy::from_raw(-1), None);
    }

    #[test]
    fn input_policy_round_trips_through_core() {
        for p in [RivecInputPolicy::Propagate, RivecInputPolicy::Reject] {
            assert_eq!(RivecInputPolicy::from(InputPolicy::from(p)), p);
        }
    }

    #[test]
    fn log_level_parsing() {
        assert_eq!(RivecLogLevel::from_raw(0), Some(RivecLogLevel::Off));
        assert_eq!(RivecLogLevel::from_raw(5), Some(RivecLogLevel::Trace));
        assert_eq!(RivecLogLevel::from_raw(6), None);
        assert_eq!(RivecLogLevel::Warn.directive(), "warn");
    }
}
