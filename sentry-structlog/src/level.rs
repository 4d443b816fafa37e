use std::fmt;

/// The severity of a [`Record`](crate::Record).
///
/// Levels are plain ordered integers, so values between the well-known
/// constants are valid too. A handler that only cares about the named
/// levels should compare with `==` and treat everything else as custom.
///
/// The default level is [`Level::INFO`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(i8);

impl Level {
    /// Verbose diagnostics.
    pub const DEBUG: Level = Level(-4);
    /// Regular operational messages.
    pub const INFO: Level = Level(0);
    /// Something unexpected that the program recovered from.
    pub const WARN: Level = Level(4);
    /// A failure.
    pub const ERROR: Level = Level(8);

    /// Creates a level from its raw value.
    pub const fn new(value: i8) -> Self {
        Level(value)
    }

    /// Returns the raw value of this level.
    pub const fn as_i8(self) -> i8 {
        self.0
    }

    fn base(self) -> (&'static str, Level) {
        if self < Level::INFO {
            ("DEBUG", Level::DEBUG)
        } else if self < Level::WARN {
            ("INFO", Level::INFO)
        } else if self < Level::ERROR {
            ("WARN", Level::WARN)
        } else {
            ("ERROR", Level::ERROR)
        }
    }
}

impl From<i8> for Level {
    fn from(value: i8) -> Self {
        Level(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, base) = self.base();
        let offset = i16::from(self.0) - i16::from(base.0);
        if offset == 0 {
            f.write_str(name)
        } else {
            write!(f, "{name}{offset:+}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Level::DEBUG.to_string(), "DEBUG");
        assert_eq!(Level::INFO.to_string(), "INFO");
        assert_eq!(Level::WARN.to_string(), "WARN");
        assert_eq!(Level::ERROR.to_string(), "ERROR");
        assert_eq!(Level::new(2).to_string(), "INFO+2");
        assert_eq!(Level::new(-6).to_string(), "DEBUG-2");
        assert_eq!(Level::new(12).to_string(), "ERROR+4");
    }

    #[test]
    fn test_ordering() {
        assert!(Level::DEBUG < Level::INFO);
        assert!(Level::INFO < Level::WARN);
        assert!(Level::WARN < Level::ERROR);
        assert!(Level::new(5) > Level::WARN);
    }
}
