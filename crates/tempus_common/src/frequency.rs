//! Frequency values with unit parsing and display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A frequency value stored in Hertz.
///
/// Supports parsing from strings like "100MHz", "250KHz", "1GHz", "48000Hz",
/// and bare numeric values (interpreted as Hz). Displays using the most
/// appropriate unit for readability.
///
/// Timing analysis works in periods, so [`Frequency::from_period_ns`] and
/// [`Frequency::period_ns`] convert between the two representations.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frequency(f64);

impl Frequency {
    /// Creates a new frequency from a value in Hertz.
    pub fn new(hz: f64) -> Self {
        Self(hz)
    }

    /// Creates the frequency whose period is the given number of nanoseconds.
    ///
    /// A non-positive period yields a zero frequency.
    pub fn from_period_ns(period_ns: f64) -> Self {
        if period_ns > 0.0 {
            Self(1_000_000_000.0 / period_ns)
        } else {
            Self(0.0)
        }
    }

    /// Returns the period of this frequency in nanoseconds.
    ///
    /// A zero frequency has an infinite period.
    pub fn period_ns(&self) -> f64 {
        if self.0 > 0.0 {
            1_000_000_000.0 / self.0
        } else {
            f64::INFINITY
        }
    }

    /// Returns the frequency in Hertz.
    pub fn hz(&self) -> f64 {
        self.0
    }

    /// Returns the frequency in kilohertz.
    pub fn khz(&self) -> f64 {
        self.0 / 1_000.0
    }

    /// Returns the frequency in megahertz.
    pub fn mhz(&self) -> f64 {
        self.0 / 1_000_000.0
    }

    /// Returns the frequency in gigahertz.
    pub fn ghz(&self) -> f64 {
        self.0 / 1_000_000_000.0
    }
}

impl fmt::Debug for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frequency({self})")
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hz = self.0;
        if hz >= 1_000_000_000.0 {
            write!(f, "{}GHz", hz / 1_000_000_000.0)
        } else if hz >= 1_000_000.0 {
            write!(f, "{}MHz", hz / 1_000_000.0)
        } else if hz >= 1_000.0 {
            write!(f, "{}KHz", hz / 1_000.0)
        } else {
            write!(f, "{hz}Hz")
        }
    }
}

/// Error type for parsing frequency strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFrequencyError {
    /// The input string that failed to parse.
    pub input: String,
}

impl fmt::Display for ParseFrequencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid frequency: '{}'", self.input)
    }
}

impl std::error::Error for ParseFrequencyError {}

impl FromStr for Frequency {
    type Err = ParseFrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParseFrequencyError {
            input: s.to_string(),
        };

        // Suffixed formats first (case-insensitive), then bare Hz
        let lower = s.to_ascii_lowercase();
        if let Some(num) = lower.strip_suffix("ghz") {
            let val: f64 = num.trim().parse().map_err(|_| err())?;
            return Ok(Frequency::new(val * 1_000_000_000.0));
        }
        if let Some(num) = lower.strip_suffix("mhz") {
            let val: f64 = num.trim().parse().map_err(|_| err())?;
            return Ok(Frequency::new(val * 1_000_000.0));
        }
        if let Some(num) = lower.strip_suffix("khz") {
            let val: f64 = num.trim().parse().map_err(|_| err())?;
            return Ok(Frequency::new(val * 1_000.0));
        }
        if let Some(num) = lower.strip_suffix("hz") {
            let val: f64 = num.trim().parse().map_err(|_| err())?;
            return Ok(Frequency::new(val));
        }
        let val: f64 = s.parse().map_err(|_| err())?;
        Ok(Frequency::new(val))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mhz() {
        let f: Frequency = "100MHz".parse().unwrap();
        assert_eq!(f.mhz(), 100.0);
        assert_eq!(f.hz(), 100_000_000.0);
    }

    #[test]
    fn parse_case_insensitive() {
        let a: Frequency = "50mhz".parse().unwrap();
        let b: Frequency = "50MHZ".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn parse_ghz_khz_hz() {
        let g: Frequency = "1GHz".parse().unwrap();
        assert_eq!(g.ghz(), 1.0);
        let k: Frequency = "250KHz".parse().unwrap();
        assert_eq!(k.khz(), 250.0);
        let h: Frequency = "48000Hz".parse().unwrap();
        assert_eq!(h.hz(), 48_000.0);
    }

    #[test]
    fn parse_bare_number_is_hz() {
        let f: Frequency = "1500".parse().unwrap();
        assert_eq!(f.hz(), 1500.0);
    }

    #[test]
    fn parse_with_whitespace() {
        let f: Frequency = "  100 MHz ".parse().unwrap();
        assert_eq!(f.mhz(), 100.0);
    }

    #[test]
    fn parse_invalid() {
        let r: Result<Frequency, _> = "fast".parse();
        assert!(r.is_err());
        assert_eq!(r.unwrap_err().input, "fast");
    }

    #[test]
    fn display_picks_unit() {
        assert_eq!(format!("{}", Frequency::new(2_000_000_000.0)), "2GHz");
        assert_eq!(format!("{}", Frequency::new(100_000_000.0)), "100MHz");
        assert_eq!(format!("{}", Frequency::new(32_000.0)), "32KHz");
        assert_eq!(format!("{}", Frequency::new(60.0)), "60Hz");
    }

    #[test]
    fn period_roundtrip() {
        let f = Frequency::from_period_ns(10.0);
        assert_eq!(f.mhz(), 100.0);
        assert_eq!(f.period_ns(), 10.0);
    }

    #[test]
    fn period_of_zero_frequency_is_infinite() {
        assert_eq!(Frequency::new(0.0).period_ns(), f64::INFINITY);
    }

    #[test]
    fn non_positive_period_is_zero_frequency() {
        assert_eq!(Frequency::from_period_ns(0.0).hz(), 0.0);
        assert_eq!(Frequency::from_period_ns(-5.0).hz(), 0.0);
    }

    #[test]
    fn serde_roundtrip() {
        let f = Frequency::new(125_000_000.0);
        let json = serde_json::to_string(&f).unwrap();
        let back: Frequency = serde_json::from_str(&json).unwrap();
        assert_eq!(f, back);
    }
}
