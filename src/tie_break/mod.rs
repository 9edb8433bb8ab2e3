#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Rounds the raw, possibly fractional, number of cells padded before the data.
///
/// The raw value is `margin * fraction`. Implementations must map integers to themselves, so that
/// axes with no margin never get padded, and must be monotonic.
///
/// Any `Fn(f64) -> f64` is a tie-break, so `f64::ceil` can be passed directly.
pub trait TieBreak: Send + Sync {
    fn tie_break(&self, raw: f64) -> f64;
}

impl<F> TieBreak for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn tie_break(&self, raw: f64) -> f64 {
        self(raw)
    }
}

/// Built-in tie-break strategies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Rounding {
    /// Rounds down, the fractional cell goes after the data.
    #[default]
    Floor,
    /// Rounds up, the fractional cell goes before the data.
    Ceil,
    /// Rounds to the nearest integer, halves go before the data.
    HalfUp,
    /// Rounds to the nearest integer, halves go after the data.
    HalfDown,
    /// Rounds to the nearest integer, halves go to the even count.
    HalfEven,
}

impl TieBreak for Rounding {
    fn tie_break(&self, raw: f64) -> f64 {
        match self {
            Self::Floor => raw.floor(),
            Self::Ceil => raw.ceil(),
            Self::HalfUp => (raw + 0.5).floor(),
            Self::HalfDown => (raw - 0.5).ceil(),
            Self::HalfEven => {
                let rounded = raw.round();
                if (raw - raw.trunc()).abs() == 0.5 && rounded % 2.0 != 0.0 {
                    rounded - raw.signum()
                } else {
                    rounded
                }
            }
        }
    }
}
