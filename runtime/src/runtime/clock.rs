// runtime/src/runtime/clock.rs
use anyhow::Result;
use nix::time::{clock_gettime, ClockId};

const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MILLI: u64 = 1_000_000;

/// Anything that can produce a frequency sample in `[0, 1000)`.
pub trait FrequencySource {
    fn frequency(&mut self) -> Result<u32>;
}

/// Reduce a nanosecond timestamp to the millisecond within its second.
pub fn frequency_from_nanos(nanos: u64) -> u32 {
    ((nanos % NANOS_PER_SECOND) / NANOS_PER_MILLI) as u32
}

/// Samples the OS monotonic clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicClock;

impl MonotonicClock {
    /// Returns the current monotonic time in nanoseconds.
    pub fn now_nanos() -> Result<u64> {
        let ts = clock_gettime(ClockId::CLOCK_MONOTONIC)?;
        Ok(ts.tv_sec() as u64 * NANOS_PER_SECOND + ts.tv_nsec() as u64)
    }
}

impl FrequencySource for MonotonicClock {
    fn frequency(&mut self) -> Result<u32> {
        Ok(frequency_from_nanos(Self::now_nanos()?))
    }
}

/// Replays a fixed list of samples, then repeats the last one forever.
#[derive(Debug, Clone)]
pub struct ScriptedClock {
    samples: Vec<u32>,
    cursor: usize,
}

impl ScriptedClock {
    pub fn new(samples: impl Into<Vec<u32>>) -> Self {
        ScriptedClock {
            samples: samples.into(),
            cursor: 0,
        }
    }
}

impl FrequencySource for ScriptedClock {
    fn frequency(&mut self) -> Result<u32> {
        let Some(last) = self.samples.last().copied() else {
            return Ok(0);
        };
        let sample = self.samples.get(self.cursor).copied().unwrap_or(last);
        self.cursor = self.cursor.saturating_add(1);
        Ok(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduction_keeps_millis_within_second() {
        assert_eq!(frequency_from_nanos(0), 0);
        assert_eq!(frequency_from_nanos(999_999), 0);
        assert_eq!(frequency_from_nanos(1_000_000), 1);
        assert_eq!(frequency_from_nanos(200_000_000), 200);
        assert_eq!(frequency_from_nanos(999_999_999), 999);
        assert_eq!(frequency_from_nanos(1_000_000_000), 0);
        assert_eq!(frequency_from_nanos(42 * NANOS_PER_SECOND + 600_123_456), 600);
        assert!(frequency_from_nanos(u64::MAX) < 1000);
    }

    #[test]
    fn monotonic_samples_stay_in_range() {
        let mut clock = MonotonicClock;
        for _ in 0..100 {
            let freq = clock.frequency().unwrap();
            assert!(freq < 1000, "sample {} out of range", freq);
        }
    }

    #[test]
    fn monotonic_clock_does_not_go_backwards() {
        let a = MonotonicClock::now_nanos().unwrap();
        let b = MonotonicClock::now_nanos().unwrap();
        assert!(b >= a);
    }

    #[test]
    fn scripted_clock_replays_then_repeats_last() {
        let mut clock = ScriptedClock::new(vec![200, 600, 7]);
        let got: Vec<u32> = (0..5).map(|_| clock.frequency().unwrap()).collect();
        assert_eq!(got, vec![200, 600, 7, 7, 7]);
    }

    #[test]
    fn empty_script_yields_zero() {
        let mut clock = ScriptedClock::new(Vec::new());
        assert_eq!(clock.frequency().unwrap(), 0);
        assert_eq!(clock.frequency().unwrap(), 0);
    }
}
