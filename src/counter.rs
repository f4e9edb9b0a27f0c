use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CounterError {
    #[error("counter animation duration must be positive")]
    ZeroDuration,
}

/// How a statistic is rounded while it counts up, and how it prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Integer,
    OneDecimal,
}

impl Precision {
    fn apply(self, raw: f64) -> f64 {
        match self {
            Self::Integer => raw.floor(),
            Self::OneDecimal => (raw * 10.0).round() / 10.0,
        }
    }

    pub fn format(self, value: f64) -> String {
        match self {
            Self::Integer => format!("{value:.0}"),
            Self::OneDecimal => format!("{value:.1}"),
        }
    }
}

/// Eases a displayed number from zero up to `target` over a fixed
/// duration. Pure time-to-value mapping; the caller owns the clock and
/// the frame scheduling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    duration_ms: f64,
    precision: Precision,
}

impl CounterAnimation {
    pub fn new(target: f64, duration_ms: u32, precision: Precision) -> Result<Self, CounterError> {
        if duration_ms == 0 {
            return Err(CounterError::ZeroDuration);
        }
        Ok(Self {
            target,
            duration_ms: f64::from(duration_ms),
            precision,
        })
    }

    /// Displayed value after `elapsed_ms`: linear progress through a
    /// cubic ease-out, then the precision rounding. The final frame runs
    /// `target` itself through the same rounding, so an integer counter
    /// with a fractional target settles on its floor.
    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let progress = (elapsed_ms / self.duration_ms).min(1.0);
        let eased = 1.0 - (1.0 - progress).powi(3);
        self.precision.apply(self.target * eased)
    }

    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

/// One-shot latch for "the element has been seen". The first sighting
/// starts the run; every report after that is ignored, so a counter
/// animates at most once per mount.
#[derive(Debug, Default, Clone, Copy)]
pub struct VisibilityLatch {
    triggered: bool,
}

impl VisibilityLatch {
    /// Feed the latest visibility reading. Returns true exactly once, on
    /// the first rising edge.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && !self.triggered {
            self.triggered = true;
            return true;
        }
        false
    }

    pub fn has_triggered(&self) -> bool {
        self.triggered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn integer_counter(target: f64, duration_ms: u32) -> CounterAnimation {
        CounterAnimation::new(target, duration_ms, Precision::Integer).unwrap()
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert_eq!(
            CounterAnimation::new(10.0, 0, Precision::Integer).unwrap_err(),
            CounterError::ZeroDuration
        );
    }

    #[test]
    fn test_integer_counter_lands_on_target() {
        let anim = integer_counter(12.0, 2000);
        assert_eq!(anim.value_at(2000.0), 12.0);
        assert_eq!(anim.value_at(3500.0), 12.0);
        assert!(anim.is_complete(2000.0));
    }

    #[test]
    fn test_one_decimal_counter_lands_on_target() {
        let anim = CounterAnimation::new(4.8, 2000, Precision::OneDecimal).unwrap();
        assert_eq!(anim.value_at(2000.0), 4.8);
    }

    #[test]
    fn test_midpoint_sample_is_strictly_between() {
        let anim = integer_counter(10.0, 2000);
        let halfway = anim.value_at(1000.0);
        assert!(halfway > 0.0 && halfway < 10.0);
        assert_eq!(anim.value_at(2000.0), 10.0);
    }

    #[test]
    fn test_displayed_value_never_retreats() {
        let anim = integer_counter(250.0, 2000);
        let mut last = anim.value_at(0.0);
        for ms in (0..=2200).step_by(16) {
            let value = anim.value_at(ms as f64);
            assert!(value >= last, "value retreated at {ms}ms");
            last = value;
        }
    }

    #[test]
    fn test_fractional_target_floors_at_integer_precision() {
        // The terminal frame reuses the easing formula, so 9.5 shown as
        // an integer settles on 9 rather than snapping to the raw target.
        let anim = integer_counter(9.5, 2000);
        assert_eq!(anim.value_at(2000.0), 9.0);
    }

    #[test]
    fn test_negative_target_supported() {
        let anim = integer_counter(-5.0, 1000);
        assert_eq!(anim.value_at(1000.0), -5.0);
        assert_eq!(anim.value_at(2000.0), -5.0);
    }

    #[test]
    fn test_formatting_follows_precision() {
        assert_eq!(Precision::Integer.format(8.0), "8");
        assert_eq!(Precision::OneDecimal.format(4.8), "4.8");
        assert_eq!(Precision::OneDecimal.format(5.0), "5.0");
    }

    #[test]
    fn test_latch_fires_once() {
        let mut latch = VisibilityLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.has_triggered());
    }
}
