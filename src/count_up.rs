//! Stat counters that run from zero to their target once, the first time they are seen.

#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    target: u64,
    suffix: String,
    duration_ms: f64,
    triggered: bool,
    started_at: Option<f64>,
    displayed: u64,
    finished: bool,
}

impl CountUp {
    /// `value` is a display string such as `"50+"`: its digits form the target,
    /// everything else becomes the suffix.
    pub fn new(value: &str, duration_ms: u32) -> Self {
        let (target, suffix) = parse_target(value);

        Self {
            target,
            suffix,
            duration_ms: f64::from(duration_ms),
            triggered: false,
            started_at: None,
            displayed: 0,
            finished: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn displayed(&self) -> u64 {
        self.displayed
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Arms the animation. Returns `false` if it had already been armed.
    pub fn trigger(&mut self) -> bool {
        if self.triggered {
            return false;
        }

        self.triggered = true;
        true
    }

    /// Advances to the frame timestamp `now_ms`. Returns whether another frame is needed.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        if !self.triggered || self.finished {
            return false;
        }

        let started_at = *self.started_at.get_or_insert(now_ms);
        let progress = if self.duration_ms > 0.0 {
            ((now_ms - started_at) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };

        if progress >= 1.0 {
            self.displayed = self.target;
            self.finished = true;
            return false;
        }

        let eased = ease_out_quart(progress);
        let next = (self.target as f64 * eased).floor() as u64;
        self.displayed = next.min(self.target).max(self.displayed);
        true
    }

    pub fn display(&self) -> String {
        format!("{}{}", self.displayed, self.suffix)
    }
}

pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(4)
}

fn parse_target(value: &str) -> (u64, String) {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    let suffix: String = value.chars().filter(|ch| !ch.is_ascii_digit()).collect();

    let target = digits.chars().fold(0u64, |acc, ch| {
        let digit = u64::from(ch.to_digit(10).unwrap_or(0));
        acc.saturating_mul(10).saturating_add(digit)
    });

    (target, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_target_and_suffix() {
        let counter = CountUp::new("50+", 2_000);

        assert_eq!(counter.target(), 50);
        assert_eq!(counter.suffix(), "+");
        assert_eq!(counter.display(), "0+");
    }

    #[test]
    fn non_numeric_value_counts_to_zero() {
        let counter = CountUp::new("many", 2_000);

        assert_eq!(counter.target(), 0);
        assert_eq!(counter.suffix(), "many");
    }

    #[test]
    fn settles_on_exact_target() {
        let mut counter = CountUp::new("50+", 2_000);
        counter.trigger();

        let mut now = 10_000.0;
        while counter.advance(now) {
            now += 16.0;
        }

        assert!(counter.is_finished());
        assert_eq!(counter.display(), "50+");
        assert!(!counter.advance(now + 16.0));
    }

    #[test]
    fn mid_animation_values_rise_within_bounds() {
        let mut counter = CountUp::new("6+", 2_000);
        counter.trigger();

        let mut previous = 0;
        let mut frame = 0.0;
        while counter.advance(frame) {
            let current = counter.displayed();
            assert!(current >= previous);
            assert!(current <= 6);
            previous = current;
            frame += 16.6;
        }

        assert_eq!(counter.displayed(), 6);
    }

    #[test]
    fn follows_quartic_ease_out() {
        let mut counter = CountUp::new("100", 1_000);
        counter.trigger();

        counter.advance(0.0);
        assert_eq!(counter.displayed(), 0);
        counter.advance(500.0);
        assert_eq!(counter.displayed(), 93);
    }

    #[test]
    fn does_not_run_before_trigger() {
        let mut counter = CountUp::new("4+", 2_000);

        assert!(!counter.advance(1_000.0));
        assert_eq!(counter.display(), "0+");
    }

    #[test]
    fn second_trigger_does_not_restart() {
        let mut counter = CountUp::new("50+", 2_000);

        assert!(counter.trigger());
        counter.advance(0.0);
        counter.advance(2_500.0);
        assert_eq!(counter.display(), "50+");

        assert!(!counter.trigger());
        assert!(!counter.advance(2_600.0));
        assert_eq!(counter.display(), "50+");
    }

    #[test]
    fn zero_duration_completes_on_first_frame() {
        let mut counter = CountUp::new("4+", 0);
        counter.trigger();

        assert!(!counter.advance(42.0));
        assert_eq!(counter.display(), "4+");
    }

    #[test]
    fn oversized_target_saturates_instead_of_resetting() {
        let mut counter = CountUp::new("100000000000000000000+", 1_000);

        assert_eq!(counter.target(), u64::MAX);
        assert_eq!(counter.suffix(), "+");

        counter.trigger();
        counter.advance(0.0);
        counter.advance(1_000.0);
        assert_eq!(counter.display(), format!("{}+", u64::MAX));
    }
}
