//! Animated statistics counters.
//!
//! A counter counts from zero to its target over a fixed two-second run,
//! advanced on a 16ms interval. The display shows the floored running value
//! with thousands grouping and snaps to the exact target on the final tick.

/// Full counter run, in milliseconds.
pub const COUNTER_DURATION_MS: u32 = 2000;

/// Interval between counter updates, in milliseconds.
pub const COUNTER_TICK_MS: u32 = 16;

/// Amount added per tick so the run lands on `target` after the full duration.
pub fn tick_increment(target: u32) -> f64 {
    f64::from(target) / (f64::from(COUNTER_DURATION_MS) / f64::from(COUNTER_TICK_MS))
}

/// Digits with commas every three places, e.g. `1234567` -> `"1,234,567"`.
pub fn format_grouped(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let mut remaining = digits.len();
    for ch in digits.chars() {
        grouped.push(ch);
        remaining -= 1;
        if remaining > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
    }
    grouped
}

/// What one tick produced: the text to display and whether the run is over.
pub struct CounterTick {
    pub text: String,
    pub done: bool,
}

/// One counter's progress between ticks.
pub struct CounterRun {
    target: u32,
    value: f64,
    increment: f64,
}

impl CounterRun {
    pub fn new(target: u32) -> Self {
        CounterRun {
            target,
            value: 0.0,
            increment: tick_increment(target),
        }
    }

    /// Advances one tick. Once the running value reaches the target the text
    /// is the exact grouped target and `done` is set; the caller stops the
    /// interval then.
    pub fn tick(&mut self) -> CounterTick {
        self.value += self.increment;
        if self.value >= f64::from(self.target) {
            CounterTick {
                text: format_grouped(self.target),
                done: true,
            }
        } else {
            CounterTick {
                text: format_grouped(self.value as u32),
                done: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_spreads_target_over_run() {
        assert_eq!(tick_increment(12_500), 100.0);
        assert_eq!(tick_increment(125), 1.0);
        assert_eq!(tick_increment(0), 0.0);
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(5), "5");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1000), "1,000");
        assert_eq!(format_grouped(25_000), "25,000");
        assert_eq!(format_grouped(1_234_567), "1,234,567");
    }

    #[test]
    fn test_run_finishes_on_exact_target() {
        let mut run = CounterRun::new(1000);
        let mut ticks = 0;
        loop {
            ticks += 1;
            let frame = run.tick();
            if frame.done {
                assert_eq!(frame.text, "1,000");
                break;
            }
        }
        assert_eq!(
            ticks,
            (COUNTER_DURATION_MS / COUNTER_TICK_MS) as usize
        );
    }

    #[test]
    fn test_run_display_never_goes_backwards() {
        let mut run = CounterRun::new(1234);
        let mut last = 0;
        let mut ticks = 0;
        loop {
            ticks += 1;
            assert!(ticks <= 130, "run should finish near 125 ticks");
            let frame = run.tick();
            let shown: u32 = frame.text.replace(',', "").parse().unwrap();
            assert!(shown >= last);
            last = shown;
            if frame.done {
                assert_eq!(shown, 1234);
                break;
            }
        }
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        let mut run = CounterRun::new(0);
        let frame = run.tick();
        assert!(frame.done);
        assert_eq!(frame.text, "0");
    }
}
