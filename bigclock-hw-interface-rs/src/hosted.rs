//! Host-side implementations of the clock's time and delay sources.

use std::time::Duration;

use bigclock_oled_display_rs::{ClockTime, WallClock};
use chrono::{Local, Timelike};
use embedded_hal_async::delay::DelayNs;

/// Local wall-clock time from the operating system.
pub struct LocalClock;

impl WallClock for LocalClock {
    fn now(&mut self) -> ClockTime {
        let now = Local::now();
        ClockTime::new(now.hour() as u8, now.minute() as u8, now.second() as u8)
    }
}

/// Async delay backed by the tokio timer.
pub struct TokioDelay;

impl DelayNs for TokioDelay {
    async fn delay_ns(&mut self, ns: u32) {
        tokio::time::sleep(Duration::from_nanos(ns.into())).await;
    }

    async fn delay_us(&mut self, us: u32) {
        tokio::time::sleep(Duration::from_micros(us.into())).await;
    }

    async fn delay_ms(&mut self, ms: u32) {
        tokio::time::sleep(Duration::from_millis(ms.into())).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_clock_is_in_range() {
        let t = LocalClock.now();
        assert!(t.hour < 24);
        assert!(t.minute < 60);
        assert!(t.second < 60);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_delay_waits_requested_time() {
        let start = tokio::time::Instant::now();
        TokioDelay.delay_ms(500).await;
        assert!(start.elapsed() >= Duration::from_millis(500));
    }
}
