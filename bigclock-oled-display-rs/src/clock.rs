//! The clock application context and its refresh loop.
//!
//! [`ClockDisplay`] bundles everything the loop needs (driver, selected
//! font, layout config) so nothing lives in globals. The loop itself,
//! [`ClockDisplay::run`], is a regular `async fn` generic over the wall
//! clock and the delay source so it can run on any executor.

use core::convert::Infallible;

use bigclock_fonts::FontTable;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::driver::OledDriver;
use crate::error::OledError;
use crate::layout::{format_time, ClockConfig, ClockTime};

/// Source of the current local time.
pub trait WallClock {
    fn now(&mut self) -> ClockTime;
}

/// Where the clock is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockPhase {
    /// Constructed; the panel has not been touched.
    Idle,
    /// Init sequence sent and screen cleared.
    Initialized,
    /// At least one frame has been drawn.
    Rendering,
}

/// Application context for the big-digit clock.
///
/// The font is fixed at construction and held for the lifetime of the
/// value.
pub struct ClockDisplay<I2C> {
    driver: OledDriver<I2C>,
    font: &'static FontTable,
    config: ClockConfig,
    phase: ClockPhase,
    /// `false` while frames are losing bus writes.
    bus_ok: bool,
}

impl<I2C> ClockDisplay<I2C>
where
    I2C: I2c,
{
    pub fn new(driver: OledDriver<I2C>, font: &'static FontTable, config: ClockConfig) -> Self {
        Self {
            driver,
            font,
            config,
            phase: ClockPhase::Idle,
            bus_ok: true,
        }
    }

    pub fn phase(&self) -> ClockPhase {
        self.phase
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// `false` if the last frame lost bus writes.
    pub fn bus_ok(&self) -> bool {
        self.bus_ok
    }

    /// Read-only access to the driver, e.g. for its dropped-write count.
    pub fn driver(&self) -> &OledDriver<I2C> {
        &self.driver
    }

    /// Initialise and blank the panel. Does nothing once started.
    pub async fn start(&mut self) -> Result<(), OledError> {
        if self.phase != ClockPhase::Idle {
            return Ok(());
        }

        self.driver.init().await;
        self.driver.clear().await?;
        self.phase = ClockPhase::Initialized;

        #[cfg(feature = "log")]
        log::info!("OLED initialised");
        #[cfg(feature = "defmt")]
        defmt::info!("OLED initialised");
        Ok(())
    }

    /// Draw one frame showing `time`.
    ///
    /// Clears the whole panel, then draws the formatted time centred on
    /// the configured page. The first frame that loses bus writes logs a
    /// warning; later failing frames stay quiet until one gets through.
    ///
    /// # Errors
    ///
    /// * [`OledError::NotInitialized`] if [`start()`](Self::start) has not
    ///   run.
    /// * [`OledError::InvalidCursor`] if the configured page is off the
    ///   panel.
    pub async fn tick(&mut self, time: ClockTime) -> Result<(), OledError> {
        if self.phase == ClockPhase::Idle {
            return Err(OledError::NotInitialized);
        }

        let text = format_time(&time, self.config.colon.shows_colon(time.second));
        let x = self.config.centered_x(text.len());
        let before = self.driver.dropped_writes();

        self.driver.clear().await?;
        self.driver
            .draw_text(x, self.config.text_page, &text, self.font)
            .await?;

        self.phase = ClockPhase::Rendering;
        self.note_frame(self.driver.dropped_writes().wrapping_sub(before));
        Ok(())
    }

    /// Refresh loop.
    ///
    /// Starts the panel if needed, then forever: read `clock`, draw the
    /// frame, wait `refresh_period_ms`. Bus failures never end the loop;
    /// it stops only when the future is dropped or on a configuration
    /// error from [`tick()`](Self::tick).
    ///
    /// The loop borrows `self`, so the caller keeps ownership and can
    /// [`release()`](Self::release) the bus after cancelling it.
    pub async fn run<C, D>(&mut self, clock: &mut C, delay: &mut D) -> Result<Infallible, OledError>
    where
        C: WallClock,
        D: DelayNs,
    {
        self.start().await?;

        loop {
            let now = clock.now();
            self.tick(now).await?;
            delay.delay_ms(self.config.refresh_period_ms).await;
        }
    }

    /// Consume the context and return the I2C peripheral.
    pub fn release(self) -> I2C {
        self.driver.release()
    }

    fn note_frame(&mut self, lost: u32) {
        if lost > 0 && self.bus_ok {
            self.bus_ok = false;
            #[cfg(feature = "log")]
            log::warn!("Display bus failing: {} writes dropped this frame", lost);
            #[cfg(feature = "defmt")]
            defmt::warn!("Display bus failing: {} writes dropped this frame", lost);
        } else if lost == 0 && !self.bus_ok {
            self.bus_ok = true;
            #[cfg(feature = "log")]
            log::info!("Display bus recovered");
            #[cfg(feature = "defmt")]
            defmt::info!("Display bus recovered");
        }
    }
}
