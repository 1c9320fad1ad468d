//! bigclock
//!
//! Big-digit wall clock for a 128×32 SSD1306 OLED on a Linux I2C bus.
//!
//! 1. Ask on stdin which of the four font styles to use.
//! 2. Open the I2C device node and bind the display address. Either
//!    failure is fatal (exit code 1).
//! 3. Initialise and blank the panel, then redraw `hh:mm:ss` every 500 ms.
//! 4. On SIGINT or SIGTERM, stop the loop and release the bus before
//!    exiting.
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` for more.

mod error;
mod hosted;
mod menu;

use std::fs::OpenOptions;
use std::future::Future;
use std::io;
use std::process::ExitCode;

use bigclock_fonts::{get_font, FontStyle};
use bigclock_oled_display_rs::{ClockConfig, ClockDisplay, OledDriver, OledError, WallClock};
use embassy_embedded_hal::adapter::BlockingAsync;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;
use linux_embedded_hal::I2cdev;
use log::{error, info, warn};
use tokio::signal::unix::{signal, SignalKind};

use crate::error::StartupError;
use crate::hosted::{LocalClock, TokioDelay};

// ---------------------------------------------------------------------------
// Hardware assignments: change here for other boards
// ---------------------------------------------------------------------------

/// I2C bus the display is wired to.
const I2C_BUS_PATH: &str = "/dev/i2c-3";

/// 7-bit address of the SSD1306.
const OLED_ADDRESS: u8 = 0x3C;

// ---------------------------------------------------------------------------
// Type aliases
// ---------------------------------------------------------------------------

/// Blocking Linux I2C device exposed through the async I2C traits.
type OledI2c = BlockingAsync<I2cdev>;

// ---------------------------------------------------------------------------
// Startup
// ---------------------------------------------------------------------------

/// Open the bus device and bind the display address.
///
/// Opening the node and selecting the target (`I2C_SLAVE`) fail
/// separately: a missing or unreadable node is [`StartupError::Open`], a
/// node that rejects the I2C ioctls or an address already claimed by a
/// kernel driver is [`StartupError::Bind`].
fn open_bus(path: &'static str, address: u8) -> Result<OledI2c, StartupError> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|e| StartupError::Open {
            path,
            source: Box::new(e),
        })?;

    let bind = |e: linux_embedded_hal::i2cdev::linux::LinuxI2CError| StartupError::Bind {
        address,
        source: Box::new(e),
    };
    // `I2cdev::new` already issues I2C_SLAVE (for address 0) on the node.
    let mut i2c = I2cdev::new(path).map_err(bind)?;
    i2c.set_slave_address(u16::from(address)).map_err(bind)?;

    info!("Opened {} for device {:#04x}", path, address);
    Ok(BlockingAsync::new(i2c))
}

// ---------------------------------------------------------------------------
// Shutdown
// ---------------------------------------------------------------------------

/// Why the refresh loop stopped.
#[derive(Debug)]
enum Stopped {
    /// A shutdown signal arrived; carries its name.
    Signal(&'static str),
    /// The loop gave up on a configuration error.
    Failed(OledError),
}

/// Run the clock until `shutdown` resolves or the loop fails, then release
/// the bus.
///
/// The loop future is dropped before the display is released, so the bus
/// handle returned here is free of any in-flight frame.
async fn run_until_shutdown<I2C, C, D, S>(
    mut display: ClockDisplay<I2C>,
    clock: &mut C,
    delay: &mut D,
    shutdown: S,
) -> (Stopped, I2C)
where
    I2C: I2c,
    C: WallClock,
    D: DelayNs,
    S: Future<Output = &'static str>,
{
    let stopped = tokio::select! {
        result = display.run(clock, delay) => match result {
            Ok(never) => match never {},
            Err(e) => Stopped::Failed(e),
        },
        signal = shutdown => {
            info!("{} received, shutting down", signal);
            Stopped::Signal(signal)
        }
    };

    let dropped = display.driver().dropped_writes();
    let i2c = display.release();
    info!("I2C bus released ({} bus writes dropped)", dropped);
    (stopped, i2c)
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("bigclock starting");

    let style = match menu::prompt_font_style(&mut io::stdin().lock(), &mut io::stdout()) {
        Ok(style) => style,
        Err(e) => {
            warn!("Could not read font choice ({}); using {}", e, FontStyle::Bold.label());
            FontStyle::Bold
        }
    };
    info!("Font style: {}", style.label());

    let i2c = match open_bus(I2C_BUS_PATH, OLED_ADDRESS) {
        Ok(i2c) => i2c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(stream) => stream,
        Err(e) => {
            eprintln!("Could not install SIGTERM handler: {}", e);
            return ExitCode::from(1);
        }
    };

    let driver = OledDriver::new(i2c, OLED_ADDRESS);
    let display = ClockDisplay::new(driver, get_font(style), ClockConfig::default());
    let shutdown = async move {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => "SIGINT",
            _ = terminate.recv() => "SIGTERM",
        }
    };

    let (stopped, i2c) =
        run_until_shutdown(display, &mut LocalClock, &mut TokioDelay, shutdown).await;
    drop(i2c);

    match stopped {
        Stopped::Signal(_) => ExitCode::SUCCESS,
        Stopped::Failed(e) => {
            error!("Clock stopped: {}", e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use embedded_hal_async::i2c::{ErrorKind, ErrorType, Operation};

    const STARTUP_WRITES: usize = 25 + 524;
    const FRAME_WRITES: usize = 524 + 3 + 8 * 10;

    /// Accepts and counts every write.
    #[derive(Debug, Default)]
    struct CountingBus {
        writes: usize,
    }

    impl ErrorType for CountingBus {
        type Error = ErrorKind;
    }

    impl I2c for CountingBus {
        async fn transaction(
            &mut self,
            _address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            for op in operations.iter_mut() {
                match op {
                    Operation::Write(_) => self.writes += 1,
                    Operation::Read(buffer) => buffer.fill(0),
                }
            }
            Ok(())
        }
    }

    fn clock_display(config: ClockConfig) -> ClockDisplay<CountingBus> {
        let driver = OledDriver::new(CountingBus::default(), OLED_ADDRESS);
        ClockDisplay::new(driver, get_font(FontStyle::Bold), config)
    }

    #[test]
    fn missing_device_node_is_an_open_error() {
        let err = open_bus("/dev/i2c-does-not-exist", OLED_ADDRESS).err().unwrap();
        assert!(matches!(err, StartupError::Open { .. }));
        assert!(err.to_string().starts_with("I2C open failed: /dev/i2c-does-not-exist"));
    }

    #[test]
    fn non_i2c_node_is_a_bind_error() {
        let err = open_bus("/dev/null", OLED_ADDRESS).err().unwrap();
        assert!(matches!(err, StartupError::Bind { address: OLED_ADDRESS, .. }));
        assert!(err.to_string().starts_with("I2C address bind failed: 0x3c: "));
    }

    #[tokio::test(start_paused = true)]
    async fn ready_signal_stops_loop_and_returns_bus() {
        let shutdown = async { "SIGTERM" };
        let (stopped, bus) = run_until_shutdown(
            clock_display(ClockConfig::default()),
            &mut LocalClock,
            &mut TokioDelay,
            shutdown,
        )
        .await;

        assert!(matches!(stopped, Stopped::Signal("SIGTERM")));
        // Either branch may be polled first; the loop can have drawn at most
        // its first frame before parking on the refresh delay.
        assert!(bus.writes == 0 || bus.writes == STARTUP_WRITES + FRAME_WRITES);
    }

    #[tokio::test(start_paused = true)]
    async fn later_signal_interrupts_running_clock() {
        let shutdown = async {
            tokio::time::sleep(Duration::from_millis(1_200)).await;
            "SIGINT"
        };
        let (stopped, bus) = run_until_shutdown(
            clock_display(ClockConfig::default()),
            &mut LocalClock,
            &mut TokioDelay,
            shutdown,
        )
        .await;

        assert!(matches!(stopped, Stopped::Signal("SIGINT")));
        assert!(bus.writes > STARTUP_WRITES);
        assert_eq!((bus.writes - STARTUP_WRITES) % FRAME_WRITES, 0);
    }

    #[tokio::test]
    async fn configuration_error_ends_loop_without_signal() {
        let config = ClockConfig {
            text_page: 4,
            ..ClockConfig::default()
        };
        let (stopped, bus) = run_until_shutdown(
            clock_display(config),
            &mut LocalClock,
            &mut TokioDelay,
            std::future::pending(),
        )
        .await;

        assert!(matches!(
            stopped,
            Stopped::Failed(OledError::InvalidCursor { page: 4, .. })
        ));
        // Startup plus one clear before the cursor was rejected.
        assert_eq!(bus.writes, STARTUP_WRITES + 524);
    }
}
