//! Recording I2C bus for driver tests.

use embedded_hal_async::i2c::{ErrorKind, ErrorType, I2c, Operation};

use crate::transport::{COMMAND_PREFIX, DATA_PREFIX};

/// Records every write as `(address, bytes)`. While `failures_left` is
/// non-zero each write is rejected, not recorded, and decrements it.
#[derive(Debug, Default)]
pub(crate) struct RecordingBus {
    pub writes: Vec<(u8, Vec<u8>)>,
    pub failures_left: usize,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self::failing_first(usize::MAX)
    }

    /// Reject the first `count` writes, then behave like [`new`](Self::new).
    pub fn failing_first(count: usize) -> Self {
        Self {
            writes: Vec::new(),
            failures_left: count,
        }
    }

    /// Payloads of all command writes, in order.
    pub fn commands(&self) -> Vec<u8> {
        self.payloads(COMMAND_PREFIX)
    }

    /// Payloads of all data writes, in order.
    pub fn data(&self) -> Vec<u8> {
        self.payloads(DATA_PREFIX)
    }

    fn payloads(&self, prefix: u8) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(_, bytes)| bytes[0] == prefix)
            .map(|(_, bytes)| bytes[1])
            .collect()
    }
}

impl ErrorType for RecordingBus {
    type Error = ErrorKind;
}

impl I2c for RecordingBus {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => {
                    if self.failures_left > 0 {
                        self.failures_left -= 1;
                        return Err(ErrorKind::Other);
                    }
                    self.writes.push((address, bytes.to_vec()));
                }
                Operation::Read(buffer) => buffer.fill(0),
            }
        }
        Ok(())
    }
}
