//! Serial status link
//!
//! Line-oriented text over a UART: each line is sent followed by `\n`
//! and flushed before returning. No framing, no flow control.

use porchlight_hal::uart::UartTx;

/// Line terminator
pub const LINE_END: &[u8] = b"\n";

/// Serial link errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialError {
    /// UART rejected or failed the transmit
    Transmit,
}

/// Newline-terminated line writer
pub struct SerialLines<U> {
    uart: U,
}

impl<U: UartTx> SerialLines<U> {
    pub fn new(uart: U) -> Self {
        Self { uart }
    }

    /// Send `text` and a terminator
    pub fn write_line(&mut self, text: &str) -> Result<(), SerialError> {
        self.uart
            .write_blocking(text.as_bytes())
            .and_then(|()| self.uart.write_blocking(LINE_END))
            .and_then(|()| self.uart.flush())
            .map_err(|_| SerialError::Transmit)
    }

    pub fn into_inner(self) -> U {
        self.uart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    /// UART that appends to a buffer, optionally refusing writes
    #[derive(Default)]
    struct BufferUart {
        sent: Vec<u8>,
        flushes: usize,
        broken: bool,
    }

    impl UartTx for BufferUart {
        type Error = ();

        fn write_blocking(&mut self, data: &[u8]) -> Result<(), ()> {
            if self.broken {
                return Err(());
            }
            self.sent.extend_from_slice(data);
            Ok(())
        }

        fn flush(&mut self) -> Result<(), ()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_line_terminated() {
        let mut serial = SerialLines::new(BufferUart::default());
        serial.write_line("Light is on").unwrap();
        serial.write_line("Light is off").unwrap();

        let uart = serial.into_inner();
        assert_eq!(uart.sent, b"Light is on\nLight is off\n");
        assert_eq!(uart.flushes, 2);
    }

    #[test]
    fn test_transmit_error() {
        let mut serial = SerialLines::new(BufferUart {
            broken: true,
            ..Default::default()
        });
        assert_eq!(serial.write_line("Light is on"), Err(SerialError::Transmit));
    }
}
