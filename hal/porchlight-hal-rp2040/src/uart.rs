//! Blocking UART transmitter
//!
//! The status feed goes out on UART0 TX (GPIO0). Writes block until the
//! bytes are in the TX FIFO; flush blocks until they are on the wire.

use embassy_rp::peripherals::{PIN_0, UART0};
use embassy_rp::uart::{self, Blocking};
use embassy_rp::Peri;
use porchlight_hal::uart::{DataBits, Parity, StopBits, UartConfig, UartTx};

/// UART0 transmitter
pub struct RpUartTx {
    tx: uart::UartTx<'static, Blocking>,
}

impl RpUartTx {
    pub fn new(uart: Peri<'static, UART0>, tx_pin: Peri<'static, PIN_0>, config: &UartConfig) -> Self {
        Self {
            tx: uart::UartTx::new_blocking(uart, tx_pin, to_rp_config(config)),
        }
    }
}

impl UartTx for RpUartTx {
    type Error = uart::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tx.blocking_write(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.tx.blocking_flush()
    }
}

fn to_rp_config(config: &UartConfig) -> uart::Config {
    let mut rp = uart::Config::default();
    rp.baudrate = config.baudrate;
    rp.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    rp.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    rp.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    rp
}
