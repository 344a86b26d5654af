use esp_hal::gpio::{Level, Output, OutputConfig, OutputPin};

use myrtio_matrix_composer::BitBangBus;

use crate::infrastructure::types::MatrixBusDriver;

/// Create the bit-banged bus for the panel chain
///
/// # Arguments
/// * `clk` - GPIO connected to the chain clock (CLK)
/// * `din` - GPIO connected to the chain data input (DIN)
/// * `cs` - GPIO connected to the chain load line (CS)
pub(crate) fn init_matrix_bus(
    clk: impl OutputPin + 'static,
    din: impl OutputPin + 'static,
    cs: impl OutputPin + 'static,
) -> MatrixBusDriver {
    let config = OutputConfig::default();

    // Chain-select idles high so nothing latches while pins settle
    let clk = Output::new(clk, Level::Low, config);
    let din = Output::new(din, Level::Low, config);
    let cs = Output::new(cs, Level::High, config);

    BitBangBus::new(clk, din, cs)
}
