use embedded_hal::digital::OutputPin;

use super::{BitOrder, MatrixBus};

/// GPIO bit-banged chain bus
///
/// Shifts bytes out on a data line clocked by a clock line, one bit per
/// high-then-low clock pulse. No delays are inserted; the chain latches
/// on the rising edge of chain-select.
pub struct BitBangBus<CLK, DIN, CS> {
    clk: CLK,
    din: DIN,
    cs: CS,
}

impl<CLK, DIN, CS> BitBangBus<CLK, DIN, CS>
where
    CLK: OutputPin,
    DIN: OutputPin<Error = CLK::Error>,
    CS: OutputPin<Error = CLK::Error>,
{
    /// Create a new bus
    ///
    /// # Arguments
    /// * `clk` - Clock line
    /// * `din` - Data line
    /// * `cs` - Chain-select (load) line
    pub fn new(clk: CLK, din: DIN, cs: CS) -> Self {
        Self { clk, din, cs }
    }

    /// Give the pins back
    pub fn release(self) -> (CLK, DIN, CS) {
        (self.clk, self.din, self.cs)
    }

    fn write_bit(&mut self, on: bool) -> Result<(), CLK::Error> {
        if on {
            self.din.set_high()?;
        } else {
            self.din.set_low()?;
        }
        self.clk.set_high()?;
        self.clk.set_low()
    }
}

impl<CLK, DIN, CS> MatrixBus for BitBangBus<CLK, DIN, CS>
where
    CLK: OutputPin,
    DIN: OutputPin<Error = CLK::Error>,
    CS: OutputPin<Error = CLK::Error>,
{
    type Error = CLK::Error;

    fn select(&mut self) -> Result<(), Self::Error> {
        self.cs.set_low()
    }

    fn deselect(&mut self) -> Result<(), Self::Error> {
        self.cs.set_high()
    }

    fn shift_out(&mut self, byte: u8, order: BitOrder) -> Result<(), Self::Error> {
        for i in 0..8 {
            let mask = match order {
                BitOrder::MsbFirst => 0x80 >> i,
                BitOrder::LsbFirst => 0x01 << i,
            };
            self.write_bit(byte & mask != 0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::cell::RefCell;
    use core::convert::Infallible;
    use std::rc::Rc;

    use embedded_hal::digital::ErrorType;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Line {
        Clk,
        Din,
        Cs,
    }

    type Trace = Rc<RefCell<Vec<(Line, bool)>>>;

    struct TracePin {
        line: Line,
        trace: Trace,
    }

    impl ErrorType for TracePin {
        type Error = Infallible;
    }

    impl OutputPin for TracePin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.trace.borrow_mut().push((self.line, false));
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.trace.borrow_mut().push((self.line, true));
            Ok(())
        }
    }

    fn traced_bus() -> (BitBangBus<TracePin, TracePin, TracePin>, Trace) {
        let trace = Trace::default();
        let pin = |line| TracePin {
            line,
            trace: trace.clone(),
        };
        (BitBangBus::new(pin(Line::Clk), pin(Line::Din), pin(Line::Cs)), trace)
    }

    /// Data bits sampled on every rising clock edge
    fn sampled_bits(trace: &[(Line, bool)]) -> Vec<bool> {
        let mut din = false;
        let mut bits = Vec::new();
        for &(line, level) in trace {
            match line {
                Line::Din => din = level,
                Line::Clk if level => bits.push(din),
                _ => {}
            }
        }
        bits
    }

    #[test]
    fn msb_first_waveform() {
        let (mut bus, trace) = traced_bus();
        bus.shift_out(0b1010_0001, BitOrder::MsbFirst).unwrap();

        let trace = trace.borrow();
        assert_eq!(trace.len(), 24);
        // data, clock high, clock low per bit
        assert_eq!(trace[0], (Line::Din, true));
        assert_eq!(trace[1], (Line::Clk, true));
        assert_eq!(trace[2], (Line::Clk, false));
        assert_eq!(
            sampled_bits(&trace),
            [true, false, true, false, false, false, false, true]
        );
    }

    #[test]
    fn lsb_first_reverses_bits() {
        let (mut bus, trace) = traced_bus();
        bus.shift_out(0b1010_0001, BitOrder::LsbFirst).unwrap();
        assert_eq!(
            sampled_bits(&trace.borrow()),
            [true, false, false, false, false, true, false, true]
        );
    }

    #[test]
    fn select_drives_chain_select() {
        let (mut bus, trace) = traced_bus();
        bus.select().unwrap();
        bus.shift_out(0, BitOrder::MsbFirst).unwrap();
        bus.deselect().unwrap();

        let trace = trace.borrow();
        assert_eq!(trace.first(), Some(&(Line::Cs, false)));
        assert_eq!(trace.last(), Some(&(Line::Cs, true)));
        assert_eq!(trace.iter().filter(|(line, _)| *line == Line::Cs).count(), 2);
    }
}
