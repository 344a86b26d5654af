use myrtio_matrix_composer::{BitOrder, Framebuffer, MatrixBus};

/// One (address, data) pair as it went over the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Shifted {
    pub address: u8,
    pub data: u8,
    pub order: BitOrder,
}

/// Bus recording every transaction as its list of shifted pairs
#[derive(Default)]
pub(crate) struct RecordingBus {
    pub transactions: Vec<Vec<Shifted>>,
    open: Option<Vec<u8>>,
    orders: Vec<BitOrder>,
}

impl MatrixBus for RecordingBus {
    type Error = core::convert::Infallible;

    fn select(&mut self) -> Result<(), Self::Error> {
        assert!(self.open.is_none(), "select inside an open transaction");
        self.open = Some(Vec::new());
        self.orders.clear();
        Ok(())
    }

    fn deselect(&mut self) -> Result<(), Self::Error> {
        let bytes = self.open.take().expect("deselect without select");
        assert_eq!(bytes.len() % 2, 0, "unpaired byte in transaction");
        let pairs = bytes
            .chunks(2)
            .zip(self.orders.chunks(2))
            .map(|(pair, orders)| {
                assert_eq!(orders[0], BitOrder::MsbFirst, "address must be MSB first");
                Shifted {
                    address: pair[0],
                    data: pair[1],
                    order: orders[1],
                }
            })
            .collect();
        self.transactions.push(pairs);
        Ok(())
    }

    fn shift_out(&mut self, byte: u8, order: BitOrder) -> Result<(), Self::Error> {
        self.open
            .as_mut()
            .expect("shift outside a transaction")
            .push(byte);
        self.orders.push(order);
        Ok(())
    }
}

/// Framebuffer whose bytes are their own raster index
pub(crate) fn indexed_frame<const X: usize, const Y: usize>() -> Framebuffer<X, Y> {
    let mut frame = Framebuffer::new();
    for (i, byte) in frame.as_bytes_mut().iter_mut().enumerate() {
        *byte = i as u8;
    }
    frame
}
