use esp_hal::gpio::Output;

use myrtio_matrix_composer::{BitBangBus, MatrixEngine};

use crate::infrastructure::config::{MATRIX_X_PANELS, MATRIX_Y_PANELS};

/// Clock, data and chain-select lines
pub(crate) type MatrixBusDriver = BitBangBus<Output<'static>, Output<'static>, Output<'static>>;

pub(crate) type MatrixEngineImpl = MatrixEngine<MatrixBusDriver, MATRIX_X_PANELS, MATRIX_Y_PANELS>;
