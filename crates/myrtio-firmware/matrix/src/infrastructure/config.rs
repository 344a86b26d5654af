pub(crate) struct DeviceConfig {
    pub name: &'static str,
}

pub(crate) struct MatrixConfig {
    /// Panels per band
    pub x_panels: usize,
    /// Bands of panels
    pub y_panels: usize,
    /// MAX7219 intensity, 0..=15
    pub intensity: u8,
}

pub(crate) struct FirmwareConfig {
    pub version: &'static str,
}

#[cfg(feature = "strip")]
pub(crate) const DEVICE: DeviceConfig = DeviceConfig {
    name: "MyrtIO Matrix Strip",
};
#[cfg(feature = "wall")]
pub(crate) const DEVICE: DeviceConfig = DeviceConfig {
    name: "MyrtIO Matrix Wall",
};
#[cfg(not(any(feature = "strip", feature = "wall")))]
pub(crate) const DEVICE: DeviceConfig = DeviceConfig {
    name: "MyrtIO Matrix",
};

#[cfg(feature = "strip")]
pub(crate) const MATRIX: MatrixConfig = MatrixConfig {
    x_panels: 4,
    y_panels: 1,
    intensity: 15,
};
#[cfg(feature = "wall")]
pub(crate) const MATRIX: MatrixConfig = MatrixConfig {
    x_panels: 8,
    y_panels: 4,
    intensity: 8,
};
#[cfg(not(any(feature = "strip", feature = "wall")))]
pub(crate) const MATRIX: MatrixConfig = MatrixConfig {
    x_panels: 4,
    y_panels: 4,
    intensity: 15,
};

pub(crate) const MATRIX_X_PANELS: usize = MATRIX.x_panels;
pub(crate) const MATRIX_Y_PANELS: usize = MATRIX.y_panels;

/// Frames between two frame rate reports
pub(crate) const FPS_REPORT_FRAMES: u32 = 500;

pub(crate) const FIRMWARE: FirmwareConfig = FirmwareConfig {
    version: env!("BUILD_VERSION"),
};

#[macro_export]
macro_rules! matrix_clk_gpio {
    ($p:expr) => {
        $p.GPIO18
    };
}

#[macro_export]
macro_rules! matrix_din_gpio {
    ($p:expr) => {
        $p.GPIO23
    };
}

#[macro_export]
macro_rules! matrix_cs_gpio {
    ($p:expr) => {
        $p.GPIO5
    };
}
