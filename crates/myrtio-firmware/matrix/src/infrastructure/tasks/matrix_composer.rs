use embassy_futures::yield_now;
use embassy_time::Instant;

use myrtio_matrix_composer::MatrixEngine;

use crate::infrastructure::config::{self, FPS_REPORT_FRAMES};
use crate::infrastructure::types::{MatrixBusDriver, MatrixEngineImpl};

/// Task for running the matrix composer
/// It renders and shows frames back to back, yielding to the executor
/// between frames.
#[embassy_executor::task]
pub(crate) async fn matrix_composer_task(bus: MatrixBusDriver) {
    let mut engine: MatrixEngineImpl =
        MatrixEngine::new(bus).with_intensity(config::MATRIX.intensity);

    if let Err(e) = engine.init() {
        log::error!("matrix: init failed: {}", e);
    }

    let mut window_start = Instant::now();
    loop {
        if let Err(e) = engine.tick() {
            log::warn!("matrix: frame {} dropped: {}", engine.frame(), e);
        }

        if engine.frame() % FPS_REPORT_FRAMES == 0 {
            let elapsed_ms = window_start.elapsed().as_millis().max(1);
            log::info!(
                "matrix: {} fps",
                u64::from(FPS_REPORT_FRAMES) * 1000 / elapsed_ms
            );
            window_start = Instant::now();
        }

        yield_now().await;
    }
}
