#![no_std]
#![no_main]

mod infrastructure;

use embassy_executor::Spawner;
use embassy_time::Duration;

use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};

use crate::infrastructure::config;
use crate::infrastructure::drivers::init_matrix_bus;
use crate::infrastructure::tasks::matrix_composer_task;

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    esp_println::println!(
        "matrix: firmware {} on {} ({}x{} panels)",
        config::FIRMWARE.version,
        config::DEVICE.name,
        config::MATRIX.x_panels,
        config::MATRIX.y_panels,
    );

    // Initialize the panel chain bus and spawn the render loop
    let bus = init_matrix_bus(
        crate::matrix_clk_gpio!(peripherals),
        crate::matrix_din_gpio!(peripherals),
        crate::matrix_cs_gpio!(peripherals),
    );
    spawner.spawn(matrix_composer_task(bus)).ok();

    loop {
        embassy_time::Timer::after(Duration::from_secs(5)).await;
    }
}
