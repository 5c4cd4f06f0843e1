//! # STM32 Telemetry Node
//!
//! Complete STM32 (ARM Cortex-M) template using Embassy.
//!
//! ## Compilation
//! ```bash
//! # For STM32F4
//! cargo build --example stm32_telemetry --target thumbv7em-none-eabihf --features embedded-demos
//!
//! # Flash with probe-rs
//! cargo run --example stm32_telemetry --target thumbv7em-none-eabihf --features embedded-demos
//! ```
//!
//! ## Required hardware
//! - STM32F4 board with CAN (tested layout: F429 Discovery)
//! - CAN transceiver, or the peripheral's loopback mode for a single board
//! - Connections (example for CAN1):
//!   - PB8 → CAN RX
//!   - PB9 → CAN TX
//!
//! ## Important note
//! This demo is a generic template. To use it:
//! 1. Add the STM32-specific dependencies to Cargo.toml:
//!    ```toml
//!    [dev-dependencies]
//!    embassy-stm32 = { version = "0.x", features = ["stm32f429zi", "time-driver-any"] }
//!    embassy-executor = { version = "0.7", features = ["arch-cortex-m", "executor-thread"] }
//!    ```
//! 2. Adapt the pins and clock tree to your board
//! 3. Configure the appropriate linker script

#![no_std]
#![no_main]

// NOTE: Uncomment these imports once the dependencies are added
// use embassy_executor::Spawner;
// use embassy_stm32::{bind_interrupts, can, peripherals, Config as StmConfig};
// use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
// use embassy_sync::channel::Channel;
// use embassy_time::{Duration, Ticker};
// use static_cell::StaticCell;

// ============================================================================
// cantherm imports
// ============================================================================

use cantherm::protocol::{
    messages::NodeName,
    transport::{
        can_frame::CanFrame,
        can_id::CanId,
        config::{BusConfig, BusMode},
        traits::{can_bus::CanBus, temperature::TemperatureSensor, tick_timer::TickTimer},
        TELEMETRY_FRAME_ID, TELEMETRY_PERIOD_MS,
    },
};

// ============================================================================
// Bus configuration
// ============================================================================

/// Deployment timing: 45 MHz APB1, prescaler 16, 22 tq per bit ≈ 128 kbit/s.
/// Loopback mode lets a single board exercise the full exchange.
pub fn bus_config() -> BusConfig {
    BusConfig {
        mode: BusMode::Loopback,
        ..BusConfig::default()
    }
}

// ============================================================================
// CanBus implementation for STM32 (polled bxCAN)
// ============================================================================

// NOTE: Example implementation (adapt to your HAL). The peripheral is
// polled, never awaited: `transmit_slot_available` maps to the free
// mailbox count and `frame_available` to the FIFO fill level.
//
// pub struct Stm32CanBus<'d> {
//     can: can::Can<'d>,
// }
//
// impl<'d> Stm32CanBus<'d> {
//     /// Validate the config, write the bit timing, set the accept-all
//     /// filter, and leave init mode. Any HAL refusal surfaces as a fatal
//     /// `InitError`; there is no meaningful degraded operation.
//     pub fn init(
//         can: can::Can<'d>,
//         config: &BusConfig,
//     ) -> Result<Self, cantherm::error::InitError<can::enums::BusError>> {
//         config.validate()?;
//         // ...write prescaler/BS1/BS2/SJW, mode, filter bank 0...
//         Ok(Self { can })
//     }
// }
//
// impl<'d> CanBus for Stm32CanBus<'d> {
//     type Error = can::enums::BusError;
//
//     fn transmit_slot_available(&mut self) -> bool {
//         self.can.free_mailbox_count() > 0
//     }
//
//     fn transmit(&mut self, frame: &CanFrame) -> Result<(), Self::Error> {
//         let id = embedded_can::StandardId::try_from(frame.id)
//             .map_err(|_| can::enums::BusError::Form)?;
//         let hal_frame = can::frame::Frame::new_data(id, &frame.data[..frame.len])
//             .map_err(|_| can::enums::BusError::Form)?;
//         self.can.try_write(&hal_frame).map(|_mailbox| ()).map_err(|_| can::enums::BusError::Form)
//     }
//
//     fn frame_available(&mut self) -> bool {
//         !self.can.rx_fifo_is_empty()
//     }
//
//     fn receive(&mut self) -> Result<CanFrame, Self::Error> {
//         let envelope = self.can.try_read().map_err(|_| can::enums::BusError::Form)?;
//         let mut data = [0u8; 8];
//         let len = envelope.frame.data().len();
//         data[..len].copy_from_slice(envelope.frame.data());
//         Ok(CanFrame { id: CanId(0x0F5), data, len })
//     }
// }

// ============================================================================
// Timer implementation for STM32
// ============================================================================

pub struct Stm32Timer;

impl TickTimer for Stm32Timer {
    async fn delay_ms(&mut self, millis: u32) {
        embassy_time::Timer::after(embassy_time::Duration::from_millis(millis as u64)).await;
    }
}

// ============================================================================
// Temperature sensor
// ============================================================================

// NOTE: Wire your ADC/I2C sensor here; the exchange only needs one reading
// per tick.
//
// pub struct BoardSensor { /* adc handle */ }
//
// impl TemperatureSensor for BoardSensor {
//     fn current_temperature(&mut self) -> f64 {
//         // read and convert the raw sample
//         23.4
//     }
// }

// ============================================================================
// Main application
// ============================================================================

// NOTE: Uncomment and adapt `main` for your STM32
// static EVENT_CHANNEL: StaticCell<
//     Channel<CriticalSectionRawMutex, cantherm::protocol::exchange::supervisor::ExchangeEvent, 8>,
// > = StaticCell::new();
//
// #[embassy_executor::main]
// async fn main(spawner: Spawner) {
//     defmt::info!("=== STM32 Telemetry Node ===");
//
//     // 1. Initialize the MCU and the CAN peripheral
//     let p = embassy_stm32::init(StmConfig::default());
//     let can = can::Can::new(p.CAN1, p.PB8, p.PB9, Irqs);
//
//     // 2. Bring the bus up; a refusal here is fatal
//     let bus = match Stm32CanBus::init(can, &bus_config()) {
//         Ok(bus) => bus,
//         Err(err) => {
//             defmt::error!("CAN bring-up failed");
//             loop {
//                 embassy_time::Timer::after(Duration::from_secs(1)).await;
//             }
//         }
//     };
//
//     // 3. Assemble the exchange
//     use cantherm::protocol::exchange::{driver::ExchangeDriver, supervisor::TelemetryService};
//
//     let event_channel = EVENT_CHANNEL.init(Channel::new());
//     let driver = ExchangeDriver::new(bus, NodeName::new("Michi"), TELEMETRY_FRAME_ID);
//     let service = TelemetryService::<_, _, _, 8>::new(
//         driver,
//         Stm32Timer,
//         BoardSensor::new(),
//         TELEMETRY_PERIOD_MS,
//         Some(&*event_channel),
//     );
//     let parts = service.into_parts();
//
//     // 4. Presentation task renders events; the runner owns the bus
//     spawner.spawn(display_task(parts.events.unwrap())).unwrap();
//     parts.runner.drive().await;
// }
//
// #[embassy_executor::task]
// async fn display_task(
//     mut events: cantherm::protocol::exchange::supervisor::TelemetryEvents<'static, 8>,
// ) {
//     use cantherm::protocol::exchange::supervisor::ExchangeEvent;
//     loop {
//         match events.recv().await {
//             ExchangeEvent::Sent { sequence, temperature } => {
//                 defmt::info!("Sent #{}: {} C", sequence, temperature);
//             }
//             ExchangeEvent::Received(message) => {
//                 defmt::info!("RX from {}: #{}", message.name.as_str(), message.sequence);
//             }
//             ExchangeEvent::SendFailed => defmt::warn!("send failed"),
//             ExchangeEvent::ReceiveFailed => defmt::warn!("receive failed"),
//         }
//     }
// }

// ============================================================================
// Panic handler
// ============================================================================

#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    loop {
        core::hint::spin_loop();
    }
}

// ============================================================================
// Placeholder main so the template compiles as-is
// ============================================================================

#[no_mangle]
pub extern "C" fn main() -> ! {
    loop {
        core::hint::spin_loop();
    }
}
