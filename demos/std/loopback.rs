//! # Loopback Demo
//!
//! Minimal example demonstrating the basics of cantherm:
//! - Build a node name
//! - Encode and decode a telemetry frame
//! - Drive the exchange over an in-memory loopback bus
//!
//! This demo uses `std` for a quick trial run.
//! For an embedded template, see `demos/stm32/telemetry_node.rs`.
//!
//! ```bash
//! cargo run --example loopback
//! ```

use std::collections::VecDeque;

use cantherm::infra::codec;
use cantherm::protocol::exchange::driver::{ExchangeDriver, ReceiveOutcome, SendOutcome};
use cantherm::protocol::messages::{NodeName, TelemetryMessage};
use cantherm::protocol::transport::config::BusConfig;
use cantherm::protocol::transport::traits::can_bus::CanBus;
use cantherm::protocol::transport::can_frame::CanFrame;
use cantherm::protocol::transport::TELEMETRY_FRAME_ID;

/// In-memory bus in loopback mode: everything transmitted is received back.
struct LoopbackBus {
    fifo: VecDeque<CanFrame>,
}

impl LoopbackBus {
    fn new() -> Self {
        Self {
            fifo: VecDeque::new(),
        }
    }
}

impl CanBus for LoopbackBus {
    type Error = ();

    fn transmit_slot_available(&mut self) -> bool {
        true
    }

    fn transmit(&mut self, frame: &CanFrame) -> Result<(), Self::Error> {
        self.fifo.push_back(frame.clone());
        Ok(())
    }

    fn frame_available(&mut self) -> bool {
        !self.fifo.is_empty()
    }

    fn receive(&mut self) -> Result<CanFrame, Self::Error> {
        self.fifo.pop_front().ok_or(())
    }
}

fn main() {
    println!("=== cantherm Loopback Demo ===\n");

    // ======================================================================
    // 1. Build the node identity
    // ======================================================================
    println!("1. Building a node name");

    let name = NodeName::new("Michi"); // Max 5 bytes, longer input is truncated
    println!("   Name: {}", name);
    println!("   Wire bytes: {:02X?}\n", name.raw());

    // ======================================================================
    // 2. Encode and decode one frame by hand
    // ======================================================================
    println!("2. Packing a telemetry frame");

    let message = TelemetryMessage::new(name, 7, 23.4);
    let frame = codec::encode(&message);

    print!("   Payload: ");
    for byte in &frame {
        print!("{:02X} ", byte);
    }
    println!();

    let decoded = codec::decode(&frame);
    println!("   Decoded: {}\n", decoded);

    // ======================================================================
    // 3. Deployment timing
    // ======================================================================
    println!("3. Bus configuration");

    let config = BusConfig::loopback();
    println!("   Mode: {:?}", config.mode);
    println!(
        "   Bit rate @ 45 MHz: {} bit/s\n",
        config.bit_rate(45_000_000)
    );

    // ======================================================================
    // 4. Run the exchange over the loopback bus
    // ======================================================================
    println!("4. Driving the exchange");

    let mut driver = ExchangeDriver::new(LoopbackBus::new(), name, TELEMETRY_FRAME_ID);

    for temperature in [21.5, 21.7, 22.0, 22.4] {
        match driver.send_cycle(temperature) {
            SendOutcome::Sent {
                sequence,
                temperature,
            } => println!("   Sent:     {} (#{}) {:.1} C", name, sequence, temperature),
            other => println!("   Send outcome: {:?}", other),
        }

        match driver.receive_cycle() {
            ReceiveOutcome::Received(message) => println!("   Received: {}", message),
            other => println!("   Receive outcome: {:?}", other),
        }
    }

    println!("\n   Send-Cnt: {}", driver.sent_total());
    println!("   Recv-Cnt: {}", driver.received_total());

    // ======================================================================
    println!("\nLoopback demo complete.");
}
