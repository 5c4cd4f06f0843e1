/// Test doubles to simulate the CAN bus, temperature sensor, and timer
/// during integration tests.
use cantherm::protocol::transport::{
    can_frame::CanFrame,
    traits::{can_bus::CanBus, temperature::TemperatureSensor, tick_timer::TickTimer},
};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use tokio::time::{sleep, Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
/// Faults the mock bus can report.
pub enum MockBusError {
    Transmit,
    Receive,
}

#[derive(Default)]
struct BusState {
    mailbox_capacity: usize,
    pending_tx: VecDeque<CanFrame>,
    rx_fifo: VecDeque<CanFrame>,
    wire_log: Vec<CanFrame>,
    transmit_faults: usize,
    receive_faults: usize,
    immediate_loopback: bool,
}

#[derive(Clone)]
#[allow(dead_code)]
/// In-memory CAN bus reproducing the polled `CanBus` trait behavior.
///
/// Cloned handles share the same queues, so a test keeps one handle for
/// itself and gives the other to the driver under test.
pub struct MockCanBus {
    state: Rc<RefCell<BusState>>,
}

#[allow(dead_code)]
impl MockCanBus {
    /// Bus with three transmit mailboxes; frames reach the wire on
    /// [`drain_wire`](Self::drain_wire).
    pub fn new() -> Self {
        Self::with_mailbox_capacity(3)
    }

    /// Bus where every accepted frame is immediately delivered back into
    /// the local receive FIFO, like a peripheral in loopback mode.
    pub fn loopback() -> Self {
        let bus = Self::with_mailbox_capacity(3);
        bus.state.borrow_mut().immediate_loopback = true;
        bus
    }

    /// Bus with a custom number of transmit mailboxes. Zero keeps the
    /// transmit queue permanently full.
    pub fn with_mailbox_capacity(capacity: usize) -> Self {
        Self {
            state: Rc::new(RefCell::new(BusState {
                mailbox_capacity: capacity,
                ..BusState::default()
            })),
        }
    }

    /// Move every pending mailbox frame onto the wire and back into the
    /// local receive FIFO (the deployment runs in loopback).
    pub fn drain_wire(&self) {
        let mut state = self.state.borrow_mut();
        while let Some(frame) = state.pending_tx.pop_front() {
            state.wire_log.push(frame.clone());
            state.rx_fifo.push_back(frame);
        }
    }

    /// Drop a frame into the receive FIFO as if a remote node had sent it.
    pub fn inject_frame(&self, frame: CanFrame) {
        self.state.borrow_mut().rx_fifo.push_back(frame);
    }

    /// Make the next transmit call fail even though a slot is free.
    pub fn fail_next_transmit(&self) {
        self.state.borrow_mut().transmit_faults += 1;
    }

    /// Make the next receive call fail even though a frame is pending.
    pub fn fail_next_receive(&self) {
        self.state.borrow_mut().receive_faults += 1;
    }

    /// Every frame that reached the wire so far.
    pub fn wire_frames(&self) -> Vec<CanFrame> {
        self.state.borrow().wire_log.clone()
    }
}

impl CanBus for MockCanBus {
    type Error = MockBusError;

    fn transmit_slot_available(&mut self) -> bool {
        let state = self.state.borrow();
        state.pending_tx.len() < state.mailbox_capacity
    }

    fn transmit(&mut self, frame: &CanFrame) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        if state.transmit_faults > 0 {
            state.transmit_faults -= 1;
            return Err(MockBusError::Transmit);
        }
        if state.immediate_loopback {
            state.wire_log.push(frame.clone());
            state.rx_fifo.push_back(frame.clone());
        } else {
            state.pending_tx.push_back(frame.clone());
        }
        Ok(())
    }

    fn frame_available(&mut self) -> bool {
        !self.state.borrow().rx_fifo.is_empty()
    }

    fn receive(&mut self) -> Result<CanFrame, Self::Error> {
        let mut state = self.state.borrow_mut();
        if state.receive_faults > 0 {
            state.receive_faults -= 1;
            return Err(MockBusError::Receive);
        }
        state.rx_fifo.pop_front().ok_or(MockBusError::Receive)
    }
}

#[derive(Clone)]
#[allow(dead_code)]
/// Sensor returning a test-controlled reading.
pub struct MockSensor {
    reading: Rc<Cell<f64>>,
}

#[allow(dead_code)]
impl MockSensor {
    pub fn new(initial: f64) -> Self {
        Self {
            reading: Rc::new(Cell::new(initial)),
        }
    }

    pub fn set(&self, degrees: f64) {
        self.reading.set(degrees);
    }
}

impl TemperatureSensor for MockSensor {
    fn current_temperature(&mut self) -> f64 {
        self.reading.get()
    }
}

#[allow(dead_code)]
/// Timer based on `tokio::time::sleep` to drive the loop in tests.
pub struct MockTimer;

impl TickTimer for MockTimer {
    async fn delay_ms(&mut self, millis: u32) {
        sleep(Duration::from_millis(millis as u64)).await;
    }
}
