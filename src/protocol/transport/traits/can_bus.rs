//! Minimal abstraction for a polled CAN bus. Allows the library to plug
//! into various implementations (embedded HAL, desktop driver, mock bus).
use crate::protocol::transport::can_frame::CanFrame;

/// Contract to send and receive CAN frames by polling.
///
/// Every method is non-blocking: availability is checked first, the action
/// only runs when a slot or frame exists, and a full transmit queue or an
/// empty receive FIFO is ordinary backpressure rather than an error. The
/// exchange driver never retries within a cycle; the next tick polls again.
pub trait CanBus {
    type Error: core::fmt::Debug;

    /// At least one hardware transmit mailbox is free for a new frame.
    fn transmit_slot_available(&mut self) -> bool;

    /// Queue a frame for transmission. Only called after
    /// [`transmit_slot_available`](Self::transmit_slot_available) returned
    /// `true`; must not block on a busy bus.
    fn transmit(&mut self, frame: &CanFrame) -> Result<(), Self::Error>;

    /// At least one received frame is waiting in the receive FIFO.
    fn frame_available(&mut self) -> bool;

    /// Pop the next frame from the receive FIFO. Only called after
    /// [`frame_available`](Self::frame_available) returned `true`.
    fn receive(&mut self) -> Result<CanFrame, Self::Error>;
}
