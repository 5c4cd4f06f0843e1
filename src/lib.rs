//! `cantherm` library: primitives required to run a minimal periodic
//! temperature telemetry exchange over CAN in a `no_std` environment.
//! The crate exposes the infrastructure modules (frame codec), protocol
//! logic (exchange driver, supervisor, transport), and the collaborator
//! traits firmware plugs its hardware into.
#![no_std]
//==================================================================================
/// Domain and low-level errors (CAN identifier construction, bus timing
/// configuration, transport bring-up, and related issues).
pub mod error;
/// Byte-level codec for the fixed 8-byte telemetry frame.
pub mod infra;
/// Telemetry protocol implementation: CAN transport, exchange driver,
/// supervisor, and message structures.
pub mod protocol;
//==================================================================================
