//! Periodic supervisor built on top of [`ExchangeDriver`].
//!
//! It keeps the exchange loop ticking and optionally offers:
//!
//! * an event receiver (`TelemetryEvents`) so a presentation task can
//!   render what the exchange did without touching the bus.
//!
//! Firmware decides whether it wants events by providing a pre-allocated
//! [`embassy_sync::Channel`] instance. No allocation is performed by the
//! library and there is no dependency on a particular BSP.

use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex,
    channel::{Channel, Receiver},
};

use crate::protocol::exchange::driver::{ExchangeDriver, ReceiveOutcome, SendOutcome};
use crate::protocol::messages::TelemetryMessage;
use crate::protocol::transport::traits::{
    can_bus::CanBus, temperature::TemperatureSensor, tick_timer::TickTimer,
};

/// Noteworthy outcomes published for the presentation layer.
///
/// Quiet cycles (`Skipped` sends, `Empty` polls) are not published; the
/// channel only carries state a display would change for.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ExchangeEvent {
    /// A frame left for the bus with this sequence value and reading.
    Sent { sequence: u8, temperature: f64 },
    /// A frame arrived and decoded into this record.
    Received(TelemetryMessage),
    /// The transport rejected an outbound frame after the slot check.
    SendFailed,
    /// The transport failed to hand over a pending frame.
    ReceiveFailed,
}

/// Service assembling the supervisor components.
pub struct TelemetryService<'a, C, T, S, const EVENT_CAP: usize>
where
    C: CanBus,
    T: TickTimer,
    S: TemperatureSensor,
{
    driver: ExchangeDriver<C>,
    timer: T,
    sensor: S,
    period_ms: u32,
    event_channel: Option<&'a Channel<CriticalSectionRawMutex, ExchangeEvent, EVENT_CAP>>,
}

impl<'a, C, T, S, const EVENT_CAP: usize> TelemetryService<'a, C, T, S, EVENT_CAP>
where
    C: CanBus,
    T: TickTimer,
    S: TemperatureSensor,
{
    /// Wrap an already-initialised [`ExchangeDriver`].
    pub fn new(
        driver: ExchangeDriver<C>,
        timer: T,
        sensor: S,
        period_ms: u32,
        event_channel: Option<&'a Channel<CriticalSectionRawMutex, ExchangeEvent, EVENT_CAP>>,
    ) -> Self {
        Self {
            driver,
            timer,
            sensor,
            period_ms,
            event_channel,
        }
    }

    /// Split into receiver/runner components.
    pub fn into_parts(self) -> TelemetryServiceParts<'a, C, T, S, EVENT_CAP> {
        let events = self.event_channel.map(|channel| TelemetryEvents {
            receiver: channel.receiver(),
        });
        TelemetryServiceParts {
            events,
            runner: TelemetryRunner {
                driver: self.driver,
                timer: self.timer,
                sensor: self.sensor,
                period_ms: self.period_ms,
                event_channel: self.event_channel,
            },
        }
    }
}

/// Bundle returned by [`TelemetryService::into_parts`].
pub struct TelemetryServiceParts<'a, C, T, S, const EVENT_CAP: usize>
where
    C: CanBus,
    T: TickTimer,
    S: TemperatureSensor,
{
    pub events: Option<TelemetryEvents<'a, EVENT_CAP>>,
    pub runner: TelemetryRunner<'a, C, T, S, EVENT_CAP>,
}

/// Runner that drives the periodic exchange loop.
pub struct TelemetryRunner<'a, C, T, S, const EVENT_CAP: usize>
where
    C: CanBus,
    T: TickTimer,
    S: TemperatureSensor,
{
    driver: ExchangeDriver<C>,
    timer: T,
    sensor: S,
    period_ms: u32,
    event_channel: Option<&'a Channel<CriticalSectionRawMutex, ExchangeEvent, EVENT_CAP>>,
}

impl<'a, C, T, S, const EVENT_CAP: usize> TelemetryRunner<'a, C, T, S, EVENT_CAP>
where
    C: CanBus,
    T: TickTimer,
    S: TemperatureSensor,
{
    /// Tick forever: one send attempt and one receive poll per period.
    ///
    /// Neither cycle blocks; the only suspension point is the inter-tick
    /// delay. Per-cycle failures are published and absorbed, so this
    /// function never returns.
    pub async fn drive(mut self) {
        loop {
            self.timer.delay_ms(self.period_ms).await;

            let temperature = self.sensor.current_temperature();
            match self.driver.send_cycle(temperature) {
                SendOutcome::Sent {
                    sequence,
                    temperature,
                } => {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("Telemetry sent: #{} {} C", sequence, temperature);

                    self.publish(ExchangeEvent::Sent {
                        sequence,
                        temperature,
                    });
                }
                SendOutcome::Skipped => {
                    #[cfg(feature = "defmt")]
                    defmt::trace!("Transmit mailboxes full, send skipped");
                }
                SendOutcome::Failed(_err) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Transmit failed, sequence not consumed");

                    self.publish(ExchangeEvent::SendFailed);
                }
            }

            match self.driver.receive_cycle() {
                ReceiveOutcome::Received(message) => {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("Telemetry received: #{}", message.sequence);

                    self.publish(ExchangeEvent::Received(message));
                }
                ReceiveOutcome::Empty => {
                    #[cfg(feature = "defmt")]
                    defmt::trace!("Receive FIFO empty");
                }
                ReceiveOutcome::Failed(_err) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Receive fetch failed");

                    self.publish(ExchangeEvent::ReceiveFailed);
                }
            }
        }
    }

    /// Publication is lossy: a stalled presentation task drops events
    /// instead of blocking the exchange.
    fn publish(&self, event: ExchangeEvent) {
        if let Some(channel) = self.event_channel {
            channel.try_send(event).ok();
        }
    }
}

/// Optional receiver handing exchange events to the presentation task.
pub struct TelemetryEvents<'a, const EVENT_CAP: usize> {
    receiver: Receiver<'a, CriticalSectionRawMutex, ExchangeEvent, EVENT_CAP>,
}

impl<'a, const EVENT_CAP: usize> TelemetryEvents<'a, EVENT_CAP> {
    pub async fn recv(&mut self) -> ExchangeEvent {
        self.receiver.receive().await
    }
}
