//! Relay engine
//!
//! Owns the MQTT client and its event loop and drives the connection through
//! `Disconnected -> Connecting -> Subscribed -> Receiving`. Deliveries are handed
//! to the [`MessageHandler`] inline, on the task that polls the event loop, so
//! handler calls never overlap.
//!
//! There is no reconnect: any transport error ends [`Relay::run`] with an error
//! and the process is expected to be restarted by its supervisor.

use rumqttc::mqttbytes::valid_filter;
use rumqttc::{
    AsyncClient, ConnectReturnCode, Event, EventLoop, Packet, QoS, SubAck, SubscribeReasonCode,
};
use tracing::{debug, info, warn};

use crate::config::{MqttSettings, Settings};
use crate::relay::handler::MessageHandler;
use crate::relay::message::InboundMessage;
use crate::relay::watch::WatchSet;
use crate::transport::mqtt;
use crate::utils::error::{RelayError, Result};

/// Connection lifecycle of the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayState {
    Disconnected,
    Connecting,
    Subscribed,
    Receiving,
}

pub struct Relay {
    mqtt: MqttSettings,
    client: AsyncClient,
    eventloop: EventLoop,
    handler: MessageHandler<AsyncClient>,
    state: RelayState,
}

impl Relay {
    /// Builds the client from `settings` without connecting.
    ///
    /// Fails on an empty watch-list or an invalid subscribe filter.
    pub fn new(settings: Settings) -> Result<Self> {
        let watch = WatchSet::parse(&settings.relay.objects)?;

        if !valid_filter(&settings.mqtt.topic) {
            return Err(RelayError::configuration(format!(
                "invalid topic filter {:?}",
                settings.mqtt.topic
            )));
        }

        let (client, eventloop) = mqtt::client(&settings.mqtt);
        let handler = MessageHandler::new(watch, client.clone());

        debug!(
            "Params: host={} port={} topic={} objects={:?}",
            settings.mqtt.host,
            settings.mqtt.port,
            settings.mqtt.topic,
            handler.watch().sorted()
        );

        Ok(Self {
            mqtt: settings.mqtt,
            client,
            eventloop,
            handler,
            state: RelayState::Disconnected,
        })
    }

    pub fn state(&self) -> RelayState {
        self.state
    }

    pub fn watch(&self) -> &WatchSet {
        self.handler.watch()
    }

    /// Connects, subscribes and processes deliveries until the connection fails.
    ///
    /// Does not return under normal operation.
    pub async fn run(mut self) -> Result<()> {
        self.connect().await?;
        self.subscribe().await?;

        let result = self.receive().await;
        self.state = RelayState::Disconnected;
        result
    }

    async fn connect(&mut self) -> Result<()> {
        self.state = RelayState::Connecting;
        info!(
            "Connecting to MQTT broker at {}:{}",
            self.mqtt.host, self.mqtt.port
        );

        loop {
            match self.eventloop.poll().await {
                Ok(Event::Incoming(Packet::ConnAck(ack))) => {
                    if ack.code != ConnectReturnCode::Success {
                        self.state = RelayState::Disconnected;
                        return Err(RelayError::Connection {
                            message: format!("broker refused connection: {:?}", ack.code),
                            source: None,
                        });
                    }
                    info!("Connected with result code {:?}", ack.code);
                    return Ok(());
                }
                Ok(event) => debug!("Event before CONNACK: {:?}", event),
                Err(e) => {
                    self.state = RelayState::Disconnected;
                    return Err(RelayError::connection(
                        format!(
                            "cannot connect to {}:{}",
                            self.mqtt.host, self.mqtt.port
                        ),
                        e,
                    ));
                }
            }
        }
    }

    async fn subscribe(&mut self) -> Result<()> {
        self.client
            .subscribe(self.mqtt.topic.as_str(), QoS::AtMostOnce)
            .await
            .map_err(|e| RelayError::Subscribe {
                message: format!("cannot subscribe to {}", self.mqtt.topic),
                source: Some(Box::new(e)),
            })?;

        self.state = RelayState::Subscribed;
        info!("Subscribed to {}", self.mqtt.topic);
        Ok(())
    }

    async fn receive(&mut self) -> Result<()> {
        loop {
            let event = self.eventloop.poll().await.map_err(|e| {
                RelayError::connection(
                    format!(
                        "connection to {}:{} lost",
                        self.mqtt.host, self.mqtt.port
                    ),
                    e,
                )
            })?;

            match event {
                Event::Incoming(Packet::Publish(publish)) => {
                    self.state = RelayState::Receiving;
                    self.handler.handle(&InboundMessage::from(publish));
                }
                Event::Incoming(Packet::SubAck(ack)) => self.check_suback(&ack)?,
                _ => {}
            }
        }
    }

    fn check_suback(&self, ack: &SubAck) -> Result<()> {
        if ack
            .return_codes
            .iter()
            .any(|code| matches!(code, SubscribeReasonCode::Failure))
        {
            warn!("Broker rejected subscription to {}", self.mqtt.topic);
            return Err(RelayError::subscribe(format!(
                "broker rejected subscription to {}",
                self.mqtt.topic
            )));
        }
        debug!("Subscription to {} acknowledged", self.mqtt.topic);
        Ok(())
    }
}
