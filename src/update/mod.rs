mod cloud;
mod mqtt;
mod setup;
mod ui;
mod wifi;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Setup(event) => setup::handle(event, model),
        Event::Wifi(event) => wifi::handle(event, model),
        Event::Mqtt(event) => mqtt::handle(event, model),
        Event::Cloud(event) => cloud::handle(event, model),
        Event::Ui(event) => ui::handle(event, model),
    }
}
