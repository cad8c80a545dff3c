#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Hardware light actuation seam for Cyber City adapters.
//!
//! The original installation drove one relay-backed city light per district.
//! Engine code never talks to hardware directly; it emits
//! [`Event::LightChanged`] values and an adapter mirrors them through a
//! [`LightActuator`]. Actuator failures are logged and swallowed so a flaky
//! relay can never fail an action resolution.

use anyhow::Result;
use cyber_city_core::{DistrictId, Event, LightStatus};

/// Capability for switching one physical district light.
pub trait LightActuator {
    /// Switches the district's light on or off.
    fn set_district_light(&mut self, district: DistrictId, on: bool) -> Result<()>;
}

/// Actuator used when no hardware is attached.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopLights;

impl LightActuator for NoopLights {
    fn set_district_light(&mut self, _district: DistrictId, _on: bool) -> Result<()> {
        Ok(())
    }
}

/// Test double that records every switch request in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingLights {
    switches: Vec<(DistrictId, bool)>,
}

impl RecordingLights {
    /// Creates a recorder with an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch requests observed so far, oldest first.
    #[must_use]
    pub fn switches(&self) -> &[(DistrictId, bool)] {
        &self.switches
    }
}

impl LightActuator for RecordingLights {
    fn set_district_light(&mut self, district: DistrictId, on: bool) -> Result<()> {
        self.switches.push((district, on));
        Ok(())
    }
}

/// Mirrors light-affecting events into the actuator, best effort.
///
/// `MatchReset` relights the whole city, matching the original boot
/// behaviour of driving every relay high.
pub fn sync_lights(actuator: &mut dyn LightActuator, events: &[Event]) {
    for event in events {
        match event {
            Event::LightChanged { district, status } => {
                switch(actuator, *district, *status == LightStatus::On);
            }
            Event::MatchReset => relight_all(actuator),
            _ => {}
        }
    }
}

/// Turns every district light on, e.g. at match start.
pub fn relight_all(actuator: &mut dyn LightActuator) {
    for district in DistrictId::ALL {
        switch(actuator, district, true);
    }
}

fn switch(actuator: &mut dyn LightActuator, district: DistrictId, on: bool) {
    if let Err(error) = actuator.set_district_light(district, on) {
        log::warn!("light actuation failed for {district}: {error:#}");
    }
}
