/*
 *  controller.rs
 *
 *  Festivo - every day has a face
 *  (c) 2023-26 Festivo authors
 *
 *  Top-level presentation controller: owns the settings, applies inbound
 *  setting batches in arrival order, and keeps the render sink current
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use log::{debug, info, warn};
use serde_json::Value;

use crate::birthdays::BirthdayTable;
use crate::coerce::{value_as_bool, value_as_int};
use crate::events::{self, FaceDate};
use crate::host::{ClockSource, OutboundPort, RenderSink, SettingsStore, WallTime};
use crate::settings::{PresentationSettings, keys};
use crate::units::{TempUnit, convert};

const WEEKDAY_ABBR: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Drives the face: one controller per process, single-threaded, every
/// entry point runs to completion before the next is dispatched.
pub struct FaceController<C, S, O, R> {
    clock: C,
    store: S,
    outbound: O,
    sink: R,
    settings: PresentationSettings,
    /// (month, day) the current background was resolved for.
    shown_day: Option<(u32, u32)>,
}

impl<C, S, O, R> FaceController<C, S, O, R>
where
    C: ClockSource,
    S: SettingsStore,
    O: OutboundPort,
    R: RenderSink,
{
    pub fn new(clock: C, store: S, outbound: O, sink: R) -> Self {
        Self {
            clock,
            store,
            outbound,
            sink,
            settings: PresentationSettings::default(),
            shown_day: None,
        }
    }

    /// Restore persisted settings and paint the initial face.
    pub fn load(&mut self) {
        self.settings = PresentationSettings::load_from(&self.store);
        info!(
            "settings restored: 24h={} battery={} inverted={} unit={} birthdays={}",
            self.settings.clock_24h,
            self.settings.battery_visible,
            self.settings.inverted,
            self.settings.temp_unit.label(),
            self.settings.birthdays.len()
        );
        let now = self.clock.now();
        self.sink.set_inverted(self.settings.inverted);
        self.sink.set_battery_visible(self.settings.battery_visible);
        self.refresh_time(&now);
        self.refresh_event(&now);
        self.refresh_temperature();
    }

    /// Minute tick. Redraws the clock line, requests a temperature probe
    /// on the half hour, and re-resolves the event when the day rolls over.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        self.refresh_time(&now);
        if now.minute % 30 == 0 {
            debug!("requesting temperature refresh");
            self.outbound.request_temperature();
        }
        if self.shown_day != Some((now.month, now.day)) {
            self.refresh_event(&now);
        }
    }

    /// Apply one inbound message batch, field by field in arrival order.
    /// A later field may depend on an earlier one already being applied.
    pub fn apply_batch(&mut self, pairs: &[(String, Value)]) {
        for (key, value) in pairs {
            self.apply_setting(key, value);
        }
    }

    fn apply_setting(&mut self, key: &str, value: &Value) {
        match key {
            keys::TEMPERATURE => match value_as_int(value) {
                Some(raw) => {
                    self.settings.last_temp_raw = Some(raw as i32);
                    self.refresh_temperature();
                }
                None => warn!("temperature payload {:?} is not numeric", value),
            },
            keys::CLOCK_24H => match value_as_bool(value) {
                Some(v) => {
                    self.settings.clock_24h = v;
                    self.store.write_bool(keys::CLOCK_24H, v);
                    let now = self.clock.now();
                    self.refresh_time(&now);
                }
                None => warn!("clock format payload {:?} is not a flag", value),
            },
            keys::BATTERY => match value_as_bool(value) {
                Some(v) => {
                    self.settings.battery_visible = v;
                    self.store.write_bool(keys::BATTERY, v);
                    self.sink.set_battery_visible(v);
                }
                None => warn!("battery payload {:?} is not a flag", value),
            },
            keys::TEMP_UNIT => match value.as_str() {
                Some(label) => {
                    self.settings.temp_unit = TempUnit::from_label(label);
                    self.store.write_string(keys::TEMP_UNIT, label);
                    self.refresh_temperature();
                }
                None => warn!("temperature format payload {:?} is not text", value),
            },
            keys::BIRTHDAYS => match value.as_str() {
                Some(list) => match BirthdayTable::parse(list) {
                    Ok(table) => {
                        info!("birthday list replaced: {} entries", table.len());
                        self.settings.birthdays = table;
                        self.store.write_string(keys::BIRTHDAYS, list);
                        self.store.write_int(keys::BIRTHDAYS_LEN, list.len() as i64);
                        let now = self.clock.now();
                        self.refresh_event(&now);
                    }
                    // The previous table and its persisted copy stay as
                    // they were.
                    Err(e) => warn!("birthday list rejected: {}", e),
                },
                None => warn!("birthday list payload {:?} is not text", value),
            },
            keys::INVERTED => match value_as_bool(value) {
                Some(v) => {
                    self.settings.inverted = v;
                    self.store.write_bool(keys::INVERTED, v);
                    self.sink.set_inverted(v);
                    // Scheme change redraws the whole face.
                    let now = self.clock.now();
                    self.refresh_time(&now);
                    self.refresh_event(&now);
                    self.refresh_temperature();
                }
                None => warn!("invert payload {:?} is not a flag", value),
            },
            _ => warn!("setting key {:?} not recognized", key),
        }
    }

    fn refresh_time(&mut self, now: &WallTime) {
        self.sink.set_time(&format_time(now, self.settings.clock_24h));
        self.sink.set_date(&format_date(now));
    }

    fn refresh_event(&mut self, now: &WallTime) {
        let date = FaceDate {
            month: now.month,
            day: now.day,
            weekday: now.weekday,
        };
        let result = events::resolve(date, &self.settings.birthdays);
        debug!("resolved {:?} for {:02}-{:02}", result.image, date.month, date.day);
        self.sink.set_background(result.image);
        // A day without a caption wipes whatever the last event wrote.
        self.sink.set_event_caption(result.caption.as_deref());
        self.shown_day = Some((now.month, now.day));
    }

    fn refresh_temperature(&mut self) {
        let text = match self.settings.last_temp_raw {
            Some(raw) => {
                let (value, suffix) = convert(raw, self.settings.temp_unit);
                format!("{}{}", value, suffix)
            }
            // Nothing received yet.
            None => "...".to_string(),
        };
        self.sink.set_temperature(&text);
    }

    pub fn settings(&self) -> &PresentationSettings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn outbound(&self) -> &O {
        &self.outbound
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }
}

/// `H:MM` without a leading hour zero, 12- or 24-hour per the setting.
fn format_time(now: &WallTime, clock_24h: bool) -> String {
    if clock_24h {
        format!("{}:{:02}", now.hour, now.minute)
    } else {
        let hour = match now.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02}", hour, now.minute)
    }
}

/// `Sun, Aug 7` style date line.
fn format_date(now: &WallTime) -> String {
    let weekday = WEEKDAY_ABBR.get(now.weekday as usize).copied().unwrap_or("???");
    let month = now
        .month
        .checked_sub(1)
        .and_then(|m| MONTH_ABBR.get(m as usize))
        .copied()
        .unwrap_or("???");
    format!("{}, {} {}", weekday, month, now.day)
}
