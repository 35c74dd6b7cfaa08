/*
 *  host.rs
 *
 *  Festivo - every day has a face
 *  (c) 2023-26 Festivo authors
 *
 *  Collaborator seams the engine talks to: clock, settings store,
 *  outbound transport, render sink
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

use chrono::{Datelike, Local, Timelike};

use crate::events::BackgroundImage;

/// Wall-clock snapshot handed to the engine once per render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallTime {
    /// 1-12
    pub month: u32,
    /// 1-31
    pub day: u32,
    /// 0-6, 0 = Sunday
    pub weekday: u32,
    /// 0-23
    pub hour: u32,
    /// 0-59
    pub minute: u32,
}

/// Source of the current wall-clock time.
pub trait ClockSource {
    fn now(&self) -> WallTime;
}

/// Host key-value persistence. Writes are fire-and-forget; implementations
/// log their own failures rather than surfacing them to the engine.
pub trait SettingsStore {
    fn has(&self, key: &str) -> bool;
    fn read_bool(&self, key: &str) -> Option<bool>;
    fn read_int(&self, key: &str) -> Option<i64>;
    fn read_string(&self, key: &str) -> Option<String>;
    fn write_bool(&mut self, key: &str, value: bool);
    fn write_int(&mut self, key: &str, value: i64);
    fn write_string(&mut self, key: &str, value: &str);
}

/// Outbound transport back to the phone side.
pub trait OutboundPort {
    /// Ask for a fresh temperature reading. Zero payload; the value comes
    /// back later over the inbound channel.
    fn request_temperature(&mut self);
}

/// Whatever actually draws the face. An implementation with no artwork for
/// a selector logs the gap and keeps its fallback background; it never
/// fails the rest of the update.
pub trait RenderSink {
    fn set_background(&mut self, image: BackgroundImage);
    /// `None` clears the event line.
    fn set_event_caption(&mut self, caption: Option<&str>);
    fn set_time(&mut self, text: &str);
    fn set_date(&mut self, text: &str);
    fn set_temperature(&mut self, text: &str);
    fn set_battery_visible(&mut self, visible: bool);
    fn set_inverted(&mut self, inverted: bool);
}

/// Production clock on the host's local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> WallTime {
        let now = Local::now();
        WallTime {
            month: now.month(),
            day: now.day(),
            weekday: now.weekday().num_days_from_sunday(),
            hour: now.hour(),
            minute: now.minute(),
        }
    }
}
