/*
 *  lib.rs
 *
 *  Festivo - every day has a face
 *  (c) 2023-26 Festivo authors
 *
 *  Calendar-driven watch-face presentation engine: picks the day's
 *  artwork and caption, decodes the user's birthday list, converts
 *  temperature readings, and owns the presentation settings lifecycle
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

pub mod birthdays;
pub mod coerce;
pub mod config;
pub mod controller;
pub mod events;
pub mod host;
pub mod settings;
pub mod store;
pub mod units;

pub use birthdays::{BirthdayRecord, BirthdayTable, CodecError};
pub use controller::FaceController;
pub use events::{BackgroundImage, EventResult, FaceDate, resolve};
pub use host::{ClockSource, OutboundPort, RenderSink, SettingsStore, SystemClock, WallTime};
pub use settings::PresentationSettings;
pub use units::{TempUnit, convert};
