/*
 *  main.rs
 *
 *  Festivo - every day has a face
 *  (c) 2023-26 Festivo authors
 *
 *  Console host for the presentation engine: system clock, JSON file
 *  store, stdin setting batches, line-oriented face rendering
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

use anyhow::Result;
use env_logger::Env;
use log::{error, info, warn};
use serde_json::Value;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

use festivo::config;
use festivo::controller::FaceController;
use festivo::events::BackgroundImage;
use festivo::host::{OutboundPort, RenderSink, SystemClock};
use festivo::store::FileStore;

type Face = FaceController<SystemClock, FileStore, LogOutbound, ConsoleSink>;

/// Stand-in for the phone transport. The probe is logged; a reading has
/// to come back as a `temperature` pair on stdin.
struct LogOutbound;

impl OutboundPort for LogOutbound {
    fn request_temperature(&mut self) {
        info!("outbox: temperature probe sent");
    }
}

/// Console art bound to each background selector.
const ART: &[(BackgroundImage, &str)] = &[
    (BackgroundImage::Sunday, "(sunday)"),
    (BackgroundImage::Monday, "(monday)"),
    (BackgroundImage::Tuesday, "(tuesday)"),
    (BackgroundImage::Wednesday, "(camel)"),
    (BackgroundImage::Thursday, "(thursday)"),
    (BackgroundImage::Friday, "(friday)"),
    (BackgroundImage::Saturday, "(saturday)"),
    (BackgroundImage::Birthday, "(cake)"),
    (BackgroundImage::NewYear, "(fireworks)"),
    (BackgroundImage::Valentine, "(hearts)"),
    (BackgroundImage::StPatrick, "(clover)"),
    (BackgroundImage::Spring, "(blossom)"),
    (BackgroundImage::AprilFools, "(jester)"),
    (BackgroundImage::CincoDeMayo, "(pinata)"),
    (BackgroundImage::Summer, "(sun)"),
    (BackgroundImage::IndependenceDay, "(flag)"),
    (BackgroundImage::Fall, "(leaves)"),
    (BackgroundImage::HalloweenSoon, "(cobwebs)"),
    (BackgroundImage::Halloween, "(pumpkin)"),
    (BackgroundImage::Rabbit, "(rabbit)"),
    (BackgroundImage::Turkey, "(turkey)"),
    (BackgroundImage::Winter, "(snow)"),
    (BackgroundImage::Christmas, "(tree)"),
];

/// Line-oriented face. A selector with no art logs the gap and keeps the
/// previous background on screen.
#[derive(Default)]
struct ConsoleSink {
    art: Option<&'static str>,
    caption: Option<String>,
    time: String,
    date: String,
    temperature: String,
    battery_visible: bool,
    inverted: bool,
}

impl ConsoleSink {
    fn art_for(image: BackgroundImage) -> Option<&'static str> {
        ART.iter().find(|(i, _)| *i == image).map(|(_, a)| *a)
    }

    fn redraw(&self) {
        let battery = if self.battery_visible { " |####|" } else { "" };
        let scheme = if self.inverted { "inverted" } else { "normal" };
        println!(
            "{:10} {:24} {:>6}  {:12} {:>7}{}  [{}]",
            self.art.unwrap_or("( )"),
            self.caption.as_deref().unwrap_or(""),
            self.time,
            self.date,
            self.temperature,
            battery,
            scheme
        );
    }
}

impl RenderSink for ConsoleSink {
    fn set_background(&mut self, image: BackgroundImage) {
        match Self::art_for(image) {
            Some(art) => self.art = Some(art),
            // Keep whatever is on screen; a hole in the art set is not
            // fatal to the update.
            None => error!("no artwork bound to {:?}", image),
        }
    }
    fn set_event_caption(&mut self, caption: Option<&str>) {
        self.caption = caption.map(str::to_owned);
        self.redraw();
    }
    fn set_time(&mut self, text: &str) {
        self.time = text.to_owned();
        self.redraw();
    }
    fn set_date(&mut self, text: &str) {
        self.date = text.to_owned();
    }
    fn set_temperature(&mut self, text: &str) {
        self.temperature = text.to_owned();
        self.redraw();
    }
    fn set_battery_visible(&mut self, visible: bool) {
        self.battery_visible = visible;
    }
    fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
    }
}

/// One stdin line = one inbound message batch: a JSON object whose pairs
/// are applied in arrival order.
fn apply_line(face: &mut Face, line: &str) {
    match serde_json::from_str::<serde_json::Map<String, Value>>(line) {
        Ok(map) => {
            let pairs: Vec<(String, Value)> = map.into_iter().collect();
            face.apply_batch(&pairs);
        }
        Err(e) => warn!("inbound batch dropped: {}", e),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cfg = config::load()?;

    env_logger::Builder::from_env(
        Env::default().default_filter_or(cfg.log_level.as_deref().unwrap_or("info")),
    )
    .init();

    let store_path = cfg.store_path.clone().unwrap_or_else(FileStore::default_path);
    info!("settings store: {}", store_path.display());

    let mut face = Face::new(
        SystemClock,
        FileStore::open(&store_path),
        LogOutbound,
        ConsoleSink::default(),
    );
    face.load();

    let tick = Duration::from_secs(cfg.tick_seconds.unwrap_or(60));
    let mut ticker = tokio::time::interval(tick);
    ticker.tick().await; // first tick fires immediately; load() already painted

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    info!("festivo running; paste JSON setting batches on stdin, ctrl-c to quit");
    loop {
        tokio::select! {
            _ = ticker.tick() => face.tick(),
            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(text)) => {
                    if !text.trim().is_empty() {
                        apply_line(&mut face, &text);
                    }
                }
                Ok(None) => {
                    info!("stdin closed; running on ticks only");
                    stdin_open = false;
                }
                Err(e) => {
                    error!("stdin read error: {}", e);
                    stdin_open = false;
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}
