/*
 *  tests/face_integration.rs
 *
 *  End-to-end engine tests: settings flow in over the inbound channel,
 *  persist through the store, and come out of the render sink
 *
 *  Festivo - every day has a face
 *  (c) 2023-26 Festivo authors
 */

use festivo::controller::FaceController;
use festivo::events::BackgroundImage;
use festivo::host::{ClockSource, OutboundPort, RenderSink, WallTime};
use festivo::settings::keys;
use festivo::store::{FileStore, MemStore};
use serde_json::{Value, json};

#[derive(Clone, Copy)]
struct TestClock(WallTime);

impl ClockSource for TestClock {
    fn now(&self) -> WallTime {
        self.0
    }
}

struct NullOutbound;

impl OutboundPort for NullOutbound {
    fn request_temperature(&mut self) {}
}

#[derive(Default)]
struct Panel {
    background: Option<BackgroundImage>,
    caption: Option<String>,
    time: String,
    temperature: String,
    battery_visible: bool,
    inverted: bool,
}

impl RenderSink for Panel {
    fn set_background(&mut self, image: BackgroundImage) {
        self.background = Some(image);
    }
    fn set_event_caption(&mut self, caption: Option<&str>) {
        self.caption = caption.map(str::to_owned);
    }
    fn set_time(&mut self, text: &str) {
        self.time = text.to_owned();
    }
    fn set_date(&mut self, _text: &str) {}
    fn set_temperature(&mut self, text: &str) {
        self.temperature = text.to_owned();
    }
    fn set_battery_visible(&mut self, visible: bool) {
        self.battery_visible = visible;
    }
    fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
    }
}

fn wall(month: u32, day: u32, weekday: u32, hour: u32, minute: u32) -> WallTime {
    WallTime { month, day, weekday, hour, minute }
}

fn batch(raw: &[(&str, Value)]) -> Vec<(String, Value)> {
    raw.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

#[test]
fn christmas_face_end_to_end() {
    let mut face = FaceController::new(
        TestClock(wall(12, 25, 4, 8, 0)),
        MemStore::new(),
        NullOutbound,
        Panel::default(),
    );
    face.load();
    assert_eq!(face.sink().background, Some(BackgroundImage::Christmas));
    assert_eq!(face.sink().caption.as_deref(), Some("Merry Christmas!"));

    let mut eve = FaceController::new(
        TestClock(wall(12, 24, 3, 8, 0)),
        MemStore::new(),
        NullOutbound,
        Panel::default(),
    );
    eve.load();
    assert_eq!(eve.sink().background, Some(BackgroundImage::Christmas));
    assert_eq!(eve.sink().caption, None);
}

#[test]
fn birthday_list_from_the_channel_beats_the_holiday() {
    let mut face = FaceController::new(
        TestClock(wall(3, 17, 2, 8, 0)),
        MemStore::new(),
        NullOutbound,
        Panel::default(),
    );
    face.load();
    assert_eq!(face.sink().background, Some(BackgroundImage::StPatrick));

    face.apply_batch(&batch(&[(keys::BIRTHDAYS, json!("Robert,10-09,Pat,03-17"))]));
    assert_eq!(face.sink().background, Some(BackgroundImage::Birthday));
    assert_eq!(face.sink().caption.as_deref(), Some("Pat's Birthday!"));
}

#[test]
fn temperature_pipeline_converts_on_display() {
    let mut face = FaceController::new(
        TestClock(wall(8, 7, 5, 8, 0)),
        MemStore::new(),
        NullOutbound,
        Panel::default(),
    );
    face.load();
    assert_eq!(face.sink().temperature, "...");

    face.apply_batch(&batch(&[(keys::TEMPERATURE, json!(100))]));
    assert_eq!(face.sink().temperature, "100°F");

    face.apply_batch(&batch(&[(keys::TEMP_UNIT, json!("Celsius"))]));
    assert_eq!(face.sink().temperature, "37°C");

    // anything unrecognized falls through to Kelvin
    face.apply_batch(&batch(&[(keys::TEMP_UNIT, json!("Rankine"))]));
    assert_eq!(face.sink().temperature, "310 K");
}

#[test]
fn settings_survive_a_restart() {
    let path = std::env::temp_dir().join(format!("festivo-it-{}.json", std::process::id()));
    let _ = std::fs::remove_file(&path);

    {
        let mut face = FaceController::new(
            TestClock(wall(8, 7, 5, 13, 0)),
            FileStore::open(&path),
            NullOutbound,
            Panel::default(),
        );
        face.load();
        face.apply_batch(&batch(&[
            (keys::CLOCK_24H, json!(true)),
            (keys::BATTERY, json!(true)),
            (keys::INVERTED, json!(true)),
            (keys::TEMP_UNIT, json!("Celsius")),
            (keys::BIRTHDAYS, json!("Sam,08-07")),
        ]));
        assert_eq!(face.sink().time, "13:00");
    }

    let mut reborn = FaceController::new(
        TestClock(wall(8, 7, 5, 13, 0)),
        FileStore::open(&path),
        NullOutbound,
        Panel::default(),
    );
    reborn.load();
    assert_eq!(reborn.sink().time, "13:00");
    assert!(reborn.sink().battery_visible);
    assert!(reborn.sink().inverted);
    assert_eq!(reborn.sink().background, Some(BackgroundImage::Birthday));
    assert_eq!(reborn.sink().caption.as_deref(), Some("Sam's Birthday!"));
    // the raw reading is session state, so the placeholder is back
    assert_eq!(reborn.sink().temperature, "...");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn empty_birthday_payload_clears_the_list() {
    let mut face = FaceController::new(
        TestClock(wall(3, 17, 2, 8, 0)),
        MemStore::new(),
        NullOutbound,
        Panel::default(),
    );
    face.load();
    face.apply_batch(&batch(&[(keys::BIRTHDAYS, json!("Pat,03-17"))]));
    assert_eq!(face.sink().background, Some(BackgroundImage::Birthday));

    face.apply_batch(&batch(&[(keys::BIRTHDAYS, json!(""))]));
    assert_eq!(face.sink().background, Some(BackgroundImage::StPatrick));
    assert_eq!(face.sink().caption.as_deref(), Some("Happy St. Patrick's Day!"));
}
