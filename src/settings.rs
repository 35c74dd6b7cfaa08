use log::warn;

use crate::birthdays::BirthdayTable;
use crate::host::SettingsStore;
use crate::units::TempUnit;

/// Symbolic setting keys, shared by the inbound channel and the store.
/// The names follow the phone-side configuration page.
pub mod keys {
    pub const TEMPERATURE: &str = "temperature";
    pub const CLOCK_24H: &str = "twentyFourHourFormat";
    pub const BATTERY: &str = "batteryDisplayOnOff";
    pub const TEMP_UNIT: &str = "temperatureFormat";
    pub const BIRTHDAYS: &str = "birthdayList";
    /// Byte length of the persisted birthday payload, stored alongside it.
    pub const BIRTHDAYS_LEN: &str = "birthdayListLen";
    pub const INVERTED: &str = "invertColors";
}

/// Process-wide presentation settings. Exclusively owned by the
/// controller; every other component reads a snapshot passed in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PresentationSettings {
    /// false = 12-hour clock (first-run default).
    pub clock_24h: bool,
    pub battery_visible: bool,
    pub inverted: bool,
    pub temp_unit: TempUnit,
    /// Last raw reading as received, whole Fahrenheit degrees. `None`
    /// until the first reading arrives; the face shows a placeholder.
    /// Session state, never persisted.
    pub last_temp_raw: Option<i32>,
    pub birthdays: BirthdayTable,
}

impl PresentationSettings {
    /// Read every persisted field, leaving the default where the store has
    /// nothing. A bad persisted birthday payload is ignored, not fatal.
    pub fn load_from(store: &impl SettingsStore) -> Self {
        let mut s = Self::default();
        if let Some(v) = store.read_bool(keys::CLOCK_24H) {
            s.clock_24h = v;
        }
        if let Some(v) = store.read_bool(keys::BATTERY) {
            s.battery_visible = v;
        }
        if let Some(v) = store.read_bool(keys::INVERTED) {
            s.inverted = v;
        }
        if let Some(label) = store.read_string(keys::TEMP_UNIT) {
            s.temp_unit = TempUnit::from_label(&label);
        }
        if let Some(raw) = store.read_string(keys::BIRTHDAYS) {
            if let Some(len) = store.read_int(keys::BIRTHDAYS_LEN) {
                if len != raw.len() as i64 {
                    warn!(
                        "persisted birthday list length {} does not match its {}-byte payload",
                        len,
                        raw.len()
                    );
                }
            }
            match BirthdayTable::parse(&raw) {
                Ok(table) => s.birthdays = table,
                Err(e) => warn!("persisted birthday list ignored: {}", e),
            }
        }
        s
    }
}
