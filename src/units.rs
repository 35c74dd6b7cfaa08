// src/units.rs
//
// Temperature unit handling for the weather line. Readings arrive from the
// phone side as whole Fahrenheit degrees and are converted on display only.

/// Display unit for the temperature reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TempUnit {
    #[default]
    Fahrenheit,
    Celsius,
    Kelvin,
}

impl TempUnit {
    /// Parse a configuration label. Unrecognized labels select Kelvin.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "f" | "fahrenheit" | "imperial" => TempUnit::Fahrenheit,
            "c" | "celsius" | "metric" => TempUnit::Celsius,
            _ => TempUnit::Kelvin,
        }
    }

    /// Canonical label, used for persistence round-trips.
    pub fn label(&self) -> &'static str {
        match self {
            TempUnit::Fahrenheit => "Fahrenheit",
            TempUnit::Celsius => "Celsius",
            TempUnit::Kelvin => "Kelvin",
        }
    }
}

/// Convert a raw Fahrenheit reading for display in `unit`, returning the
/// value and the suffix to print after it.
///
/// Kelvin truncates the offset sum to an integer before the 5/9 scale; the
/// displayed digits depend on that exact order.
pub fn convert(raw: i32, unit: TempUnit) -> (i32, &'static str) {
    match unit {
        TempUnit::Fahrenheit => (raw, "°F"),
        TempUnit::Celsius => ((raw - 32) * 5 / 9, "°C"),
        TempUnit::Kelvin => (((raw as f64 + 459.67) as i32) * 5 / 9, " K"),
    }
}
