//! Bakes the device configuration into the firmware image.
//!
//! Values come from the process environment or a `.env` file next to this
//! crate. WiFi credentials are required. Other keys are only forwarded when set,
//! so the firmware can tell an unset key (core default) from an empty one.

const REQUIRED: &[&str] = &["WIFI_SSID", "WIFI_PASSWORD"];

const OPTIONAL: &[&str] = &[
    "WEATHER_URL",
    "CALENDAR_URL",
    "AIR_QUALITY_URL",
    "HEATER_URL",
    "WAKE_TIMES",
    "NTP_SERVER",
];

fn main() {
    println!("cargo:rerun-if-changed=.env");
    if let Err(err) = dotenvy::dotenv() {
        println!("cargo:warning=no .env loaded ({err}), using the build environment");
    }

    for key in REQUIRED {
        println!("cargo:rerun-if-env-changed={key}");
        match std::env::var(key) {
            Ok(value) => println!("cargo:rustc-env={key}={value}"),
            Err(_) => panic!("{key} must be set in .env or the environment"),
        }
    }

    for key in OPTIONAL {
        println!("cargo:rerun-if-env-changed={key}");
        if let Ok(value) = std::env::var(key) {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}
