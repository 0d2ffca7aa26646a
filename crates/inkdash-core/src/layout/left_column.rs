//! Left column: date, battery gauge, outdoor weather, indoor air, heaters.

use alloc::format;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::LayoutConfig;
use super::constants::*;
use crate::battery::BatteryReading;
use crate::draw::{Canvas, FontId, INK, Icon};
use crate::feeds::{AirQualitySnapshot, HeaterStatus, WeatherSnapshot};
use crate::text::truncate;
use crate::time::LocalTime;

pub(super) const DATE_UNAVAILABLE: &str = "Dato ikke tilgjengelig";
pub(super) const LOW_BATTERY_LABEL: &str = "LAV";

/// Characters of body text that fit between the left margin and the divider.
const BODY_CHARS: usize = 32;

pub(super) fn draw_header(
    canvas: &mut Canvas,
    now: Option<LocalTime>,
    battery: Option<BatteryReading>,
    config: &LayoutConfig,
) {
    match now {
        Some(now) => {
            canvas.set_font(FontId::Title);
            canvas.text_at(LEFT_X_PX, DATE_Y_PX, &now.date_label());
        }
        None => {
            canvas.set_font(FontId::Body);
            canvas.text_at(LEFT_X_PX, DATE_Y_PX, DATE_UNAVAILABLE);
        }
    }

    if let Some(reading) = battery {
        draw_battery(canvas, reading, config.low_battery_voltage);
    }
}

fn draw_battery(canvas: &mut Canvas, reading: BatteryReading, low_voltage: f32) {
    let body = Rectangle::new(
        Point::new(BATTERY_X_PX, BATTERY_Y_PX),
        Size::new(BATTERY_WIDTH_PX, BATTERY_HEIGHT_PX),
    );
    let nub = Rectangle::new(
        Point::new(
            BATTERY_X_PX + BATTERY_WIDTH_PX as i32,
            BATTERY_Y_PX + (BATTERY_HEIGHT_PX - BATTERY_NUB_HEIGHT_PX) as i32 / 2,
        ),
        Size::new(BATTERY_NUB_WIDTH_PX, BATTERY_NUB_HEIGHT_PX),
    );
    canvas.rect(body, INK);
    canvas.fill_rect(nub, INK);

    canvas.set_font(FontId::Small);
    if reading.is_low(low_voltage) {
        canvas.text_at(BATTERY_X_PX, BATTERY_LABEL_Y_PX, LOW_BATTERY_LABEL);
        return;
    }

    let inner_width = (BATTERY_WIDTH_PX - 4) * u32::from(reading.percent) / 100;
    if inner_width > 0 {
        canvas.fill_rect(
            Rectangle::new(
                Point::new(BATTERY_X_PX + 2, BATTERY_Y_PX + 2),
                Size::new(inner_width, BATTERY_HEIGHT_PX - 4),
            ),
            INK,
        );
    }
    canvas.text_at(
        BATTERY_X_PX,
        BATTERY_LABEL_Y_PX,
        &format!("{}%", reading.percent),
    );
}

pub(super) fn draw_weather(canvas: &mut Canvas, weather: &WeatherSnapshot) {
    canvas.set_font(FontId::Title);
    canvas.text_at(
        LEFT_X_PX,
        TEMPERATURE_Y_PX,
        &format!("{:.1} C", weather.air_temperature_c),
    );

    canvas.bitmap(
        Icon::for_symbol(&weather.symbol_code),
        Point::new(ICON_X_PX, ICON_Y_PX),
    );

    canvas.set_font(FontId::Body);
    canvas.text_at(
        LEFT_X_PX,
        HUMIDITY_Y_PX,
        &format!("Hum: {:.0}%", weather.relative_humidity_pct),
    );
    canvas.text_at(
        LEFT_X_PX,
        WIND_Y_PX,
        &format!("Wind: {:.1} m/s", weather.wind_speed_ms),
    );
}

pub(super) fn draw_air_quality(canvas: &mut Canvas, air: &AirQualitySnapshot) {
    canvas.set_font(FontId::Heading);
    canvas.text_at(LEFT_X_PX, INDOOR_HEADING_Y_PX, "Inne");

    canvas.set_font(FontId::Body);
    let mut y = INDOOR_FIRST_ROW_Y_PX;
    canvas.text_at(LEFT_X_PX, y, &format!("Temp: {:.1} C", air.indoor_temp_c));
    y += LEFT_ROW_STEP_PX;
    canvas.text_at(LEFT_X_PX, y, &format!("Hum: {:.0}%", air.indoor_humidity_pct));

    if air.radon_notable() {
        y += LEFT_ROW_STEP_PX;
        let line = format!("Radon: {}", air.radon_level);
        canvas.text_at(LEFT_X_PX, y, &truncate(&line, BODY_CHARS));
    }
}

pub(super) fn draw_heaters(canvas: &mut Canvas, heaters: &HeaterStatus) {
    canvas.set_font(FontId::Heading);
    canvas.text_at(LEFT_X_PX, HEATER_HEADING_Y_PX, "Ovner");

    canvas.set_font(FontId::Body);
    let rows = heaters.rooms.iter().take(HEATER_MAX_ROOMS);
    for (i, room) in rows.enumerate() {
        let y = HEATER_FIRST_ROW_Y_PX + i as i32 * LEFT_ROW_STEP_PX;
        let name = truncate(&room.name, HEATER_ROOM_CHARS);
        canvas.text_at(
            LEFT_X_PX,
            y,
            &format!("{}: {:.1} C", name, room.device.ambient_temp_c),
        );

        // Filled square while heating, outline while idle.
        let marker = Rectangle::new(
            Point::new(HEATER_MARKER_X_PX, y - HEATER_MARKER_SIZE_PX as i32),
            Size::new(HEATER_MARKER_SIZE_PX, HEATER_MARKER_SIZE_PX),
        );
        if room.device.power_on {
            canvas.fill_rect(marker, INK);
        } else {
            canvas.rect(marker, INK);
        }
    }
}
