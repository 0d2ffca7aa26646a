//! Page geometry for the 800x480 panel.
//!
//! All y values are text baselines unless the name says otherwise.

/// Panel width in pixels.
pub const DISPLAY_WIDTH_PX: u32 = 800;

/// Panel height in pixels.
pub const DISPLAY_HEIGHT_PX: u32 = 480;

// ----------------------------------------------------------------------------
// Columns
// ----------------------------------------------------------------------------

pub(super) const LEFT_X_PX: i32 = 20;
pub(super) const DIVIDER_X_PX: i32 = 260;
pub(super) const RIGHT_X_PX: i32 = 280;
pub(super) const RIGHT_INDENT_X_PX: i32 = 290;
pub(super) const RIGHT_WIDTH_PX: u32 = DISPLAY_WIDTH_PX - RIGHT_X_PX as u32;

// ----------------------------------------------------------------------------
// Left column
// ----------------------------------------------------------------------------

pub(super) const DATE_Y_PX: i32 = 44;

pub(super) const BATTERY_X_PX: i32 = 196;
pub(super) const BATTERY_Y_PX: i32 = 26;
pub(super) const BATTERY_WIDTH_PX: u32 = 40;
pub(super) const BATTERY_HEIGHT_PX: u32 = 18;
pub(super) const BATTERY_NUB_WIDTH_PX: u32 = 3;
pub(super) const BATTERY_NUB_HEIGHT_PX: u32 = 8;
pub(super) const BATTERY_LABEL_Y_PX: i32 = 60;

pub(super) const TEMPERATURE_Y_PX: i32 = 104;
pub(super) const ICON_X_PX: i32 = 150;
pub(super) const ICON_Y_PX: i32 = 68;
pub(super) const HUMIDITY_Y_PX: i32 = 144;
pub(super) const WIND_Y_PX: i32 = 164;

pub(super) const INDOOR_HEADING_Y_PX: i32 = 204;
pub(super) const INDOOR_FIRST_ROW_Y_PX: i32 = 226;

pub(super) const HEATER_HEADING_Y_PX: i32 = 300;
pub(super) const HEATER_FIRST_ROW_Y_PX: i32 = 322;
pub(super) const HEATER_MAX_ROOMS: usize = 6;
pub(super) const HEATER_ROOM_CHARS: usize = 14;
pub(super) const HEATER_MARKER_X_PX: i32 = 232;
pub(super) const HEATER_MARKER_SIZE_PX: u32 = 10;

/// Spacing of body-font rows in the left column.
pub(super) const LEFT_ROW_STEP_PX: i32 = 20;

// ----------------------------------------------------------------------------
// Right column (calendar)
// ----------------------------------------------------------------------------

pub(super) const CALENDAR_TOP_Y_PX: i32 = 40;
/// Lowest baseline that still clears the footer band.
pub(super) const CALENDAR_BOTTOM_Y_PX: i32 = 451;
pub(super) const UNAVAILABLE_Y_PX: i32 = 60;

pub(super) const DAY_NAME_STEP_PX: i32 = 30;
pub(super) const DAY_HIGHLIGHT_ASCENT_PX: i32 = 22;
pub(super) const DAY_HIGHLIGHT_HEIGHT_PX: u32 = 28;
pub(super) const DAY_HIGHLIGHT_INSET_PX: i32 = 4;

pub(super) const DETAIL_STEP_PX: i32 = 20;
pub(super) const SECTION_HEADER_STEP_PX: i32 = 18;
pub(super) const EVENT_STEP_PX: i32 = 16;
pub(super) const LESSON_HEADER_STEP_PX: i32 = 16;
pub(super) const LESSON_STEP_PX: i32 = 14;
pub(super) const DAY_GAP_PX: i32 = 18;

/// Left edges of the two lesson columns.
pub(super) const LESSON_COLUMNS_X_PX: [i32; 2] = [290, 490];
/// Characters a lesson may use before running into the next column.
pub(super) const LESSON_CHARS: usize = 32;

// ----------------------------------------------------------------------------
// Footer
// ----------------------------------------------------------------------------

pub(super) const FOOTER_Y_PX: i32 = 455;
pub(super) const FOOTER_HEIGHT_PX: u32 = 25;
pub(super) const FOOTER_TEXT_X_PX: i32 = 10;
pub(super) const FOOTER_TEXT_Y_PX: i32 = 473;
