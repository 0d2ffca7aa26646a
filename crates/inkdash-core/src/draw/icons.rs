//! 48x48 weather icons, 1 bit per pixel, MSB first, set bit = ink.

/// Bytes in one packed icon.
pub(super) const ICON_BYTES: usize = 48 * 48 / 8;

/// Sun disc with eight rays.
pub(super) const SUN: [u8; ICON_BYTES] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xc0, 0x00, 0x00,
    0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x01, 0xc0, 0x00, 0x00,
    0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x01, 0xc0, 0x00, 0x00,
    0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x00, 0x70, 0x01, 0xc0, 0x07, 0x00,
    0x00, 0x78, 0x01, 0xc0, 0x0f, 0x00, 0x00, 0x7c, 0x01, 0xc0, 0x1f, 0x00,
    0x00, 0x3e, 0x00, 0x00, 0x3e, 0x00, 0x00, 0x1f, 0x00, 0x00, 0x7c, 0x00,
    0x00, 0x0f, 0x00, 0x80, 0x78, 0x00, 0x00, 0x07, 0x0f, 0xf8, 0x70, 0x00,
    0x00, 0x00, 0x3f, 0xfe, 0x00, 0x00, 0x00, 0x00, 0x7f, 0xff, 0x00, 0x00,
    0x00, 0x00, 0xf8, 0x0f, 0x80, 0x00, 0x00, 0x00, 0xf0, 0x07, 0x80, 0x00,
    0x00, 0x01, 0xe0, 0x03, 0xc0, 0x00, 0x00, 0x01, 0xc0, 0x01, 0xc0, 0x00,
    0x00, 0x01, 0xc0, 0x01, 0xc0, 0x00, 0x1f, 0xf1, 0xc0, 0x01, 0xc7, 0xfc,
    0x1f, 0xf3, 0xc0, 0x01, 0xe7, 0xfc, 0x1f, 0xf1, 0xc0, 0x01, 0xc7, 0xfc,
    0x00, 0x01, 0xc0, 0x01, 0xc0, 0x00, 0x00, 0x01, 0xc0, 0x01, 0xc0, 0x00,
    0x00, 0x01, 0xe0, 0x03, 0xc0, 0x00, 0x00, 0x00, 0xf0, 0x07, 0x80, 0x00,
    0x00, 0x00, 0xf8, 0x0f, 0x80, 0x00, 0x00, 0x00, 0x7f, 0xff, 0x00, 0x00,
    0x00, 0x00, 0x3f, 0xfe, 0x00, 0x00, 0x00, 0x07, 0x0f, 0xf8, 0x70, 0x00,
    0x00, 0x0f, 0x00, 0x80, 0x78, 0x00, 0x00, 0x1f, 0x00, 0x00, 0x7c, 0x00,
    0x00, 0x3e, 0x00, 0x00, 0x3e, 0x00, 0x00, 0x7c, 0x01, 0xc0, 0x1f, 0x00,
    0x00, 0x78, 0x01, 0xc0, 0x0f, 0x00, 0x00, 0x70, 0x01, 0xc0, 0x07, 0x00,
    0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x01, 0xc0, 0x00, 0x00,
    0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x01, 0xc0, 0x00, 0x00,
    0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x01, 0xc0, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Cloud outline.
pub(super) const CLOUD: [u8; ICON_BYTES] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00,
    0x00, 0x00, 0x01, 0xff, 0x00, 0x00, 0x00, 0x00, 0x07, 0xef, 0xc0, 0x00,
    0x00, 0x00, 0x0e, 0x00, 0xe0, 0x00, 0x00, 0x00, 0x1c, 0x00, 0x70, 0x00,
    0x00, 0x00, 0x38, 0x00, 0x38, 0x00, 0x00, 0x00, 0x30, 0x00, 0x18, 0x00,
    0x00, 0x00, 0x60, 0x00, 0x0c, 0x00, 0x00, 0x00, 0xe0, 0x00, 0x0c, 0x00,
    0x00, 0x0f, 0xe0, 0x00, 0x0c, 0x00, 0x00, 0x1f, 0x60, 0x00, 0x0c, 0x00,
    0x00, 0x38, 0x00, 0x00, 0x06, 0x00, 0x00, 0x70, 0x00, 0x00, 0x0f, 0x00,
    0x00, 0xe0, 0x00, 0x00, 0x07, 0xc0, 0x00, 0xc0, 0x00, 0x00, 0x00, 0xe0,
    0x00, 0xc0, 0x00, 0x00, 0x00, 0x60, 0x00, 0xc0, 0x00, 0x00, 0x00, 0x30,
    0x01, 0x80, 0x00, 0x00, 0x00, 0x30, 0x00, 0xc0, 0x00, 0x00, 0x00, 0x30,
    0x00, 0xc0, 0x00, 0x00, 0x00, 0x18, 0x00, 0xc0, 0x00, 0x00, 0x00, 0x30,
    0x00, 0xe0, 0x00, 0x00, 0x00, 0x30, 0x00, 0x70, 0x00, 0x00, 0x00, 0x30,
    0x00, 0x30, 0x00, 0x00, 0x00, 0x60, 0x00, 0x30, 0x00, 0x00, 0x00, 0xe0,
    0x00, 0x30, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x3f, 0xff, 0xff, 0xff, 0xc0,
    0x00, 0x3f, 0xff, 0xff, 0xff, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Cloud with slanted rain streaks.
pub(super) const RAIN: [u8; ICON_BYTES] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00,
    0x00, 0x00, 0x01, 0xff, 0x00, 0x00, 0x00, 0x00, 0x07, 0xef, 0xc0, 0x00,
    0x00, 0x00, 0x0e, 0x00, 0xe0, 0x00, 0x00, 0x00, 0x1c, 0x00, 0x70, 0x00,
    0x00, 0x00, 0x38, 0x00, 0x38, 0x00, 0x00, 0x00, 0x30, 0x00, 0x18, 0x00,
    0x00, 0x00, 0x60, 0x00, 0x0c, 0x00, 0x00, 0x00, 0xe0, 0x00, 0x0c, 0x00,
    0x00, 0x0f, 0xe0, 0x00, 0x0c, 0x00, 0x00, 0x1f, 0x60, 0x00, 0x0c, 0x00,
    0x00, 0x38, 0x00, 0x00, 0x06, 0x00, 0x00, 0x70, 0x00, 0x00, 0x0f, 0x00,
    0x00, 0xe0, 0x00, 0x00, 0x07, 0xc0, 0x00, 0xc0, 0x00, 0x00, 0x00, 0xe0,
    0x00, 0xc0, 0x00, 0x00, 0x00, 0x60, 0x00, 0xc0, 0x00, 0x00, 0x00, 0x30,
    0x01, 0x80, 0x00, 0x00, 0x00, 0x30, 0x00, 0xc0, 0x00, 0x00, 0x00, 0x30,
    0x00, 0xc0, 0x00, 0x00, 0x00, 0x18, 0x00, 0xc0, 0x00, 0x00, 0x00, 0x30,
    0x00, 0xe0, 0x00, 0x00, 0x00, 0x30, 0x00, 0x70, 0x00, 0x00, 0x00, 0x30,
    0x00, 0x30, 0x00, 0x00, 0x00, 0x60, 0x00, 0x30, 0x00, 0x00, 0x00, 0xe0,
    0x00, 0x30, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x3f, 0xff, 0xff, 0xff, 0xc0,
    0x00, 0x3f, 0xff, 0xff, 0xff, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0xe0, 0x70, 0x38, 0x00, 0x00, 0x01, 0xe0, 0xf0, 0x78, 0x00,
    0x00, 0x01, 0xe0, 0xf0, 0x78, 0x00, 0x00, 0x01, 0xe0, 0xf0, 0x78, 0x00,
    0x00, 0x03, 0xc1, 0xe0, 0xf0, 0x00, 0x00, 0x03, 0xc1, 0xe0, 0xf0, 0x00,
    0x00, 0x07, 0x83, 0xc1, 0xe0, 0x00, 0x00, 0x07, 0x83, 0xc1, 0xe0, 0x00,
    0x00, 0x0f, 0x07, 0x83, 0xc0, 0x00, 0x00, 0x0f, 0x07, 0x83, 0xc0, 0x00,
    0x00, 0x0f, 0x07, 0x83, 0xc0, 0x00, 0x00, 0x0e, 0x07, 0x03, 0x80, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Cloud with three snowflakes.
pub(super) const SNOW: [u8; ICON_BYTES] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00,
    0x00, 0x00, 0x01, 0xff, 0x00, 0x00, 0x00, 0x00, 0x07, 0xef, 0xc0, 0x00,
    0x00, 0x00, 0x0e, 0x00, 0xe0, 0x00, 0x00, 0x00, 0x1c, 0x00, 0x70, 0x00,
    0x00, 0x00, 0x38, 0x00, 0x38, 0x00, 0x00, 0x00, 0x30, 0x00, 0x18, 0x00,
    0x00, 0x00, 0x60, 0x00, 0x0c, 0x00, 0x00, 0x00, 0xe0, 0x00, 0x0c, 0x00,
    0x00, 0x0f, 0xe0, 0x00, 0x0c, 0x00, 0x00, 0x1f, 0x60, 0x00, 0x0c, 0x00,
    0x00, 0x38, 0x00, 0x00, 0x06, 0x00, 0x00, 0x70, 0x00, 0x00, 0x0f, 0x00,
    0x00, 0xe0, 0x00, 0x00, 0x07, 0xc0, 0x00, 0xc0, 0x00, 0x00, 0x00, 0xe0,
    0x00, 0xc0, 0x00, 0x00, 0x00, 0x60, 0x00, 0xc0, 0x00, 0x00, 0x00, 0x30,
    0x01, 0x80, 0x00, 0x00, 0x00, 0x30, 0x00, 0xc0, 0x00, 0x00, 0x00, 0x30,
    0x00, 0xc0, 0x00, 0x00, 0x00, 0x18, 0x00, 0xc0, 0x00, 0x00, 0x00, 0x30,
    0x00, 0xe0, 0x00, 0x00, 0x00, 0x30, 0x00, 0x70, 0x00, 0x00, 0x00, 0x30,
    0x00, 0x30, 0x00, 0x00, 0x00, 0x60, 0x00, 0x30, 0x00, 0x00, 0x00, 0xe0,
    0x00, 0x30, 0x00, 0x00, 0x00, 0xc0, 0x00, 0x3f, 0xff, 0xff, 0xff, 0xc0,
    0x00, 0x3f, 0xff, 0xff, 0xff, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x01, 0x00, 0x00, 0x40, 0x00, 0x00, 0x05, 0x40, 0x01, 0x50, 0x00,
    0x00, 0x03, 0x80, 0x00, 0xe0, 0x00, 0x00, 0x0f, 0xe0, 0x03, 0xf8, 0x00,
    0x00, 0x03, 0x80, 0x80, 0xe0, 0x00, 0x00, 0x05, 0x42, 0xa1, 0x50, 0x00,
    0x00, 0x01, 0x01, 0xc0, 0x40, 0x00, 0x00, 0x00, 0x07, 0xf0, 0x00, 0x00,
    0x00, 0x00, 0x01, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x02, 0xa0, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];
