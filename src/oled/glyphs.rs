//! Glyph code tables for the custom OLED fonts
//!
//! The display is a 32x128 panel rotated into portrait orientation, 5 cells
//! per display line. Status elements are drawn as runs of glyph codes; each
//! 15-byte row below covers three display lines.

/// Keyboard logo, three display lines
pub const LOGO: [u8; 15] = [
    0x80, 0x81, 0x82, 0x83, 0x84,
    0xa0, 0xa1, 0xa2, 0xa3, 0xa4,
    0xc0, 0xc1, 0xc2, 0xc3, 0xc4,
];

/// Text line printed right under the logo
pub const LOGO_TEXT: &str = "santi";

/// One blank display line
pub const SPACER: [u8; 5] = [0x20; 5];

/// Layer indicator rows, three display lines each
pub const LAYER_DEFAULT: [u8; 15] = [
    0x20, 0x94, 0x95, 0x96, 0x20,
    0x20, 0xb4, 0xb5, 0xb6, 0x20,
    0x20, 0xd4, 0xd5, 0xd6, 0x20,
];
pub const LAYER_RAISE: [u8; 15] = [
    0x20, 0x97, 0x98, 0x99, 0x20,
    0x20, 0xb7, 0xb8, 0xb9, 0x20,
    0x20, 0xd7, 0xd8, 0xd9, 0x20,
];
pub const LAYER_LOWER: [u8; 15] = [
    0x20, 0x9a, 0x9b, 0x9c, 0x20,
    0x20, 0xba, 0xbb, 0xbc, 0x20,
    0x20, 0xda, 0xdb, 0xdc, 0x20,
];
pub const LAYER_ADJUST: [u8; 15] = [
    0x20, 0x9d, 0x9e, 0x9f, 0x20,
    0x20, 0xbd, 0xbe, 0xbf, 0x20,
    0x20, 0xdd, 0xde, 0xdf, 0x20,
];

/// Modifier icon, two display lines of two cells each
pub struct ModIcon {
    pub off: [[u8; 2]; 2],
    pub on: [[u8; 2]; 2],
}

pub const GUI: ModIcon = ModIcon {
    off: [[0x85, 0x86], [0xa5, 0xa6]],
    on: [[0x8d, 0x8e], [0xad, 0xae]],
};
pub const ALT: ModIcon = ModIcon {
    off: [[0x87, 0x88], [0xa7, 0xa8]],
    on: [[0x8f, 0x90], [0xaf, 0xb0]],
};
pub const CTRL: ModIcon = ModIcon {
    off: [[0x89, 0x8a], [0xa9, 0xaa]],
    on: [[0x91, 0x92], [0xb1, 0xb2]],
};
pub const SHIFT: ModIcon = ModIcon {
    off: [[0x8b, 0x8c], [0xab, 0xac]],
    on: [[0xcd, 0xce], [0xcf, 0xd0]],
};

/// Filler cell bridging two adjacent modifier icons
///
/// The filler artwork bleeds into the icon frames, so the right cell depends
/// on whether the icon on each side is lit. `line` selects the display line
/// (icons are two lines tall).
pub const fn filler(left_on: bool, right_on: bool, line: usize) -> u8 {
    const FILLERS: [[u8; 2]; 4] = [
        [0xc5, 0xc6], // off, off
        [0xc9, 0xca], // off, on
        [0xc7, 0xc8], // on, off
        [0xcb, 0xcc], // on, on
    ];
    FILLERS[((left_on as usize) << 1) | right_on as usize][line]
}

/// Two-frame walk cycle of the dino font variant
///
/// The dino font reuses the logo code range for sprite tiles, so this
/// animation and the status logo are mutually exclusive per build.
pub const DINO_WALK: [[u8; 15]; 2] = [
    [
        0x80, 0x81, 0x82, 0x83, 0x84,
        0xa0, 0xa1, 0xa2, 0xa3, 0xa4,
        0xc0, 0xc1, 0xc4, 0x80, 0x80,
    ],
    [
        0x80, 0x81, 0x82, 0x83, 0x84,
        0xa0, 0xa1, 0xa2, 0xa3, 0xa4,
        0xc0, 0xc3, 0xc2, 0x80, 0x80,
    ],
];
