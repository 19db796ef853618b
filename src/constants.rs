//! Global constants for zonedraw

/// Default logical output width used before any image is loaded
pub const DEFAULT_OUTPUT_WIDTH: u32 = 1280;

/// Default logical output height used before any image is loaded
pub const DEFAULT_OUTPUT_HEIGHT: u32 = 720;

/// Common output widths offered by hosts
pub const WIDTH_PRESETS: [u32; 4] = [640, 1280, 1920, 3840];

/// Common output heights offered by hosts
pub const HEIGHT_PRESETS: [u32; 4] = [360, 720, 1080, 2160];

/// Quick presets that set both axes at once: (label, width, height)
pub const SIZE_PRESETS: [(&str, u32, u32); 4] = [
    ("640×360", 640, 360),
    ("1280×720", 1280, 720),
    ("1920×1080", 1920, 1080),
    ("4K", 3840, 2160),
];

/// How long a validation notice stays visible, in milliseconds
pub const DEFAULT_NOTICE_DURATION_MS: u64 = 2800;

/// Palette cycled through by ROI zone ids
pub const ROI_PALETTE: [[u8; 3]; 10] = [
    [0x22, 0xc5, 0x5e],
    [0x3b, 0x82, 0xf6],
    [0xa8, 0x55, 0xf7],
    [0xf9, 0x73, 0x16],
    [0xec, 0x48, 0x99],
    [0x14, 0xb8, 0xa6],
    [0xea, 0xb3, 0x08],
    [0xef, 0x44, 0x44],
    [0x06, 0xb6, 0xd4],
    [0x84, 0xcc, 0x16],
];

/// Tallest drawing surface a host lays out, in display pixels
pub const MAX_SURFACE_HEIGHT: f32 = 560.0;

/// Counting-line labels sit this far above the line's first point
pub const LINE_LABEL_OFFSET: f32 = 12.0;
