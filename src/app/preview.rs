// SPDX-License-Identifier: MPL-2.0
//! Synthetic camera preview used by the demo in place of a capture pipeline.

use iced::widget::image::Handle;

/// Side of the generated preview frame in pixels.
pub const PREVIEW_SIDE: u32 = 96;

const BARS: [[u8; 3]; 6] = [
    [230, 230, 230],
    [230, 200, 40],
    [40, 200, 220],
    [60, 190, 60],
    [200, 60, 200],
    [40, 60, 200],
];

/// Vertical color bars, shifted by `phase` so each reload looks different.
pub fn test_pattern(side: u32, phase: u64) -> Handle {
    Handle::from_rgba(side, side, pattern_pixels(side, phase))
}

fn pattern_pixels(side: u32, phase: u64) -> Vec<u8> {
    let side_usize = side as usize;
    let bar_width = (side_usize / BARS.len()).max(1);
    let shift = (phase % BARS.len() as u64) as usize;

    let mut pixels = Vec::with_capacity(side_usize * side_usize * 4);
    for _y in 0..side_usize {
        for x in 0..side_usize {
            let bar = (x / bar_width + shift) % BARS.len();
            let [r, g, b] = BARS[bar];
            pixels.extend_from_slice(&[r, g, b, 255]);
        }
    }
    pixels
}
