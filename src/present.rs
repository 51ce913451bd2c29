use crate::simulation::DisplayMatrix;

/// Pack an RGBA color the way WGSL `unpack4x8unorm` reads it
#[inline]
pub fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    u32::from_le_bytes([r, g, b, a])
}

/// Grayscale frame with highlight pixels painted over it.
///
/// One packed RGBA value per cell, row-major, ready to upload as-is.
/// Highlight coordinates outside the matrix are ignored.
pub fn compose_frame(display: &DisplayMatrix, highlights: &[(u32, u32)], color: [u8; 3]) -> Vec<u32> {
    let mut frame: Vec<u32> = display
        .cells()
        .iter()
        .map(|&v| pack_rgba(v, v, v, 255))
        .collect();

    let dot = pack_rgba(color[0], color[1], color[2], 255);
    for &(x, y) in highlights {
        if x < display.width() && y < display.height() {
            frame[(y * display.width() + x) as usize] = dot;
        }
    }
    frame
}
