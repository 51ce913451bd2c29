/// Intensity rescaled to one byte per cell, row-major
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayMatrix {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl DisplayMatrix {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.cells[(y * self.width + x) as usize]
    }
}

/// Map a `width * height` intensity matrix onto `0..=255`.
///
/// The brightest cell becomes 255. An all-zero matrix maps to all zeros.
pub fn normalize(intensity: &[f64], width: u32, height: u32) -> DisplayMatrix {
    debug_assert_eq!(intensity.len(), width as usize * height as usize);

    let max_value = intensity.iter().copied().fold(0.0, f64::max);
    let cells = if max_value > 0.0 {
        intensity
            .iter()
            .map(|value| (255.0 * value / max_value).round().clamp(0.0, 255.0) as u8)
            .collect()
    } else {
        vec![0; intensity.len()]
    };

    DisplayMatrix {
        width,
        height,
        cells,
    }
}
