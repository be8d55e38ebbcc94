//! Change-density minimap.
//!
//! When a large screenshot has a handful of changed pixels, the annotated
//! diff is easy to miss at fit-to-window zoom. The minimap divides the
//! image into coarse cells and counts changed pixels per cell during the
//! scan. Afterwards every cell that saw at least one change is tinted by
//! bitwise-ORing a translucent blue onto the diff region. Annotations
//! stay visible through the tint because the OR only raises channel bits.

use snapdiff_core::Rect;

/// Edge length of one minimap cell in pixels.
pub const CELL_SIZE: u32 = 256;

/// Overlay color ORed onto every pixel of a marked cell.
pub const MINIMAP_COLOR: [u8; 4] = [0x00, 0x00, 0x7F, 0x40];

/// Grid of per-cell change counts over a [`CELL_SIZE`]-aligned partition
/// of the image.
///
/// Cell (cx, cy) covers pixels `x in [cx*256, (cx+1)*256)`,
/// `y in [cy*256, (cy+1)*256)`, clipped to the image bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minimap {
    /// Row-major per-cell change counts
    cells: Vec<u32>,
    /// Cells per row
    grid_width: u32,
    /// Cell rows
    grid_height: u32,
}

impl Minimap {
    /// Creates an empty minimap covering an image of the given size.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        let grid_width = image_width.div_ceil(CELL_SIZE);
        let grid_height = image_height.div_ceil(CELL_SIZE);
        Self {
            cells: vec![0u32; grid_width as usize * grid_height as usize],
            grid_width,
            grid_height,
        }
    }

    /// Returns the number of cells per row.
    #[inline]
    pub fn grid_width(&self) -> u32 {
        self.grid_width
    }

    /// Returns the number of cell rows.
    #[inline]
    pub fn grid_height(&self) -> u32 {
        self.grid_height
    }

    /// Records one changed pixel at image coordinates (x, y).
    #[inline]
    pub fn record(&mut self, x: u32, y: u32) {
        let idx = self.cell_index(x / CELL_SIZE, y / CELL_SIZE);
        self.cells[idx] += 1;
    }

    /// Adds per-cell-column counts of one image row into the grid.
    ///
    /// `counts` has one entry per cell column. Used when rows are scanned
    /// independently and merged afterwards.
    pub fn add_row(&mut self, y: u32, counts: &[u32]) {
        debug_assert_eq!(counts.len(), self.grid_width as usize);
        let base = self.cell_index(0, y / CELL_SIZE);
        for (cell, &count) in self.cells[base..base + counts.len()]
            .iter_mut()
            .zip(counts)
        {
            *cell += count;
        }
    }

    /// Returns the change count of cell (cx, cy).
    #[inline]
    pub fn count(&self, cell_x: u32, cell_y: u32) -> u32 {
        self.cells[self.cell_index(cell_x, cell_y)]
    }

    /// Returns `true` if cell (cx, cy) saw at least one changed pixel.
    #[inline]
    pub fn is_marked(&self, cell_x: u32, cell_y: u32) -> bool {
        self.count(cell_x, cell_y) > 0
    }

    /// Returns `true` if no cell saw a change.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }

    #[inline]
    fn cell_index(&self, cell_x: u32, cell_y: u32) -> usize {
        debug_assert!(cell_x < self.grid_width && cell_y < self.grid_height);
        cell_y as usize * self.grid_width as usize + cell_x as usize
    }

    /// Tints every marked cell onto the diff region.
    ///
    /// `diff` is the full diff buffer with rows of `row_pixels` pixels;
    /// the diff region of each row starts at pixel `x_offset` and spans
    /// `image_width` pixels. Cell rectangles are clipped to the image
    /// bounds, and [`MINIMAP_COLOR`] is ORed onto every covered pixel.
    pub fn apply_overlay(
        &self,
        diff: &mut [u8],
        row_pixels: usize,
        x_offset: usize,
        image_width: u32,
        image_height: u32,
    ) {
        for cell_y in 0..self.grid_height {
            for cell_x in 0..self.grid_width {
                if !self.is_marked(cell_x, cell_y) {
                    continue;
                }
                let cell = Rect::new(cell_x * CELL_SIZE, cell_y * CELL_SIZE, CELL_SIZE, CELL_SIZE);
                let Some(region) = cell.clamp_to(image_width, image_height) else {
                    continue;
                };
                for y in region.y..region.bottom() {
                    let start =
                        (y as usize * row_pixels + x_offset + region.x as usize) * 4;
                    let end = start + region.width as usize * 4;
                    for px in diff[start..end].chunks_exact_mut(4) {
                        for (byte, tint) in px.iter_mut().zip(MINIMAP_COLOR) {
                            *byte |= tint;
                        }
                    }
                }
            }
        }
    }
}
