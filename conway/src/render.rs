// render.rs - Read-only views of a World for presentation layers
//
// The core knows nothing about colours: a Palette maps cell values to
// whatever colour type the caller's pixel buffer uses.

use std::fmt::Write;

use tracing::warn;

use crate::bounds::Region;
use crate::grid::World;

const EMPTY_CHAR: char = '.';
const LIVE_CHAR: char = '#';

/// Maps cell values to colours. Values past the end use the last colour.
#[derive(Debug, Clone)]
pub struct Palette<C> {
    colors: Vec<C>,
}

impl<C: Copy> Palette<C> {
    pub fn two_tone(empty: C, live: C) -> Self {
        Self { colors: vec![empty, live] }
    }

    /// One colour per cell value, starting at the empty value. `None` when
    /// `colors` is empty.
    pub fn from_colors(colors: Vec<C>) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        Some(Self { colors })
    }

    pub fn color(&self, cell: u8) -> C {
        let index = usize::from(cell).min(self.colors.len() - 1);
        self.colors[index]
    }

    /// Replaces the colour of one cell value. Out-of-range values are ignored.
    pub fn set_color(&mut self, cell: u8, color: C) {
        if let Some(slot) = self.colors.get_mut(usize::from(cell)) {
            *slot = color;
        }
    }
}

/// The region [`draw_world`] repaints, `None` when nothing needs drawing.
pub fn redraw_area(world: &World, full_redraw: bool) -> Option<Region> {
    if full_redraw {
        Some(Region::full(world.width(), world.height()))
    } else {
        world.redraw_region().region()
    }
}

/// Paints the world into a row-major `width * height` pixel buffer and
/// returns the number of pixels written.
///
/// Without `full_redraw` only [`World::redraw_region`] is repainted, which is
/// enough when the buffer already shows the previous generation.
pub fn draw_world<C: Copy>(
    world: &World,
    pixels: &mut [C],
    palette: &Palette<C>,
    full_redraw: bool,
) -> usize {
    let (width, height) = (world.width(), world.height());
    if pixels.len() < width * height {
        warn!(len = pixels.len(), width, height, "pixel buffer too small for world");
        return 0;
    }

    let Some(region) = redraw_area(world, full_redraw) else {
        return 0;
    };

    let (cells, stride) = (world.cells(), world.stride());
    for y in region.min_y..=region.max_y {
        let src = &cells[y * stride + region.min_x..=y * stride + region.max_x];
        let dst_start = (y - 1) * width + (region.min_x - 1);
        let dst = &mut pixels[dst_start..dst_start + region.width()];
        for (pixel, &cell) in dst.iter_mut().zip(src) {
            *pixel = palette.color(cell);
        }
    }
    region.width() * region.height()
}

/// One text line per row, `.` for empty and `#` for live cells.
pub fn render_ascii(world: &World) -> String {
    let mut out = String::with_capacity((world.width() + 1) * world.height());
    for y in 0..world.height() {
        for x in 0..world.width() {
            out.push(match world.cell(x, y) {
                Some(0) | None => EMPTY_CHAR,
                Some(_) => LIVE_CHAR,
            });
        }
        out.push('\n');
    }
    out
}

/// The whole current buffer, ghost border included, as raw cell values.
pub fn debug_dump(world: &World) -> String {
    let mut out = String::new();
    for row in world.cells().chunks(world.stride()) {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{cell}");
        }
        out.push('\n');
    }
    out
}
