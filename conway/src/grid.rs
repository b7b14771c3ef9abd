// grid.rs - Toroidal world storage and the generation step
//
// Each buffer is row-major with a one-cell ghost border on every side:
// logical cell (x, y) lives at [(y + 1) * stride + (x + 1)], stride = width + 2.
// Ghost cells mirror the opposite edge and are rewritten before every step.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use rand::Rng;
use tracing::{debug, trace};

use crate::bounds::{LiveBounds, Region};
use crate::error::WorldError;
use crate::rules::next_state;

/// Cell types of classic Life: empty and alive.
pub const CLASSIC_TYPES: u8 = 2;

/// A fixed-size toroidal grid with double-buffered cell storage.
#[derive(Clone)]
pub struct World {
    width: usize,
    height: usize,
    stride: usize,
    types: u8,
    buffers: [Vec<u8>; 2],
    current: usize,
    bounds: LiveBounds, // live cells of the current buffer
    stale: LiveBounds,  // live cells left behind in the next buffer
}

impl World {
    /// Allocates an empty `width` x `height` world. The live box starts at
    /// the full extent.
    pub fn new(width: usize, height: usize) -> Result<Self, WorldError> {
        if width == 0 || height == 0 {
            return Err(WorldError::InvalidDimensions { width, height });
        }
        let buffers = [allocate(width, height)?, allocate(width, height)?];
        debug!(width, height, "allocated world");

        Ok(Self {
            width,
            height,
            stride: width + 2,
            types: CLASSIC_TYPES,
            buffers,
            current: 0,
            bounds: LiveBounds::full(width, height),
            stale: LiveBounds::Empty,
        })
    }

    /// Clears the world, reallocating only when the dimensions change.
    /// On error the world is left as it was.
    pub fn reinit(&mut self, width: usize, height: usize) -> Result<(), WorldError> {
        if width == self.width && height == self.height {
            self.clear();
            return Ok(());
        }
        *self = World::new(width, height)?;
        Ok(())
    }

    /// Empties every cell and resets the live box to the full extent.
    pub fn clear(&mut self) {
        for buffer in &mut self.buffers {
            buffer.fill(0);
        }
        self.bounds = LiveBounds::full(self.width, self.height);
        self.stale = LiveBounds::Empty;
        debug!(width = self.width, height = self.height, "cleared world");
    }

    /// Fills every logical cell with a value drawn uniformly from `0..types`.
    pub fn randomize(&mut self, types: u8) -> Result<(), WorldError> {
        self.randomize_with(types, &mut rand::rng())
    }

    /// Like [`randomize`](Self::randomize) with a caller-supplied generator.
    pub fn randomize_with<R: Rng>(&mut self, types: u8, rng: &mut R) -> Result<(), WorldError> {
        if types == 0 {
            return Err(WorldError::InvalidTypes);
        }
        let (width, stride) = (self.width, self.stride);
        let cells = &mut self.buffers[self.current];
        for y in 1..=self.height {
            let row = y * stride;
            for cell in &mut cells[row + 1..=row + width] {
                *cell = rng.random_range(0..types);
            }
        }
        self.types = types;
        self.bounds = LiveBounds::full(self.width, self.height);
        debug!(types, "randomized world");
        Ok(())
    }

    /// Writes one cell at 0-based logical coordinates. Off-grid coordinates
    /// are ignored. A nonzero value widens the live box to cover the cell.
    pub fn set_cell(&mut self, x: usize, y: usize, value: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = self.index(x + 1, y + 1);
        self.buffers[self.current][index] = value;
        if value != 0 {
            self.bounds.include(x + 1, y + 1);
        }
    }

    /// Value at 0-based logical coordinates, `None` off the grid.
    pub fn cell(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells()[self.index(x + 1, y + 1)])
    }

    /// Copies the outer rows and columns into the opposite ghost border.
    pub fn wrap_edges(&mut self) {
        let (w, h, stride) = (self.width, self.height, self.stride);
        let cells = &mut self.buffers[self.current];

        cells.copy_within(h * stride + 1..=h * stride + w, 1); // top ghost row <- bottom real row
        cells.copy_within(stride + 1..=stride + w, (h + 1) * stride + 1); // bottom ghost row <- top real row

        // Ghost rows included so the corners pick up the diagonal cell.
        for y in 0..=h + 1 {
            let row = y * stride;
            cells[row] = cells[row + w];
            cells[row + w + 1] = cells[row + 1];
        }
    }

    /// Advances one generation.
    ///
    /// Only the live box grown by one cell is swept; the result is written to
    /// the other buffer and the roles are swapped. Afterwards the live box
    /// encloses exactly the cells that came out alive.
    pub fn step(&mut self) {
        self.wrap_edges();

        let (width, height, stride) = (self.width, self.height, self.stride);
        let sweep = self.bounds.sweep_region(width, height);

        let [first, second] = &mut self.buffers;
        let (current, next) = if self.current == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        };

        // Cells outside the sweep are never written, so survivors from two
        // generations ago have to go first.
        if let Some(stale) = self.stale.region() {
            clear_region(next, stride, stale);
        }

        let mut live = LiveBounds::Empty;
        if let Some(sweep) = sweep {
            trace!(?sweep, "sweeping");
            for y in sweep.min_y..=sweep.max_y {
                for x in sweep.min_x..=sweep.max_x {
                    let index = y * stride + x;
                    let state = next_state(current[index], live_neighbors(current, index, stride));
                    next[index] = state;
                    if state != 0 {
                        live.include(x, y);
                    }
                }
            }
        }

        self.stale = self.bounds;
        self.bounds = live;
        self.current ^= 1;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row length of [`cells`](Self::cells), ghost columns included.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Cell types of the last random fill.
    pub fn types(&self) -> u8 {
        self.types
    }

    /// The current buffer, ghost border included.
    pub fn cells(&self) -> &[u8] {
        &self.buffers[self.current]
    }

    /// Box around every live cell of the current buffer.
    pub fn bounds(&self) -> LiveBounds {
        self.bounds
    }

    /// Cells whose value may differ from the previous generation: the live
    /// box of this generation joined with that of the one before.
    pub fn redraw_region(&self) -> LiveBounds {
        self.bounds.union(self.stale)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        let Some(region) = self.bounds.region() else {
            return 0;
        };
        let cells = self.cells();
        (region.min_y..=region.max_y)
            .map(|y| {
                let row = y * self.stride;
                cells[row + region.min_x..=row + region.max_x]
                    .iter()
                    .filter(|&&cell| cell != 0)
                    .count()
            })
            .sum()
    }

    /// Hash of the dimensions and every logical cell.
    pub fn state_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        (self.width, self.height).hash(&mut hasher);
        let cells = self.cells();
        for y in 1..=self.height {
            let row = y * self.stride;
            cells[row + 1..=row + self.width].hash(&mut hasher);
        }
        hasher.finish()
    }

    /// Releases both buffers.
    pub fn teardown(self) {
        debug!(width = self.width, height = self.height, "world released");
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("types", &self.types)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

fn allocate(width: usize, height: usize) -> Result<Vec<u8>, WorldError> {
    let error = WorldError::Allocation { width, height };
    let len = width
        .checked_add(2)
        .zip(height.checked_add(2))
        .and_then(|(stride, rows)| stride.checked_mul(rows))
        .ok_or(error.clone())?;

    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len).map_err(|_| error)?;
    buffer.resize(len, 0);
    Ok(buffer)
}

fn live_neighbors(cells: &[u8], index: usize, stride: usize) -> u8 {
    let (above, below) = (index - stride, index + stride);
    let neighbors = [
        above - 1, above, above + 1,
        index - 1,        index + 1,
        below - 1, below, below + 1,
    ];
    neighbors.iter().filter(|&&i| cells[i] != 0).count() as u8
}

fn clear_region(cells: &mut [u8], stride: usize, region: Region) {
    for y in region.min_y..=region.max_y {
        let row = y * stride;
        cells[row + region.min_x..=row + region.max_x].fill(0);
    }
}
