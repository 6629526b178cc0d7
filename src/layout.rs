//! Board layout: turns a board size and a token count into placed tokens.
//!
//! The padded inner area is cut into a near-square grid, a random subset of
//! cells receives one token each, and one token is flagged as the target.
//! Every call starts from scratch; a new [`Layout`] replaces the old one.

use log::{debug, warn};

use crate::error::LayoutError;
use crate::grid::{self, GridSpec};
use crate::model::{ItemId, PlacedItem, Rect, SizeRange};
use crate::random::RandomSource;
use crate::sampler::{place_in_cell, sample_cells};
use crate::target::mark_target;

/// Geometry decided before any random draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutPlan {
    pub board: Rect,
    pub inner: Rect,
    pub padding: f64,
    pub grid: GridSpec,
    /// Tokens that will be placed.
    pub count: usize,
    /// Tokens the caller asked for.
    pub requested: usize,
}

impl LayoutPlan {
    pub fn is_clamped(&self) -> bool {
        self.count < self.requested
    }
}

/// Resolves the inner area and grid for a request. Requests denser than the
/// area can host fall back to the densest grid and are clamped to its capacity.
pub fn plan(board: Rect, padding: f64, count: usize) -> Result<LayoutPlan, LayoutError> {
    let inner = board.inset(padding)?;
    let densest = grid::densest(inner.width, inner.height)?;
    let grid = if count > densest.capacity() {
        densest
    } else {
        grid::partition(inner.width, inner.height, count)?
    };
    Ok(LayoutPlan {
        board,
        inner,
        padding,
        grid,
        count: count.min(grid.capacity()),
        requested: count,
    })
}

/// Placed tokens for one board state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    items: Vec<PlacedItem>,
    grid: Option<GridSpec>,
    target: Option<ItemId>,
}

impl Layout {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Grid the items were sampled from; `None` for a skipped layout.
    pub fn grid(&self) -> Option<&GridSpec> {
        self.grid.as_ref()
    }

    pub fn get(&self, id: ItemId) -> Option<&PlacedItem> {
        self.items.get(id)
    }

    pub fn target(&self) -> Option<&PlacedItem> {
        self.target.and_then(|id| self.items.get(id))
    }

    pub fn is_target(&self, id: ItemId) -> bool {
        self.target == Some(id)
    }

    /// Topmost item whose box contains the board point. Later items render on top.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<ItemId> {
        self.items.iter().rev().find(|it| it.contains(x, y)).map(|it| it.id)
    }
}

/// Lays out `count` tokens on `board`. Degenerate boards or size ranges give
/// an empty layout; oversized requests are clamped to the grid capacity.
pub fn layout<R: RandomSource + ?Sized>(
    board: Rect,
    padding: f64,
    count: usize,
    sizes: SizeRange,
    rng: &mut R,
) -> Layout {
    match try_layout(board, padding, count, sizes, rng) {
        Ok(layout) => layout,
        Err(err) => {
            debug!("layout skipped: {err}");
            Layout::empty()
        }
    }
}

/// Same as [`layout`] but reports why a board was skipped.
pub fn try_layout<R: RandomSource + ?Sized>(
    board: Rect,
    padding: f64,
    count: usize,
    sizes: SizeRange,
    rng: &mut R,
) -> Result<Layout, LayoutError> {
    sizes.validate()?;
    let plan = plan(board, padding, count)?;
    if plan.is_clamped() {
        warn!(
            "requested {} tokens but a {}x{} board holds {}; clamping",
            plan.requested, plan.inner.width, plan.inner.height, plan.count
        );
    }

    let cells = sample_cells(&plan.grid, plan.count, rng);
    let mut items = Vec::with_capacity(cells.len());
    for (id, cell) in cells.into_iter().enumerate() {
        let placed = place_in_cell(cell, &plan.grid, padding, sizes, board, rng);
        items.push(PlacedItem {
            id,
            x: placed.x,
            y: placed.y,
            size: placed.size,
            is_target: false,
            cell,
            rotation: placed.rotation,
        });
    }
    let target = mark_target(&mut items, rng);
    debug!(
        "layout {}x{}: {} tokens on {}x{} grid, target {:?}",
        board.width,
        board.height,
        items.len(),
        plan.grid.rows,
        plan.grid.cols,
        target
    );
    Ok(Layout {
        items,
        grid: Some(plan.grid),
        target,
    })
}
