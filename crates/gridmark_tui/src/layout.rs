//! Board geometry: where each cell sits on screen and which cell a click hits.

use ratatui::layout::{Position, Rect};
use tracing::instrument;

/// Placement of an NxN board inside a terminal area.
///
/// Cells are `cell_width` x `cell_height` characters with a one-character
/// grid line between neighbours and no outer border. A board larger than
/// its area is clipped to it, and only the visible part takes clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    x: u16,
    y: u16,
    size: usize,
    cell_width: u16,
    cell_height: u16,
    visible: Rect,
}

impl BoardLayout {
    /// Centers a board of `size` cells per side in `area`.
    #[instrument]
    pub fn centered(area: Rect, size: usize, cell_width: u16, cell_height: u16) -> Self {
        let mut layout = Self {
            x: area.x,
            y: area.y,
            size,
            cell_width,
            cell_height,
            visible: Rect::default(),
        };
        layout.x = area.x + area.width.saturating_sub(layout.width()) / 2;
        layout.y = area.y + area.height.saturating_sub(layout.height()) / 2;
        layout.visible = layout.rect().intersection(area);
        layout
    }

    /// Cells per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total board width including grid lines.
    pub fn width(&self) -> u16 {
        Self::extent(self.size, self.cell_width)
    }

    /// Total board height including grid lines.
    pub fn height(&self) -> u16 {
        Self::extent(self.size, self.cell_height)
    }

    fn extent(size: usize, cell: u16) -> u16 {
        let n = u16::try_from(size).unwrap_or(u16::MAX);
        n.saturating_mul(cell).saturating_add(n.saturating_sub(1))
    }

    /// Area covered by the board.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width(), self.height())
    }

    /// Part of the board inside the area it was laid out in.
    pub fn visible(&self) -> Rect {
        self.visible
    }

    /// Cell width in columns.
    pub fn cell_width(&self) -> u16 {
        self.cell_width
    }

    /// Cell height in rows.
    pub fn cell_height(&self) -> u16 {
        self.cell_height
    }

    /// Screen area of the cell at `index`, if the index is on the board.
    pub fn cell_rect(&self, index: usize) -> Option<Rect> {
        if index >= self.size * self.size {
            return None;
        }
        let row = u16::try_from(index / self.size).ok()?;
        let col = u16::try_from(index % self.size).ok()?;
        let x = self.x.checked_add(col.checked_mul(self.cell_width.checked_add(1)?)?)?;
        let y = self.y.checked_add(row.checked_mul(self.cell_height.checked_add(1)?)?)?;
        Some(Rect::new(x, y, self.cell_width, self.cell_height))
    }

    /// Maps a terminal position to a cell index.
    ///
    /// Positions on grid lines, outside the board or in its clipped-off part
    /// map to `None`, so every index returned is below `size * size`.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.visible.contains(Position::new(column, row)) {
            return None;
        }
        let col = Self::axis_cell(column.checked_sub(self.x)?, self.cell_width)?;
        let r = Self::axis_cell(row.checked_sub(self.y)?, self.cell_height)?;
        if col >= self.size || r >= self.size {
            return None;
        }
        Some(r * self.size + col)
    }

    fn axis_cell(offset: u16, extent: u16) -> Option<usize> {
        let stride = u32::from(extent) + 1;
        let offset = u32::from(offset);
        (offset % stride < u32::from(extent)).then_some((offset / stride) as usize)
    }
}
