//! Pixel layout of case widgets on a column grid.
//!
//! Widgets declare a width in grid columns and report their rendered height;
//! the grid turns both into pixel blocks and runs the bin packer.

use super::bin_packer::{pack, PackResult, RectBlock};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Available width in pixels
    pub container_width: u32,
    /// Number of grid columns
    pub columns: u32,
    /// Gap between widgets in pixels (horizontal and vertical)
    pub gap: u32,
}

impl GridSpec {
    /// Width of one column, gaps excluded. Never zero.
    pub fn column_width(&self) -> u32 {
        let columns = self.columns.max(1);
        let gaps = self.gap * (columns - 1);
        (self.container_width.saturating_sub(gaps) / columns).max(1)
    }

    /// Pixel width of a widget spanning `span` columns (clamped to the grid).
    /// Never wider than the container, never zero.
    pub fn span_width(&self, span: u32) -> u32 {
        let span = span.clamp(1, self.columns.max(1));
        (span * self.column_width() + (span - 1) * self.gap)
            .min(self.container_width)
            .max(1)
    }
}

/// Widget to lay out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetBox {
    pub key: String,
    pub span: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionedWidget {
    pub key: String,
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WidgetLayout {
    pub height: u32,
    pub items: Vec<PositionedWidget>,
}

impl WidgetLayout {
    pub fn get(&self, key: &str) -> Option<&PositionedWidget> {
        self.items.iter().find(|item| item.key == key)
    }
}

/// Lays widgets out in input order.
///
/// Each block is padded by `gap` on the right and bottom and packed into a
/// container `gap` wider than the grid, so neighbours keep the gap between
/// them while the outer edges stay flush.
pub fn layout_widgets(widgets: &[WidgetBox], grid: &GridSpec) -> WidgetLayout {
    let blocks: Vec<RectBlock> = widgets
        .iter()
        .map(|widget| {
            RectBlock::new(
                widget.key.clone(),
                grid.span_width(widget.span) + grid.gap,
                widget.height + grid.gap,
            )
        })
        .collect();

    let packed: PackResult = pack(&blocks, grid_width(grid) + grid.gap);

    let items: Vec<PositionedWidget> = packed
        .items
        .into_iter()
        .map(|block| PositionedWidget {
            key: block.key,
            left: block.x,
            top: block.y,
            width: block.width - grid.gap,
            height: block.height - grid.gap,
        })
        .collect();

    let height = items.iter().map(|item| item.top + item.height).max().unwrap_or(0);
    WidgetLayout { height, items }
}

/// Width actually covered by the columns (may be a few pixels less than the
/// container because of integer division).
fn grid_width(grid: &GridSpec) -> u32 {
    grid.span_width(grid.columns.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridSpec {
        GridSpec {
            container_width: 1000,
            columns: 4,
            gap: 16,
        }
    }

    fn widget(key: &str, span: u32, height: u32) -> WidgetBox {
        WidgetBox {
            key: key.to_string(),
            span,
            height,
        }
    }

    #[test]
    fn test_column_width() {
        let g = grid();
        // (1000 - 3 * 16) / 4 = 238
        assert_eq!(g.column_width(), 238);
        assert_eq!(g.span_width(1), 238);
        assert_eq!(g.span_width(2), 238 * 2 + 16);
        assert_eq!(g.span_width(4), 238 * 4 + 48);
    }

    #[test]
    fn test_span_is_clamped() {
        let g = grid();
        assert_eq!(g.span_width(0), g.span_width(1));
        assert_eq!(g.span_width(9), g.span_width(4));
    }

    #[test]
    fn test_two_half_widgets_share_a_row() {
        let layout = layout_widgets(&[widget("a", 2, 100), widget("b", 2, 80)], &grid());
        let a = layout.get("a").unwrap();
        let b = layout.get("b").unwrap();
        assert_eq!((a.left, a.top), (0, 0));
        assert_eq!(b.top, 0);
        assert_eq!(b.left, a.width + 16);
        assert_eq!(layout.height, 100);
    }

    #[test]
    fn test_full_width_widgets_keep_vertical_gap() {
        let layout = layout_widgets(&[widget("a", 4, 100), widget("b", 4, 50)], &grid());
        let b = layout.get("b").unwrap();
        assert_eq!(b.top, 116);
        assert_eq!(layout.height, 166);
    }

    #[test]
    fn test_narrow_container_keeps_widgets_inside() {
        let g = GridSpec {
            container_width: 10,
            columns: 4,
            gap: 16,
        };
        assert_eq!(g.span_width(4), 10);
        let layout = layout_widgets(
            &[widget("a", 4, 40), widget("b", 1, 30), widget("c", 2, 20)],
            &g,
        );
        assert_eq!(layout.items.len(), 3);
        for item in &layout.items {
            assert!(item.left + item.width <= g.container_width, "{:?}", item);
        }
    }

    #[test]
    fn test_zero_width_container() {
        let g = GridSpec {
            container_width: 0,
            columns: 4,
            gap: 16,
        };
        assert_eq!(g.span_width(4), 1);
        let layout = layout_widgets(&[widget("a", 2, 40)], &g);
        assert_eq!(layout.get("a").map(|a| (a.left, a.width)), Some((0, 1)));
    }

    #[test]
    fn test_no_widgets() {
        let layout = layout_widgets(&[], &grid());
        assert_eq!(layout.height, 0);
        assert!(layout.items.is_empty());
    }

    #[test]
    fn test_widgets_stay_inside_grid() {
        let g = grid();
        let widgets: Vec<WidgetBox> = (0..9)
            .map(|i| widget(&format!("w{i}"), 1 + i % 4, 60 + (i * 37) % 200))
            .collect();
        let layout = layout_widgets(&widgets, &g);
        assert_eq!(layout.items.len(), widgets.len());
        for item in &layout.items {
            assert!(item.left + item.width <= g.container_width);
        }
    }
}
