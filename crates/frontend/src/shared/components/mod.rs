pub mod error_box;
pub mod filter_panel;
pub mod ordered_table;
pub mod page_header;
pub mod pagination_controls;
pub mod widget_grid;

pub use error_box::ErrorBox;
pub use filter_panel::{FilterPanel, FilterTag};
pub use ordered_table::{OrderActions, OrderedColumn, OrderedTable};
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use widget_grid::WidgetGrid;
