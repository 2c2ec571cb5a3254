//! Layout of rectangular blocks: the generic packer and the widget grid on top of it.

pub mod bin_packer;
pub mod widget_layout;

pub use bin_packer::{pack, BinPacker, PackResult, PackedBlock, RectBlock};
pub use widget_layout::{layout_widgets, GridSpec, PositionedWidget, WidgetBox, WidgetLayout};
