//! Tab management module
//!
//! Содержит:
//! - `route` - разбор ключа таба в `TabRoute`
//! - `page` - компонент TabPage для обёртки контента таба
//! - `registry` - маппинг `TabRoute` → View
//! - `tab_labels` - заголовки табов

pub mod page;
pub mod registry;
pub mod route;
pub mod tab_labels;

pub use page::TabPage;
pub use route::TabRoute;
pub use tab_labels::{detail_tab_label, tab_label_for_key};
