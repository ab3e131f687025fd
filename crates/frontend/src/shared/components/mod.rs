pub mod form_view;
pub mod loading_overlay;
pub mod page_header;
pub mod panel_view;
pub mod tab_bar;

pub use form_view::FormView;
pub use loading_overlay::LoadingOverlay;
pub use page_header::PageHeader;
pub use panel_view::{panel_form, panel_tab_bar, SubmitLabels};
pub use tab_bar::{tab_items, TabBar, TabItem};
