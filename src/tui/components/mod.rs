// Components module - reusable UI building blocks
//
// Shell components around the slide:
// - Title bar: deck title, slide title
// - Progress bar: deck progress gauge
// - Footer: prev/next buttons, counter, key hint
// - Logs panel: captured log entries
//
// Each component is a focused, single-responsibility module.

pub mod footer;
pub mod logs_panel;
pub mod progress_bar;
pub mod scrollbar;
pub mod slide_view;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;
