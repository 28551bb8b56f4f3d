// UI components - each renders one region of the screen
//
// Components are plain render functions over &App (plus the toast, which
// owns its expiry state). App owns all mutable state; nothing here mutates.

pub mod explorer_panel;
pub mod help;
pub mod nav_bar;
pub mod status_bar;
pub mod toast;
