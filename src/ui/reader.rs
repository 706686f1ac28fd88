// Reader pane - token display, rate controls and progress

pub mod controls;
pub mod view;
