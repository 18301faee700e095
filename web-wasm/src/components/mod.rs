pub mod action_buttons;
pub mod alerts;
pub mod header;
pub mod progress_bar;
pub mod prompt_panel;
pub mod result_list;
pub mod upload_area;
