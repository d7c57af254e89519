mod canvas;
mod shape_list;
mod tool_strip;

pub use canvas::canvas_panel;
pub use shape_list::shape_list_panel;
pub use tool_strip::tool_strip_panel;
