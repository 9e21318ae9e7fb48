pub mod alert;
pub mod project_input;
pub mod project_item;
pub mod project_list;
