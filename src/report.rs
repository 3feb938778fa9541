mod html;
mod table;

pub use html::render;
pub use table::ReportTable;
