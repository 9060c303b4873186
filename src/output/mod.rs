pub mod page_renderer;
pub mod page_server;
pub mod writer_html;

pub use page_renderer::render_page;
pub use page_server::ServedPage;
pub use writer_html::{output_file_name, write_page};
