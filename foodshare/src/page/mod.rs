mod page_ops;
mod page_template;

pub use page_ops::{render_page, route_table_html, PageMode};
pub use page_template::DASHBOARD_HTML;
