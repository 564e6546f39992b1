pub mod model;
pub mod sanitize;
pub mod util;
pub mod view;
