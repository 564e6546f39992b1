pub mod geo_utils;
pub mod html;
