mod coerce;
mod ngo_label;

pub use coerce::{
    coerce_distance, coerce_f64, coerce_surplus, parse_numeric_str, SURPLUS_FILL_VALUE,
};
pub use ngo_label::{derive_ngo_label, non_empty_text, NgoLabelSource, NGO_LABEL_FALLBACK};
