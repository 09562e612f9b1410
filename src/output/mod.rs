pub mod formatter;
pub mod json;

pub use formatter::{
    format_bar, format_body_detail, format_body_list, format_comparison, format_factor_table, format_launch,
    format_percent, format_survival, should_use_colors,
};
pub use json::{comparison_json, survival_json};
