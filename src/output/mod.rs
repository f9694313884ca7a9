pub mod formatter;

pub use formatter::{
    format_card_table, format_course_line, format_hole_score, format_json, format_tsv,
    should_use_colors, RoundReport,
};
