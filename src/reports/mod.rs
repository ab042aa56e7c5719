mod grid;
mod tables;

pub use self::grid::print_layout as print_layout_grid;
pub use self::tables::{
    comparison as print_comparison_report, fingers as print_finger_report,
    morphemes as print_morpheme_report, ngrams as print_ngram_report,
};
