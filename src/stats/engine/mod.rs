mod fingers;
mod heat;
mod morphemes;
mod ngrams;

pub use fingers::finger_usage;
pub use heat::key_heat;
pub use morphemes::classify_morphemes;
pub use ngrams::{aggregate_family, aggregate_ngrams};
