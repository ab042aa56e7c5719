pub mod analyze;
pub mod compare;
pub mod generate;

use keystat::config::{DataPaths, RatingTable};
use keystat::KsResult;
use tracing::info;

pub fn load_ratings(data: &DataPaths) -> KsResult<RatingTable> {
    match &data.ratings {
        Some(path) => {
            info!("⚖️  Loading ratings from: {}", path);
            RatingTable::load_from_file(path)
        }
        None => Ok(RatingTable::default()),
    }
}
