mod sequence;
mod signal;

pub use sequence::random_sequence;
pub use signal::{ClickTrainSpec, generate_click_train, regular_onsets};
