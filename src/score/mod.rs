//! Cribbage scoring: runs, flushes, hands and table play.

pub mod flush;
pub mod hand;
pub mod play;
pub mod sequence;

pub use flush::{flush_points, flush_points_with};
pub use hand::{HandScore, score_hand};
pub use play::{PlayScore, running_total, score_play};
pub use sequence::is_sequence;
