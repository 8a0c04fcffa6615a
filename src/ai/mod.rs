pub mod minimax;
pub mod random;
pub mod rules;

pub use minimax::{search, SearchResult, SCORE_MATE};
pub use random::random_move;
pub use rules::GameRules;
