pub mod alphabeta;
pub mod noise;
pub mod ordering;
pub mod profile;
pub mod tt;
pub mod zobrist;

pub use alphabeta::{SearchResult, Searcher};
pub use profile::{StrengthProfile, Tier};
