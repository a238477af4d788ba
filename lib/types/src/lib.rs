pub mod cancel;
pub mod entry;
pub mod group;
pub mod jlpt;
pub mod match_type;
pub mod pos;
pub mod query;
pub mod script;
pub mod search;

pub use cancel::CancellationToken;
pub use entry::{Entry, Example, Sense};
pub use group::{Group, GroupKind};
pub use jlpt::JlptLevel;
pub use match_type::{MatchPriority, MatchType};
pub use pos::PartOfSpeech;
pub use query::{ScoreBreakdown, ScoredEntry, ScoringContext};
pub use script::ScriptType;
pub use search::{SearchMode, SearchResponse};
