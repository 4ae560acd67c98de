//! Yangzhai fengshui analysis: trigram assignments, hexagram derivation,
//! and room placement rules, reported in a stable JSON shape.

pub mod report;
pub mod rooms;
pub mod trigram;

pub use report::{analyze, MemberAnalysis, MemberEntry, Report, RoomAnalysis};
pub use rooms::Verdict;
pub use trigram::{hexagram, Hexagram, Trigram};
