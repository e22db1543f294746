//! Section-based HTML editing.
//!
//! A generated page is a sequence of named regions delimited by
//! `<!-- START: name -->` and `<!-- END: name -->` comments. The page is
//! parsed once into a [`SectionDocument`]; regions can then be read,
//! replaced, appended and de-duplicated. Pages without markers fall back to
//! the heuristics in [`fallback`].

mod document;
pub mod fallback;
mod order;


pub use document::{
    Placement, Region, ReplaceOutcome, Segment, SectionDocument, extract_section_bodies,
    extract_sections, merge_sections, replace_sections,
};
pub use fallback::MatchKind;
pub use order::{
    DEFAULT_REGEN_SECTIONS, RegionMetadata, SECTION_ORDER, dependencies, diagnose,
    is_valid_name, order_semantically, partition_names, region_metadata, related_sections,
    summarize, validate_names,
};
