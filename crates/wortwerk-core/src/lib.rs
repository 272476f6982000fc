// wortwerk-core: plain data shared by the engine and its front ends.

pub mod case;
pub mod character;
pub mod classification;
pub mod entry;
pub mod rule;
pub mod token;

pub use classification::{Classification, ErrorClasses};
pub use entry::{Entry, Morpheme, Variant};
pub use rule::{CaseTransform, CompositeRule};
pub use token::{CursorPlacement, NodeId, Token};
