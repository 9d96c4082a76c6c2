//! Model value types shared across the engine.
//! Supplied by upstream parsers; Tether never reads model files itself.

pub mod architecture;
pub mod code;
pub mod links;
pub mod word;

pub use architecture::{ArchIndex, ArchitectureItem, ArchitectureItemKind, ArchitectureModel};
pub use code::{CodeIndex, CodeItem, CodeItemKind, CodeModel};
pub use links::{EndpointTuple, TraceLink};
pub use word::Word;
