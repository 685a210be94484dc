// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that define the core
// concepts of the system. No file I/O, no linfa types here.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A labelled joke record
pub mod joke;

// Category name ↔ integer label mapping
pub mod category;

// Word classes used by tagging and lemmatization
pub mod pos_tag;

// Core abstractions (traits) that other layers implement
pub mod traits;
