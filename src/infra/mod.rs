// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// File output that is not part of the pipeline itself:
//
//   config_store.rs — PipelineConfig to and from JSON.
//                     Loads user config files and records the
//                     settings of each evaluation run.
//
//   metrics.rs      — Evaluation metrics logging.
//                     Appends one CSV row per featurization
//                     for later comparison across runs.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// PipelineConfig persistence
pub mod config_store;

/// Evaluation metrics CSV logger
pub mod metrics;
