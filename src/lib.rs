//! # seqprep
//!
//! Prepares parallel discussion corpora for sequence to sequence training:
//! tokenized source/target posts are bounded, wrapped with `<s>`/`</s>`,
//! aligned, and encoded with frequency-trimmed vocabularies.
//! The result is saved as a single dataset artifact consumed by the trainer.
//!
//! This project can be used both as a tool or as a lib to integrate preprocessing into other projects.
pub mod dataset;
pub mod error;
pub mod io;
pub mod pipelines;
pub mod processing;
pub mod settings;
pub mod vocab;
