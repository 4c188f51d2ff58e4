/*! Instance processing

Turns raw discussions into aligned, sentinel-wrapped word instances:

- [instances] reads posts of both channels, bounding their length,
- [split] reconciles channel lengths and removes pairs that have an empty side.
!*/
pub mod instances;
pub mod split;

pub use instances::{read_instances, ReadReport, WordInstance};
pub use split::{align, SplitReport};
