//! Result writers.
//!
//! - [`table`]: the merged results table (input rows + metrics), CSV
//! - [`json`]: optional JSON report of the analyze pass
//!
//! ```text
//! Output Data Structure.csv   # one line per input row, metric cells may be empty
//! metrics.json                # only with --json-output
//! ```

pub mod json;
pub mod table;
