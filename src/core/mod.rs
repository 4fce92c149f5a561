//! Core data types for gnavigator result summaries.
//!
//! - [`CdnaStatus`], [`GmStatus`]: the fixed status buckets of each report
//! - [`CdnaRecord`], [`GmRecord`]: one classified cDNA or scaffold
//! - [`ResultSet`]: records grouped by status bucket
//! - [`LinkageMap`]: scaffold to linkage-group lookup
//!
//! ## Buckets
//!
//! | Report | Buckets |
//! |--------|---------|
//! | cDNA   | Complete, Duplicated, Partial, Fragmented, Poorly mapped, Missing |
//! | Genetic map | goodLG, WO_LG, diffLG, undet |

pub mod linkage;
pub mod record;
pub mod results;
pub mod types;

pub use linkage::LinkageMap;
pub use record::{CdnaRecord, Classified, GmRecord, NOT_AVAILABLE};
pub use results::{CdnaResults, GmResults, ResultSet};
pub use types::{CdnaStatus, GmStatus};
