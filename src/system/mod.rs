//! # System Interaction Layer
//!
//! Everything that touches the roadmap file on disk. The core never does I/O;
//! handlers go through this layer to load documents and write them back.
//!
//! ## Modules
//!
//! - **`storage`**: Loads a roadmap into a `Document` and replaces it atomically
//!   (temporary file in the same directory, then rename).
//! - **`lock`**: The advisory lock that serializes `add-item` invocations
//!   targeting the same roadmap.

/// Advisory lock around mutations.
pub mod lock;
/// Loading and atomically replacing the roadmap file.
pub mod storage;
