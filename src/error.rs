use std::path::PathBuf;

use thiserror::Error;

/// The only failures that ever leave the core. Routine editing operations
/// on absent shapes or empty targets are silent no-ops instead.
#[derive(Debug, Error)]
pub enum EditorError {
    /// An image asset could not be loaded for a creation tool. Fatal only
    /// to that tool; the editor keeps running without it.
    #[error("failed to load image asset {path}")]
    ResourceLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A prototype could not be duplicated. This must stay loud: swallowing
    /// it would desynchronize the tool from the collection.
    #[error("cannot duplicate {variant} prototype: no image bound")]
    CopyUnsupported { variant: &'static str },
}
