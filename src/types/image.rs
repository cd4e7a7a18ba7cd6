//! Image handles passed between the clipboard, the recognizer and the renderer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Cheaply clonable handle to encoded image bytes.
///
/// The pipeline never decodes images itself; it only carries them from the
/// clipboard to the recognition provider and from the renderer to the
/// presentation sink. Bytes are skipped when serialized so display-state
/// snapshots stay small.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageHandle {
    pub width: u32,
    pub height: u32,
    #[serde(skip)]
    data: Arc<Vec<u8>>,
}

impl ImageHandle {
    pub fn new(width: u32, height: u32, data: impl Into<Vec<u8>>) -> Self {
        Self {
            width,
            height,
            data: Arc::new(data.into()),
        }
    }

    /// Encoded image bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// True when the handle carries no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_bytes() {
        let image = ImageHandle::new(4, 2, vec![1, 2, 3]);
        let copy = image.clone();
        assert_eq!(copy.data(), &[1, 2, 3]);
        assert!(Arc::ptr_eq(&image.data, &copy.data));
    }

    #[test]
    fn zero_sized_image_is_empty() {
        assert!(ImageHandle::new(0, 10, Vec::<u8>::new()).is_empty());
        assert!(!ImageHandle::new(1, 1, vec![0]).is_empty());
    }
}
