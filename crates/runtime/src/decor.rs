//! Map decoration layer.

use std::collections::BTreeMap;

use item_core::{MapDecor, Position};

/// In-memory [`MapDecor`]: images drawn per tile, in placement order.
#[derive(Debug, Default)]
pub struct DecorLayer {
    images: BTreeMap<Position, Vec<String>>,
}

impl DecorLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn images_at(&self, position: Position) -> &[String] {
        self.images
            .get(&position)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn decorated_tiles(&self) -> impl Iterator<Item = Position> + '_ {
        self.images.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl MapDecor for DecorLayer {
    fn place_image(&mut self, position: Position, image: &str) {
        self.images
            .entry(position)
            .or_default()
            .push(image.to_owned());
    }

    /// Clears one copy of the image on the tile.
    fn clear_image(&mut self, position: Position, image: &str) {
        if let Some(images) = self.images.get_mut(&position) {
            if let Some(index) = images.iter().position(|i| i == image) {
                images.remove(index);
            }
            if images.is_empty() {
                self.images.remove(&position);
            }
        }
    }
}
