//! Owned photo collection with identity-based removal

use crate::types::{ImageData, Photo};
use photopage_layout::PhotoId;

/// The photos chosen for a document, in insertion order.
///
/// Ids are handed out on insertion and never reused, so removing one photo
/// does not invalidate the handles of the others. Generation works on a
/// [`snapshot`](PhotoLibrary::snapshot), never on the library itself.
#[derive(Debug, Default, Clone)]
pub struct PhotoLibrary {
    photos: Vec<Photo>,
    next_id: u64,
}

impl PhotoLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a photo and return its id
    pub fn add(&mut self, data: ImageData) -> PhotoId {
        let id = PhotoId(self.next_id);
        self.next_id += 1;
        self.photos.push(Photo::new(id, data));
        id
    }

    pub fn extend(&mut self, images: impl IntoIterator<Item = ImageData>) -> Vec<PhotoId> {
        images.into_iter().map(|data| self.add(data)).collect()
    }

    /// Remove a photo by id, keeping the order of the rest
    pub fn remove(&mut self, id: PhotoId) -> Option<Photo> {
        let index = self.photos.iter().position(|photo| photo.id == id)?;
        Some(self.photos.remove(index))
    }

    pub fn get(&self, id: PhotoId) -> Option<&Photo> {
        self.photos.iter().find(|photo| photo.id == id)
    }

    pub fn clear(&mut self) {
        self.photos.clear();
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Photo> {
        self.photos.iter()
    }

    pub fn ids(&self) -> Vec<PhotoId> {
        self.photos.iter().map(|photo| photo.id).collect()
    }

    /// Immutable copy for one generation request. Image bytes are shared.
    pub fn snapshot(&self) -> Vec<Photo> {
        self.photos.clone()
    }
}
