//! Fixed-capacity gallery of finished drawings.

use crate::error::{DoilyError, DoilyResult};
use crate::surface::RasterSnapshot;
use uuid::Uuid;

/// A saved drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    pub id: Uuid,
    pub image: RasterSnapshot,
}

/// Saved drawings in insertion order, never more than `capacity`.
#[derive(Debug, Clone)]
pub struct Gallery {
    entries: Vec<GalleryEntry>,
    capacity: usize,
    page_size: usize,
}

impl Gallery {
    pub const DEFAULT_CAPACITY: usize = 12;
    pub const DEFAULT_PAGE_SIZE: usize = 4;

    pub fn new(capacity: usize, page_size: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            page_size: page_size.max(1),
        }
    }

    /// Store a copy of `image` in the next free slot.
    pub fn save(&mut self, image: &RasterSnapshot) -> DoilyResult<usize> {
        if self.is_full() {
            log::warn!("Gallery full ({} drawings), not saving", self.capacity);
            return Err(DoilyError::GalleryFull {
                capacity: self.capacity,
            });
        }
        self.entries.push(GalleryEntry {
            id: Uuid::new_v4(),
            image: image.clone(),
        });
        let slot = self.entries.len() - 1;
        log::debug!("Saved drawing to gallery slot {}", slot);
        Ok(slot)
    }

    /// Remove the drawing at `slot`; later drawings move up one slot.
    pub fn delete(&mut self, slot: usize) -> DoilyResult<GalleryEntry> {
        if slot >= self.entries.len() {
            return Err(DoilyError::GallerySlotEmpty(slot));
        }
        Ok(self.entries.remove(slot))
    }

    pub fn get(&self, slot: usize) -> Option<&GalleryEntry> {
        self.entries.get(slot)
    }

    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages needed to show every slot.
    pub fn page_count(&self) -> usize {
        self.capacity.div_ceil(self.page_size).max(1)
    }

    /// Slots shown on `page` (zero-based); `None` marks an empty slot.
    pub fn page(&self, page: usize) -> Vec<Option<&GalleryEntry>> {
        let Some(start) = page.checked_mul(self.page_size) else {
            return Vec::new();
        };
        let end = start.saturating_add(self.page_size).min(self.capacity);
        (start..end).map(|slot| self.entries.get(slot)).collect()
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY, Self::DEFAULT_PAGE_SIZE)
    }
}

/// Current page of the gallery view with prev/next enablement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryPager {
    current: usize,
    page_count: usize,
}

impl GalleryPager {
    pub fn new(gallery: &Gallery) -> Self {
        Self {
            current: 0,
            page_count: gallery.page_count(),
        }
    }

    /// Zero-based page index.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn can_prev(&self) -> bool {
        self.current > 0
    }

    pub fn can_next(&self) -> bool {
        self.current + 1 < self.page_count
    }

    /// Move to the next page. Returns false when already on the last page.
    pub fn next(&mut self) -> bool {
        if self.can_next() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous page. Returns false when already on the first page.
    pub fn prev(&mut self) -> bool {
        if self.can_prev() {
            self.current -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(tag: u8) -> RasterSnapshot {
        let mut snapshot = RasterSnapshot::blank(2, 2);
        snapshot.rgba_data[0] = tag;
        snapshot.rgba_data[3] = 255;
        snapshot
    }

    #[test]
    fn test_save_until_full() {
        let mut gallery = Gallery::default();
        for i in 0..12 {
            assert_eq!(gallery.save(&image(i)).unwrap(), i as usize);
        }
        assert!(gallery.is_full());
        assert_eq!(
            gallery.save(&image(99)),
            Err(DoilyError::GalleryFull { capacity: 12 })
        );
        assert_eq!(gallery.len(), 12);
    }

    #[test]
    fn test_save_copies_image() {
        let mut gallery = Gallery::default();
        let mut source = image(1);
        gallery.save(&source).unwrap();
        source.rgba_data[0] = 200;
        assert_eq!(gallery.get(0).unwrap().image.rgba_data[0], 1);
    }

    #[test]
    fn test_delete_shifts_entries() {
        let mut gallery = Gallery::default();
        for i in 0..3 {
            gallery.save(&image(i)).unwrap();
        }
        let removed = gallery.delete(1).unwrap();
        assert_eq!(removed.image.rgba_data[0], 1);
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.get(1).unwrap().image.rgba_data[0], 2);
        assert_eq!(gallery.delete(5), Err(DoilyError::GallerySlotEmpty(5)));
    }

    #[test]
    fn test_pages() {
        let mut gallery = Gallery::default();
        for i in 0..5 {
            gallery.save(&image(i)).unwrap();
        }
        assert_eq!(gallery.page_count(), 3);
        assert!(gallery.page(0).iter().all(Option::is_some));
        let second = gallery.page(1);
        assert_eq!(second.len(), 4);
        assert!(second[0].is_some());
        assert!(second[1..].iter().all(Option::is_none));
        assert!(gallery.page(2).iter().all(Option::is_none));
        assert!(gallery.page(3).is_empty());
    }

    #[test]
    fn test_page_far_out_of_range() {
        let gallery = Gallery::default();
        assert!(gallery.page(usize::MAX).is_empty());
        assert!(gallery.page(usize::MAX / 4 + 1).is_empty());
    }

    #[test]
    fn test_pager() {
        let gallery = Gallery::default();
        let mut pager = GalleryPager::new(&gallery);
        assert!(!pager.can_prev());
        assert!(pager.can_next());
        assert!(pager.next());
        assert!(pager.next());
        assert_eq!(pager.current(), 2);
        assert!(!pager.can_next());
        assert!(!pager.next());
        assert!(pager.prev());
        assert!(pager.can_prev());
    }
}
