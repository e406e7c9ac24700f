/// Index bookkeeping for the image gallery.
///
/// Holds the ordered image list and the currently displayed position. All
/// requested positions are wrapped into `[0, len)`: anything below zero lands
/// on the last image and anything at or past the end lands on the first.
#[derive(Clone, Debug)]
pub struct Carousel {
    images: Vec<String>,
    index: usize,
}

impl Carousel {
    /// Returns `None` for an empty image list.
    pub fn new(images: Vec<String>) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        Some(Self { images, index: 0 })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &str {
        &self.images[self.index]
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Move to `requested`, wrapping at both ends, and return the new index.
    pub fn go_to(&mut self, requested: isize) -> usize {
        self.index = wrap_index(requested, self.images.len());
        self.index
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.index as isize + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.go_to(self.index as isize - 1)
    }
}

/// Wrap edge policy: below 0 goes to the last slot, at/above `len` goes to 0.
///
/// Requests further out than one step still land inside the range.
#[inline]
pub fn wrap_index(requested: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if requested < 0 {
        len - 1
    } else if requested as usize >= len {
        0
    } else {
        requested as usize
    }
}
