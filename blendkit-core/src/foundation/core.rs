use crate::foundation::error::{BlendkitError, BlendkitResult};

pub use kurbo::Affine;

/// Pixel dimensions of an RGBA8 image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Build a size without validating it.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels covered by this size.
    pub fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Check that both dimensions are non-zero and that `len` is exactly the
    /// byte length of an RGBA8 buffer of this size.
    pub fn validate_rgba8_len(self, len: usize) -> BlendkitResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(BlendkitError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let expected = (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|px| px.checked_mul(4))
            .unwrap_or(usize::MAX);
        if len != expected {
            return Err(BlendkitError::InvalidImageBuffer {
                width: self.width,
                height: self.height,
                expected,
                actual: len,
            });
        }
        Ok(())
    }
}

/// Position of a foreground image's top-left pixel relative to the
/// background's top-left pixel. Either coordinate may be negative.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Offset {
    /// Horizontal offset in pixels.
    pub x: i32,
    /// Vertical offset in pixels.
    pub y: i32,
}

impl Offset {
    /// Build an offset.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Straight (non-premultiplied) RGBA8 image, row-major with a top-left origin.
///
/// The buffer always holds exactly `width * height * 4` bytes; every
/// constructor checks this and the fields are private so it cannot drift.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    size: Size,
    data: Vec<u8>,
}

impl Image {
    /// Wrap an existing RGBA8 buffer.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> BlendkitResult<Self> {
        let size = Size::new(width, height);
        size.validate_rgba8_len(data.len())?;
        Ok(Self { size, data })
    }

    /// Allocate an image with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> BlendkitResult<Self> {
        let size = Size::new(width, height);
        size.validate_rgba8_len(size.pixel_count().saturating_mul(4))?;
        Ok(Self {
            size,
            data: rgba.repeat(size.pixel_count()),
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.size.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Width and height together.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Raw RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable RGBA8 bytes. The length is fixed; only contents may change.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Take the RGBA8 bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Read one pixel, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let i = self.byte_index(x, y)?;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Overwrite one pixel. Returns `false` (and writes nothing) outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> bool {
        match self.byte_index(x, y) {
            Some(i) => {
                self.data[i..i + 4].copy_from_slice(&rgba);
                true
            }
            None => false,
        }
    }

    /// Convert into an [`image::RgbaImage`] for encoding.
    pub fn into_rgba_image(self) -> BlendkitResult<image::RgbaImage> {
        let Size { width, height } = self.size;
        let actual = self.data.len();
        image::RgbaImage::from_raw(width, height, self.data).ok_or(
            BlendkitError::InvalidImageBuffer {
                width,
                height,
                expected: Size::new(width, height).pixel_count() * 4,
                actual,
            },
        )
    }

    fn byte_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some(((y as usize) * (self.size.width as usize) + (x as usize)) * 4)
    }
}

impl TryFrom<image::RgbaImage> for Image {
    type Error = BlendkitError;

    fn try_from(img: image::RgbaImage) -> BlendkitResult<Self> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
