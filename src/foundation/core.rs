use crate::foundation::error::{PiglensError, PiglensResult};

pub use kurbo::{Affine, Point, Vec2};

/// Frame dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Mutable RGB8 frame buffer, row-major, 3 channels.
///
/// A frame is exclusively owned by the pipeline for the duration of one
/// `apply_level` call; passes mutate it in place and never change its
/// dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgb {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FrameRgb {
    /// Create a black frame of the given dimensions.
    pub fn new(width: u32, height: u32) -> PiglensResult<Self> {
        if width == 0 || height == 0 {
            return Err(PiglensError::validation("frame dimensions must be > 0"));
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(3))
            .ok_or_else(|| PiglensError::validation("frame buffer size overflow"))?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Wrap an existing row-major RGB8 buffer.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> PiglensResult<Self> {
        if width == 0 || height == 0 {
            return Err(PiglensError::validation("frame dimensions must be > 0"));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(3))
            .ok_or_else(|| PiglensError::validation("frame buffer size overflow"))?;
        if data.len() != expected {
            return Err(PiglensError::validation(
                "frame buffer must be width*height*3 bytes",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Frame dimensions as a [`Canvas`].
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Raw pixel bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw pixel bytes. The length is fixed for the frame's lifetime.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the frame, returning the raw buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    pub(crate) fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y * self.width + x) as usize) * 3
    }

    /// Read one RGB pixel. Caller guarantees `x < width`, `y < height`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = self.pixel_index(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Write one RGB pixel. Caller guarantees `x < width`, `y < height`.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, px: [u8; 3]) {
        let i = self.pixel_index(x, y);
        self.data[i..i + 3].copy_from_slice(&px);
    }
}

/// Discrete pipeline level in `[0, 5]`, owned by an external state holder.
///
/// The engine only reads it: the level is sampled once before composing each
/// frame's pass list.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct FilterLevel(u8);

impl FilterLevel {
    /// Highest defined level.
    pub const MAX: FilterLevel = FilterLevel(5);

    /// Level 0, the identity pipeline.
    pub const ZERO: FilterLevel = FilterLevel(0);

    /// Validated construction from a raw integer.
    pub fn new(level: u8) -> PiglensResult<Self> {
        if level > Self::MAX.0 {
            return Err(PiglensError::validation(format!(
                "filter level must be in [0, {}], got {level}",
                Self::MAX.0
            )));
        }
        Ok(Self(level))
    }

    /// The next level, saturating at [`FilterLevel::MAX`].
    pub fn increased(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX.0))
    }

    /// Raw level value.
    pub fn as_u8(self) -> u8 {
        self.0
    }

    pub(crate) fn as_usize(self) -> usize {
        usize::from(self.0)
    }
}
