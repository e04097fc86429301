use core::fmt;

use bitvec::prelude::*;
#[cfg(feature = "embedded-graphics")]
use embedded_graphics::{image::ImageRaw, pixelcolor::BinaryColor};

pub const WIDTH: usize = 64;
pub const HEIGHT: usize = 32;
pub(crate) const MEM_LENGTH: usize = WIDTH * HEIGHT / 8;

/// An opaque struct holding frame of the CHIP-8 display
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Frame([u8; MEM_LENGTH]);

/// A shared view over a `Frame`
///
/// Has different accessors for the content of frames, which can be used independently
/// to fulfill the needs.
///
/// Each pixel is represented either by a corresponding bit being set, or by `true` value.
/// Internally, the data is stored in a form of concatenating rows from top to bottom of the frame.
/// Rows are represented as an individual bits of continuous memory, matching the state of pixels
/// from left to the right.
///
/// The `Display` impl renders one text line per row, `#` for a lit pixel and `.` otherwise.
///
/// #Note:
/// Can return ImageRaw instance with `embedded-graphics` feature on.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct FrameView<'a>(&'a [u8; MEM_LENGTH]);

impl<'a> FrameView<'a> {
    /// View the raw memory of a frame
    pub fn as_raw(&self) -> &[u8] {
        self.0
    }

    /// Create an immutable copy of a frame
    pub fn copy_frame(self) -> Frame {
        Frame(*self.0)
    }

    /// Access frame's bits by indexes
    pub fn get_bit(&self, x: usize, y: usize) -> Option<&bool> {
        self.iter_rows_as_bitslices()
            .nth(y)
            .map(|row| row.get(x))
            .flatten()
    }

    /// Whether pixel at `(x, y)` is lit, out of bounds pixels never are
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.get_bit(x, y).copied().unwrap_or(false)
    }

    /// Count of lit pixels
    pub fn count_set(&self) -> usize {
        self.0.iter().map(|byte| byte.count_ones() as usize).sum()
    }

    /// Get iterator over rows in a form of a `BitSlice`s
    pub fn iter_rows_as_bitslices(&self) -> impl Iterator<Item = &'a BitSlice<Msb0, u8>> {
        self.0.chunks(WIDTH / 8).map(|row| row.view_bits::<Msb0>())
    }

    /// Get `ImageRaw` structure from frame's data
    #[cfg(feature = "embedded-graphics")]
    pub fn as_raw_image(&self) -> ImageRaw<'_, BinaryColor> {
        ImageRaw::new(self.as_raw(), WIDTH as u32, HEIGHT as u32)
    }
}

impl<'a> fmt::Display for FrameView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows_as_bitslices() {
            for bit in row.iter() {
                f.write_str(if *bit { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl Frame {
    pub(crate) fn new() -> Self {
        Self([0; MEM_LENGTH])
    }

    /// Get view over frame
    pub fn view(&self) -> FrameView<'_> {
        FrameView(&self.0)
    }

    pub(crate) fn clear(&mut self) {
        self.0 = [0; MEM_LENGTH];
    }

    /// Flip pixel at `(x, y)` when `val` is set, returns the pixel's previous state
    pub(crate) fn xor_bit(&mut self, x: usize, y: usize, val: bool) -> Result<bool, &'static str> {
        self.iter_rows_as_bitslices_mut()
            .nth(y)
            .map(|row| {
                row.get_mut(x).map(|mut bit| {
                    let was = *bit;
                    *bit ^= val;
                    was
                })
            })
            .flatten()
            .ok_or("Pixel index out of bounds")
    }

    pub(crate) fn iter_rows_as_bitslices_mut(
        &mut self,
    ) -> impl Iterator<Item = &mut BitSlice<Msb0, u8>> {
        self.0
            .chunks_mut(WIDTH / 8)
            .map(|row| row.view_bits_mut::<Msb0>())
    }
}

#[cfg(test)]
impl Frame {
    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

#[cfg(test)]
mod frame_test {
    use super::*;

    #[test]
    fn get_bit() {
        let mut frame = Frame::new();
        frame.as_raw_mut()[0] = 0b1000_0000;

        assert_eq!(frame.view().get_bit(0, 0), Some(&true));
        assert_eq!(frame.view().get_bit(1, 0), Some(&false));
        assert_eq!(frame.view().get_bit(0, 1), Some(&false));
        assert_eq!(frame.view().get_bit(WIDTH, 0), None);
        assert_eq!(frame.view().get_bit(0, HEIGHT), None);
    }

    #[test]
    fn xor_bit() {
        let mut frame = Frame::new();
        assert_eq!(frame.xor_bit(0, 0, false), Ok(false));
        assert_eq!(frame.view().get_bit(0, 0), Some(&false));
        assert_eq!(frame.xor_bit(0, 0, true), Ok(false));
        assert_eq!(frame.view().get_bit(0, 0), Some(&true));
        assert_eq!(frame.xor_bit(0, 0, false), Ok(true));
        assert_eq!(frame.view().get_bit(0, 0), Some(&true));
        assert_eq!(frame.xor_bit(0, 0, true), Ok(true));
        assert_eq!(frame.view().get_bit(0, 0), Some(&false));
        assert_eq!(frame.xor_bit(WIDTH, 0, true), Err("Pixel index out of bounds"));
    }

    #[test]
    fn clear_and_count() {
        let mut frame = Frame::new();
        frame.xor_bit(63, 31, true).unwrap();
        frame.xor_bit(5, 7, true).unwrap();
        assert_eq!(frame.view().count_set(), 2);
        assert!(frame.view().is_set(63, 31));
        frame.clear();
        assert_eq!(frame.view().count_set(), 0);
    }
}
