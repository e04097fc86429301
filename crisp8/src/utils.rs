#[cfg(test)]
pub mod testing {
    use core::fmt;
    use core::ops::RangeBounds;

    use crate::frame::{FrameView, HEIGHT, WIDTH};

    #[macro_export]
    macro_rules! assert_eq_2d {
        (x_range: $xrange:expr, y_range: $yrange:expr; $lhs:expr, $rhs:expr $(,)?) => {{
            let mut lhs_mask = crate::utils::testing::ImageMask::new();
            let mut rhs_mask = crate::utils::testing::ImageMask::new();
            lhs_mask.set_slice($xrange, $yrange, &$lhs);
            rhs_mask.set_slice($xrange, $yrange, &$rhs);
            assert_eq!(lhs_mask, rhs_mask);
        }};
    }

    #[derive(Copy, Clone, PartialEq, Eq, Hash)]
    pub struct ImageMask([[bool; WIDTH]; HEIGHT]);

    impl ImageMask {
        pub fn new() -> Self {
            Self([[false; WIDTH]; HEIGHT])
        }

        pub fn set_slice<T>(&mut self, range_x: T, range_y: T, other: &Self)
        where
            T: RangeBounds<usize>,
        {
            let width = self.0[0].len();
            let height = self.0.len();
            for x in 0..width {
                for y in 0..height {
                    if range_x.contains(&x) && range_y.contains(&y) {
                        self.0[y][x] = other.0[y][x];
                    }
                }
            }
        }
    }

    impl fmt::Debug for ImageMask {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let width = self.0[0].len() + 2;
            write!(f, "\n")?;
            for _ in 0..width {
                write!(f, "-")?;
            }
            write!(f, "\n")?;
            for row in &self.0 {
                write!(f, "|")?;
                row.iter()
                    .map(|&p| if p { write!(f, "#") } else { write!(f, " ") })
                    .fold(Ok(()), |acc, r| acc.and(r))?;
                write!(f, "|\n")?;
            }
            for _ in 0..width {
                write!(f, "-")?;
            }
            Ok(())
        }
    }

    pub trait ToMask {
        fn to_mask(&self) -> ImageMask;
    }

    /// Rows separated by whitespace, `#` marks a lit pixel
    impl ToMask for str {
        fn to_mask(&self) -> ImageMask {
            let mut mask = ImageMask::new();
            mask.0
                .iter_mut()
                .zip(self.split_whitespace())
                .for_each(|(m_row, c_row)| {
                    m_row
                        .iter_mut()
                        .zip(c_row.chars())
                        .for_each(|(m, c)| *m = c == '#')
                });
            mask
        }
    }

    impl<'a> ToMask for FrameView<'a> {
        fn to_mask(&self) -> ImageMask {
            let mut mask = ImageMask::new();
            self.iter_rows_as_bitslices()
                .zip(mask.0.iter_mut())
                .for_each(|(f_row, m_row)| {
                    m_row
                        .iter_mut()
                        .zip(f_row.iter())
                        .for_each(|(m, g)| *m = *g)
                });
            mask
        }
    }

    #[cfg(feature = "embedded-graphics")]
    impl<I> ToMask for I
    where
        I: Iterator<Item = embedded_graphics::drawable::Pixel<embedded_graphics::pixelcolor::BinaryColor>>
            + Clone,
    {
        fn to_mask(&self) -> ImageMask {
            use embedded_graphics::{drawable::Pixel, pixelcolor::BinaryColor};

            let mut mask = ImageMask::new();
            self.clone().for_each(|Pixel(point, color)| {
                if color == BinaryColor::On {
                    mask.0[point.y as usize][point.x as usize] = true;
                }
            });
            mask
        }
    }

    mod tests {
        use super::*;
        use crate::frame::Frame;

        #[test]
        fn to_image_mask() {
            let mut frame = Frame::new();
            frame.as_raw_mut()[0] = 0b1100_0000;
            frame.as_raw_mut()[WIDTH / 8] = 0b0100_0000;

            assert_eq!(frame.view().to_mask(), "##\n.#".to_mask());
            assert_eq!(Frame::new().view().to_mask(), ImageMask::new());
        }

        #[cfg(feature = "embedded-graphics")]
        #[test]
        fn raw_image_matches_view() {
            use embedded_graphics::image::IntoPixelIter;

            let mut frame = Frame::new();
            frame.as_raw_mut()[3] = 0b1010_0101;
            frame.as_raw_mut()[MEM_END - 1] = 0b0000_0001;

            assert_eq!(
                frame.view().as_raw_image().pixel_iter().to_mask(),
                frame.view().to_mask()
            );
        }

        const MEM_END: usize = WIDTH * HEIGHT / 8;
    }
}
