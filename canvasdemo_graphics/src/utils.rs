use crate::Color;
use crate::Error;

pub trait CairoEx {
    /// size of the target surface in user space coordinates
    fn surface_sz_user(&self) -> Result<(f64, f64), Error>;
    fn set_source_color(&self, color: Color);
}

impl CairoEx for cairo::Context {
    fn surface_sz_user(&self) -> Result<(f64, f64), Error> {
        let (x1, y1, x2, y2) = self.clip_extents()?;
        Ok((x2 - x1, y2 - y1))
    }

    fn set_source_color(&self, color: Color) {
        self.set_source_rgba(color.r(), color.g(), color.b(), color.a());
    }
}

/// read one pixel of an ARGB32 image surface as `0xRRGGBBAA`
///
/// The surface must not be referenced by a context anymore.
pub fn pixel_at(surface: &mut cairo::ImageSurface, x: i32, y: i32) -> Result<Color, Error> {
    if x < 0 || y < 0 || x >= surface.width() || y >= surface.height() {
        return Err(Error::OutOfBounds(x, y));
    }

    surface.flush();
    let stride = surface.stride() as usize;
    let data = surface.data()?;

    let off = y as usize * stride + x as usize * 4;
    let argb = u32::from_ne_bytes([data[off], data[off + 1], data[off + 2], data[off + 3]]);

    Ok(Color((argb << 8) | (argb >> 24)))
}

#[cfg(test)]
mod tests {
    use super::pixel_at;
    use crate::Error;
    use crate::Viewport;

    #[test]
    fn pixel_out_of_bounds() {
        let mut image = Viewport::new(4, 3).create_surface().unwrap();

        assert!(pixel_at(&mut image, 3, 2).is_ok());
        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 3), (i32::MAX, i32::MAX)] {
            assert!(matches!(
                pixel_at(&mut image, x, y),
                Err(Error::OutOfBounds(..))
            ));
        }
    }
}
