use crate::utils::CairoEx;
use crate::Color;
use crate::Error;

/// 2D drawing surface with canvas style path and fill/stroke primitives
pub trait Surface {
    /// start a new, empty path
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// add a circular arc, angles in radians, clockwise in screen space
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64);

    /// stroke the current path with the stroke style, the path is kept
    fn stroke(&mut self) -> Result<(), Error>;
    /// fill the current path with the fill style, the path is kept
    fn fill(&mut self) -> Result<(), Error>;
    /// fill a rectangle with the fill style without touching the current path
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), Error>;

    fn set_fill_style(&mut self, color: Color);
    fn set_stroke_style(&mut self, color: Color);
}

/// [Surface] backed by a cairo context
pub struct CairoSurface {
    cr: cairo::Context,
    fill_style: Color,
    stroke_style: Color,
}

impl CairoSurface {
    pub fn new(cr: cairo::Context) -> Self {
        // canvas defaults
        cr.set_line_width(1.0);

        Self {
            cr,
            fill_style: Color::BLACK,
            stroke_style: Color::BLACK,
        }
    }

    /// create a context drawing onto `surface`
    pub fn for_surface(surface: &cairo::ImageSurface) -> Result<Self, Error> {
        Ok(Self::new(cairo::Context::new(surface)?))
    }

    pub fn context(&self) -> &cairo::Context {
        &self.cr
    }

    /// size of the target surface in user space coordinates
    pub fn size(&self) -> Result<(f64, f64), Error> {
        self.cr.surface_sz_user()
    }
}

impl Surface for CairoSurface {
    fn begin_path(&mut self) {
        self.cr.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.cr.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.cr.line_to(x, y);
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        self.cr.arc(cx, cy, radius, start, end);
    }

    fn stroke(&mut self) -> Result<(), Error> {
        self.cr.set_source_color(self.stroke_style);
        self.cr.stroke_preserve()?;
        Ok(())
    }

    fn fill(&mut self) -> Result<(), Error> {
        self.cr.set_source_color(self.fill_style);
        self.cr.fill_preserve()?;
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), Error> {
        let path = self.cr.copy_path()?;

        self.cr.new_path();
        self.cr.rectangle(x, y, w, h);
        self.cr.set_source_color(self.fill_style);
        self.cr.fill()?;

        self.cr.append_path(&path);
        Ok(())
    }

    fn set_fill_style(&mut self, color: Color) {
        self.fill_style = color;
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.stroke_style = color;
    }
}
