use crate::Color;
use crate::Error;
use crate::Surface;
use crate::Viewport;

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ball {
    /// unit: pixels
    #[serde(default = "Ball::default_radius")]
    pub radius: f64,
    /// vertical position of the center, unit: pixels
    #[serde(default = "Ball::default_center_y")]
    pub center_y: f64,
    /// color used to clear the frame
    #[serde(default = "Ball::default_background")]
    pub background: Color,
    #[serde(default)]
    pub color: Color,
}

impl Ball {
    fn default_radius() -> f64 {
        50.0
    }

    fn default_center_y() -> f64 {
        100.0
    }

    fn default_background() -> Color {
        Color::WHITE
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            radius: Self::default_radius(),
            center_y: Self::default_center_y(),
            background: Self::default_background(),
            color: Color::BLACK,
        }
    }
}

/// clear the whole viewport and draw the ball at `position_x`
pub fn draw_frame<S: Surface + ?Sized>(
    surface: &mut S,
    viewport: &Viewport,
    ball: &Ball,
    position_x: f64,
) -> Result<(), Error> {
    // clear
    surface.set_fill_style(ball.background);
    surface.fill_rect(
        0.0,
        0.0,
        f64::from(viewport.width),
        f64::from(viewport.height),
    )?;

    // ball
    surface.begin_path();
    surface.arc(
        position_x,
        ball.center_y,
        ball.radius,
        0.0,
        2.0 * std::f64::consts::PI,
    );
    surface.set_fill_style(ball.color);
    surface.fill()
}
