use crate::Error;
use crate::Surface;

/// head leg offset relative to the shaft length, both in x and y
pub const ARROW_HEAD_SIZE: f64 = 3.0 / 10.0;

/// draw an arrow from `(base_x, base_y)` to `(base_x + length, base_y)`
///
/// The head consists of two legs going back from the tip at 45°. A negative
/// `length` points the arrow to the left. The path is stroked with the current
/// stroke style.
pub fn draw_arrow<S: Surface + ?Sized>(
    surface: &mut S,
    base_x: f64,
    base_y: f64,
    length: f64,
) -> Result<(), Error> {
    let tip_x = base_x + length;
    let tip_y = base_y;
    let head_offset = ARROW_HEAD_SIZE * length;

    surface.begin_path();

    // shaft
    surface.move_to(base_x, base_y);
    surface.line_to(tip_x, tip_y);

    // head
    surface.move_to(tip_x, tip_y);
    surface.line_to(tip_x - head_offset, tip_y - head_offset);
    surface.move_to(tip_x, tip_y);
    surface.line_to(tip_x - head_offset, tip_y + head_offset);

    surface.stroke()
}
