use crate::Color;
use crate::Error;
use crate::Surface;

/// one call issued against a [Surface]
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
    },
    Stroke,
    Fill,
    FillRect(f64, f64, f64, f64),
    SetFillStyle(Color),
    SetStrokeStyle(Color),
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BeginPath => write!(f, "beginPath()"),
            Self::MoveTo(x, y) => write!(f, "moveTo({}, {})", x, y),
            Self::LineTo(x, y) => write!(f, "lineTo({}, {})", x, y),
            Self::Arc {
                cx,
                cy,
                radius,
                start,
                end,
            } => write!(f, "arc({}, {}, {}, {}, {})", cx, cy, radius, start, end),
            Self::Stroke => write!(f, "stroke()"),
            Self::Fill => write!(f, "fill()"),
            Self::FillRect(x, y, w, h) => write!(f, "fillRect({}, {}, {}, {})", x, y, w, h),
            Self::SetFillStyle(c) => write!(f, "fillStyle = #{:08x}", c.0),
            Self::SetStrokeStyle(c) => write!(f, "strokeStyle = #{:08x}", c.0),
        }
    }
}

/// [Surface] which only records the issued commands
#[derive(Default, Debug)]
pub struct Recorder {
    commands: Vec<Command>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// drop all recorded commands and return them
    pub fn take(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// line segments of the recorded path commands as `(from, to)`
    pub fn segments(&self) -> Vec<((f64, f64), (f64, f64))> {
        let mut ret = Vec::new();
        let mut current = None;

        for cmd in &self.commands {
            match *cmd {
                Command::BeginPath => current = None,
                Command::MoveTo(x, y) => current = Some((x, y)),
                Command::LineTo(x, y) => {
                    if let Some(from) = current {
                        ret.push((from, (x, y)));
                    }
                    current = Some((x, y));
                }
                _ => {}
            }
        }

        ret
    }

    fn push(&mut self, cmd: Command) {
        log::trace!("{}", cmd);
        self.commands.push(cmd);
    }
}

impl Surface for Recorder {
    fn begin_path(&mut self) {
        self.push(Command::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push(Command::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(Command::LineTo(x, y));
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        self.push(Command::Arc {
            cx,
            cy,
            radius,
            start,
            end,
        });
    }

    fn stroke(&mut self) -> Result<(), Error> {
        self.push(Command::Stroke);
        Ok(())
    }

    fn fill(&mut self) -> Result<(), Error> {
        self.push(Command::Fill);
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), Error> {
        self.push(Command::FillRect(x, y, w, h));
        Ok(())
    }

    fn set_fill_style(&mut self, color: Color) {
        self.push(Command::SetFillStyle(color));
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.push(Command::SetStrokeStyle(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments() {
        let mut rec = Recorder::new();
        rec.begin_path();
        rec.line_to(1.0, 1.0);
        rec.move_to(0.0, 0.0);
        rec.line_to(1.0, 0.0);
        rec.line_to(1.0, 1.0);
        rec.begin_path();
        rec.line_to(5.0, 5.0);

        assert_eq!(
            rec.segments(),
            vec![((0.0, 0.0), (1.0, 0.0)), ((1.0, 0.0), (1.0, 1.0))]
        );
    }

    #[test]
    fn display() {
        assert_eq!(Command::MoveTo(1.0, 2.5).to_string(), "moveTo(1, 2.5)");
        assert_eq!(
            Command::SetFillStyle(Color::WHITE).to_string(),
            "fillStyle = #ffffffff"
        );
    }
}
