use crate::Error;
use crate::Model;
use canvasdemo_graphics::ball;
use canvasdemo_graphics::Surface;
use canvasdemo_graphics::Viewport;
use std::ops::ControlFlow;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    /// center of the ball, unit: pixels
    pub position_x: f64,
}

/// owns everything a tick needs: the model, its state and the surface
pub struct Animation<M, S> {
    model: M,
    state: AnimationState,
    surface: S,
    viewport: Viewport,
    ball: ball::Ball,
    ticks: u64,
}

impl<M, S> Animation<M, S>
where
    M: Model<State = AnimationState>,
    S: Surface,
{
    pub fn new(model: M, surface: S, viewport: Viewport, ball: ball::Ball) -> Self {
        Self {
            model,
            state: AnimationState::default(),
            surface,
            viewport,
            ball,
            ticks: 0,
        }
    }

    /// advance the model by one step and draw the resulting frame
    pub fn tick(&mut self) -> Result<(), Error> {
        self.model.step(&mut self.state);
        ball::draw_frame(
            &mut self.surface,
            &self.viewport,
            &self.ball,
            self.state.position_x,
        )?;
        self.ticks += 1;

        log::trace!("tick {}: x={}", self.ticks, self.state.position_x);
        Ok(())
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// number of completed ticks
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// fixed rate scheduler for [Animation::tick]
#[derive(Clone, Debug)]
pub struct Ticker {
    interval: std::time::Duration,
    realtime: bool,
    max_ticks: Option<u64>,
}

impl Ticker {
    pub fn new(interval: std::time::Duration) -> Self {
        Self {
            interval,
            realtime: true,
            max_ticks: None,
        }
    }

    /// when disabled, ticks run back to back without waiting
    pub fn realtime(mut self, realtime: bool) -> Self {
        self.realtime = realtime;
        self
    }

    /// stop after `max_ticks`, `None` runs forever
    pub fn max_ticks(mut self, max_ticks: Option<u64>) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// run ticks until the limit is reached or `on_tick` breaks
    ///
    /// In realtime mode tick `n` doesn't start before `n * interval` has
    /// passed since the start. Ticks that fell behind run without waiting.
    /// Returns the number of ticks that were run.
    pub fn run<M, S, F, E>(
        &self,
        animation: &mut Animation<M, S>,
        mut on_tick: F,
    ) -> Result<u64, E>
    where
        M: Model<State = AnimationState>,
        S: Surface,
        F: FnMut(&mut Animation<M, S>) -> Result<ControlFlow<()>, E>,
        E: From<Error>,
    {
        log::info!(
            "running: interval={:?} realtime={} max_ticks={:?}",
            self.interval,
            self.realtime,
            self.max_ticks
        );

        let tstart = std::time::Instant::now();
        let mut done = 0u64;

        while self.max_ticks.map_or(true, |max| done < max) {
            if self.realtime {
                let due = self.interval.mul_f64((done + 1) as f64);
                let elapsed = tstart.elapsed();
                if due > elapsed {
                    std::thread::sleep(due - elapsed);
                }
            }

            animation.tick()?;
            done += 1;

            if on_tick(animation)?.is_break() {
                log::debug!("stopped by callback");
                break;
            }
        }

        log::info!(
            "stopped after {} ticks in {:.3}s, x={}",
            done,
            tstart.elapsed().as_secs_f64(),
            animation.state().position_x
        );

        Ok(done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Linear;
    use crate::models::LinearParams;
    use canvasdemo_graphics::ball::Ball;
    use canvasdemo_graphics::Command;
    use canvasdemo_graphics::Recorder;

    fn recording_animation() -> Animation<Linear, Recorder> {
        Animation::new(
            LinearParams::default().to_model(),
            Recorder::new(),
            Viewport::new(800, 600),
            Ball::default(),
        )
    }

    #[test]
    fn position_after_ticks() {
        let mut anim = recording_animation();
        for _ in 0..250 {
            anim.tick().unwrap();
        }

        assert_eq!(anim.ticks(), 250);
        testlib::assert_scalar_eq(anim.state().position_x, 250.0 * 0.05);
    }

    #[test]
    fn clear_precedes_ball() {
        let mut anim = recording_animation();

        for _ in 0..3 {
            anim.tick().unwrap();
            let x = anim.state().position_x;
            let cmds = anim.surface_mut().take();

            let clear = cmds
                .iter()
                .position(|c| matches!(c, Command::FillRect(..)))
                .unwrap();
            let fill = cmds.iter().position(|c| *c == Command::Fill).unwrap();
            assert!(clear < fill);

            assert_eq!(cmds[clear], Command::FillRect(0.0, 0.0, 800.0, 600.0));
            let cx = cmds
                .iter()
                .find_map(|c| match c {
                    Command::Arc { cx, .. } => Some(*cx),
                    _ => None,
                })
                .unwrap();
            assert_eq!(cx, x);
        }
    }

    #[test]
    fn ticker_limit() {
        let mut anim = recording_animation();
        let mut seen = 0;

        let done = Ticker::new(std::time::Duration::from_millis(1))
            .realtime(false)
            .max_ticks(Some(40))
            .run(&mut anim, |_| {
                seen += 1;
                Ok::<_, Error>(ControlFlow::Continue(()))
            })
            .unwrap();

        assert_eq!(done, 40);
        assert_eq!(seen, 40);
        assert_eq!(anim.ticks(), 40);
        testlib::assert_scalar_eq(anim.state().position_x, 40.0 * 0.05);
    }

    #[test]
    fn ticker_break() {
        let mut anim = recording_animation();

        let done = Ticker::new(std::time::Duration::from_millis(1))
            .realtime(false)
            .run(&mut anim, |a| {
                Ok::<_, Error>(if a.ticks() == 7 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                })
            })
            .unwrap();

        assert_eq!(done, 7);
    }

    #[test]
    fn ticker_realtime_pacing() {
        let mut anim = recording_animation();
        let interval = std::time::Duration::from_millis(2);

        let tstart = std::time::Instant::now();
        Ticker::new(interval)
            .max_ticks(Some(10))
            .run(&mut anim, |_| Ok::<_, Error>(ControlFlow::Continue(())))
            .unwrap();

        assert!(tstart.elapsed() >= interval * 10);
    }
}
