//! FrameLoop: renders, displays, pauses, advances the angles.

use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, info};

use crate::core::Frame;
use crate::pacer::Pacer;
use crate::term::DisplaySink;
use crate::types::{Angles, LoopConfig, TorusConfig};

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopStats {
    pub frames: u32,
    /// Angles the next frame would have used.
    pub final_angles: Angles,
    pub elapsed: Duration,
}

/// Drive `on_frame` through the angle schedule.
///
/// For each of `schedule.frames` iterations: call `on_frame` with the current
/// angles, pause for `schedule.frame_delay_ms`, then advance A and B. Angles
/// are never wrapped. An error from `on_frame` stops the loop.
pub fn drive<P, F>(schedule: &LoopConfig, pacer: &mut P, mut on_frame: F) -> Result<LoopStats>
where
    P: Pacer + ?Sized,
    F: FnMut(Angles) -> Result<()>,
{
    let started = Instant::now();
    let delay = Duration::from_millis(schedule.frame_delay_ms);
    let mut angles = schedule.initial;

    for i in 0..schedule.frames {
        debug!("frame {i}: A={:.2} B={:.2}", angles.a, angles.b);
        on_frame(angles)?;
        pacer.pause(delay);
        angles.advance(schedule.a_step, schedule.b_step);
    }

    Ok(LoopStats {
        frames: schedule.frames,
        final_angles: angles,
        elapsed: started.elapsed(),
    })
}

/// The animation: a fixed torus, a fixed schedule, and one reusable frame.
pub struct FrameLoop {
    torus: TorusConfig,
    schedule: LoopConfig,
    frame: Frame,
}

impl FrameLoop {
    pub fn new(torus: TorusConfig, schedule: LoopConfig) -> Self {
        let frame = Frame::for_config(&torus);
        Self {
            torus,
            schedule,
            frame,
        }
    }

    pub fn torus(&self) -> &TorusConfig {
        &self.torus
    }

    pub fn schedule(&self) -> &LoopConfig {
        &self.schedule
    }

    /// Render every scheduled frame into `sink`, pausing with `pacer`.
    pub fn run<S, P>(&mut self, sink: &mut S, pacer: &mut P) -> Result<LoopStats>
    where
        S: DisplaySink + ?Sized,
        P: Pacer + ?Sized,
    {
        info!(
            "starting: {} frames, {} ms apart, {}x{} grid",
            self.schedule.frames,
            self.schedule.frame_delay_ms,
            self.torus.width,
            self.torus.height
        );

        let torus = &self.torus;
        let frame = &mut self.frame;
        let stats = drive(&self.schedule, pacer, |angles| {
            frame.render_into(torus, angles);
            sink.present(frame)
        })?;

        info!(
            "finished: {} frames in {:.2?}",
            stats.frames, stats.elapsed
        );
        Ok(stats)
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new(TorusConfig::default(), LoopConfig::default())
    }
}
