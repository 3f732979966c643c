use serde::Serialize;

use super::types::Event;

/// Frame stride used when none is configured.
pub const DEFAULT_FRAME_STRIDE: usize = 10;

/// A group of consecutive events that a renderer draws as one image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub index: usize,
    /// Finalizations seen up to and including this frame.
    pub step: usize,
    pub events: Vec<Event>,
}

/// Lazily groups an event stream into frames.
///
/// A frame closes after every `stride` node finalizations, on run termination,
/// and when the underlying stream ends with events still buffered.
pub struct FrameSampler<I> {
    events: I,
    stride: usize,
    index: usize,
    step: usize,
}

impl<I: Iterator<Item = Event>> FrameSampler<I> {
    /// A stride of 0 is treated as 1.
    pub fn new(events: I, stride: usize) -> Self {
        Self {
            events,
            stride: stride.max(1),
            index: 0,
            step: 0,
        }
    }
}

impl<I: Iterator<Item = Event>> Iterator for FrameSampler<I> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let mut buffer = Vec::new();
        for event in self.events.by_ref() {
            buffer.push(event);
            let close = match event {
                Event::NodeFinalized { .. } => {
                    self.step += 1;
                    self.step % self.stride == 0
                }
                Event::RunTerminated { .. } => true,
                Event::EdgeClassified { .. } => false,
            };
            if close {
                break;
            }
        }
        if buffer.is_empty() {
            return None;
        }
        let frame = Frame {
            index: self.index,
            step: self.step,
            events: buffer,
        };
        self.index += 1;
        Some(frame)
    }
}
