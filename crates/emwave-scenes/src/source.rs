use crate::error::SceneError;
use crate::frame::WaveFrame;
use crate::scene::{FrameStep, Scene};

/// Something that produces frames one at a time.
///
/// Returns `None` once the sequence is finished, which also tells a
/// `FrameProducer` to shut down.
pub trait FrameSource: Send + 'static {
    fn next_frame(&mut self) -> Option<WaveFrame>;
}

/// Walks a scene's frame schedule, rendering each frame on demand.
pub struct SceneFrameSource {
    scene: Scene,
    steps: Vec<FrameStep>,
    current: usize,
    looping: bool,
}

impl SceneFrameSource {
    /// Validates the scene up front so rendering a step cannot fail later
    /// on bad parameters.
    pub fn new(scene: Scene) -> Result<Self, SceneError> {
        scene.validate()?;
        let steps = scene.steps();
        Ok(Self { scene, steps, current: 0, looping: false })
    }

    /// Restart from the first frame instead of finishing.
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

impl FrameSource for SceneFrameSource {
    fn next_frame(&mut self) -> Option<WaveFrame> {
        if self.current >= self.steps.len() {
            if !self.looping || self.steps.is_empty() {
                return None;
            }
            self.current = 0;
        }

        let index = self.current;
        self.current += 1;

        match self.scene.render(index, self.steps[index]) {
            Ok(frame) => Some(frame),
            Err(e) => {
                log::error!("{} scene failed at frame {index}: {e}", self.scene.name());
                None
            }
        }
    }
}

impl Iterator for SceneFrameSource {
    type Item = WaveFrame;

    fn next(&mut self) -> Option<WaveFrame> {
        self.next_frame()
    }
}
