//! Frame animation playback for spritesheet-backed entities.
//!
//! Each entity carries an [`Animator`] holding its named clips. Playback
//! advances on wall-clock time and writes the current frame into the
//! sprite's texture atlas index.

use std::collections::HashMap;

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Fallback rate for clips registered without an explicit frame rate.
pub const DEFAULT_FPS: f32 = 60.0;

/// A named sequence of atlas frames.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub frames: Vec<usize>,
    pub fps: f32,
    pub looping: bool,
}

impl AnimationClip {
    pub fn new(frames: &[usize], fps: f32, looping: bool) -> Self {
        Self {
            frames: frames.to_vec(),
            fps,
            looping,
        }
    }

    /// Single frame held until another clip is played
    pub fn still(frame: usize) -> Self {
        Self::new(&[frame], DEFAULT_FPS, false)
    }

    /// Seconds per frame
    pub fn frame_duration(&self) -> f32 {
        if self.fps > 0.0 {
            1.0 / self.fps
        } else {
            1.0 / DEFAULT_FPS
        }
    }
}

/// Component for clip playback on an atlas sprite.
#[derive(Component, Debug, Clone, Default)]
pub struct Animator {
    clips: HashMap<&'static str, AnimationClip>,
    current: Option<&'static str>,
    cursor: usize,
    frame_timer: f32,
    finished: bool,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clip(mut self, name: &'static str, clip: AnimationClip) -> Self {
        self.clips.insert(name, clip);
        self
    }

    /// Name of the clip currently playing, if any
    pub fn current(&self) -> Option<&'static str> {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Start a clip from its first frame, even if it is already playing.
    /// Returns false for an unregistered name.
    pub fn play(&mut self, name: &'static str) -> bool {
        if !self.clips.contains_key(name) {
            warn!("Animator has no clip named '{}'", name);
            return false;
        }
        self.current = Some(name);
        self.cursor = 0;
        self.frame_timer = 0.0;
        self.finished = false;
        true
    }

    /// Play `name` unless it is already the current clip.
    /// Returns true when playback switched.
    pub fn play_if_changed(&mut self, name: &'static str) -> bool {
        if self.current == Some(name) {
            return false;
        }
        self.play(name)
    }

    /// Atlas index of the frame on screen
    pub fn frame(&self) -> Option<usize> {
        let clip = self.clips.get(self.current?)?;
        clip.frames.get(self.cursor).copied()
    }

    /// Advance playback by `dt` seconds.
    /// Returns true on the tick a non-looping clip runs past its last frame.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.finished {
            return false;
        }
        let Some(clip) = self.current.and_then(|name| self.clips.get(name)) else {
            return false;
        };

        let frame_duration = clip.frame_duration();
        let frame_count = clip.frames.len();
        let looping = clip.looping;

        self.frame_timer += dt;
        while self.frame_timer >= frame_duration {
            self.frame_timer -= frame_duration;
            self.cursor += 1;

            if self.cursor >= frame_count {
                if looping {
                    self.cursor = 0;
                } else {
                    self.cursor = frame_count.saturating_sub(1);
                    self.finished = true;
                    return true;
                }
            }
        }
        false
    }
}

/// Message fired when a non-looping clip completes.
#[derive(Debug)]
pub struct AnimationFinished {
    pub entity: Entity,
    pub clip: &'static str,
}

impl Message for AnimationFinished {}

/// System that advances every animator and mirrors its frame onto the sprite.
pub fn update_animations(
    time: Res<Time>,
    mut query: Query<(Entity, &mut Animator, &mut Sprite)>,
    mut finished_events: MessageWriter<AnimationFinished>,
) {
    let dt = time.delta_secs();

    for (entity, mut animator, mut sprite) in &mut query {
        if animator.advance(dt) {
            if let Some(clip) = animator.current() {
                finished_events.write(AnimationFinished { entity, clip });
            }
        }

        let Some(frame) = animator.frame() else {
            continue;
        };
        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            if atlas.index != frame {
                atlas.index = frame;
            }
        }
    }
}
