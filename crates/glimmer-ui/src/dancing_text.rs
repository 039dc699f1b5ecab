//! A row of letters that bounce one after another, used as a lightweight
//! loading label.

use std::cell::Cell;

use glimmer_animation::{AnimationChannel, AnimationDriver, AnimationSpec, Easing, Lerp};
use glimmer_core::{Platform, RuntimeHandle};
use glimmer_graphics::Color;

use crate::node::VisualNode;

/// Shown when no letters are configured.
pub const DEFAULT_LETTERS: &str = "Chain";

/// Length of each leg of a letter's bounce.
const STEP_MS: u64 = 200;
/// Delay between consecutive letters starting their bounce.
const STAGGER_MS: u64 = 200;
const BOUNCE_HEIGHT: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub bold: bool,
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            bold: true,
            color: Color::from_rgb_u8(0x4c, 0xaf, 0x50),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DancingTextConfig {
    pub letters: String,
    pub animated: bool,
    pub text_style: TextStyle,
}

impl DancingTextConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn letters(mut self, letters: impl Into<String>) -> Self {
        self.letters = letters.into();
        self
    }

    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn text_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }
}

/// Vertical offset of one letter `elapsed_ms` into its own bounce.
///
/// The bounce rises to `-5`, drops to `5` and settles back at `0`, each leg
/// taking 200ms on an ease-in-out curve. Outside the bounce the letter rests.
pub fn bounce_offset(elapsed_ms: f32) -> f32 {
    let step = STEP_MS as f32;
    if !(0.0..3.0 * step).contains(&elapsed_ms) {
        return 0.0;
    }
    let (from, to, leg_start) = if elapsed_ms < step {
        (0.0, -BOUNCE_HEIGHT, 0.0)
    } else if elapsed_ms < 2.0 * step {
        (-BOUNCE_HEIGHT, BOUNCE_HEIGHT, step)
    } else {
        (BOUNCE_HEIGHT, 0.0, 2.0 * step)
    };
    let fraction = Easing::EASE_IN_OUT.transform((elapsed_ms - leg_start) / step);
    from.lerp(&to, fraction)
}

/// Letters bounce in turn, one stagger apart, and the whole wave repeats
/// once the last letter has settled.
///
/// A single looping phase drives every letter, so stopping it freezes the
/// wave in one call.
pub struct DancingText {
    letters: Vec<char>,
    animated: bool,
    text_style: TextStyle,
    cycle_ms: u64,
    phase: AnimationChannel,
    mounted: Cell<bool>,
}

impl DancingText {
    pub fn new(config: DancingTextConfig, runtime: RuntimeHandle, platform: Platform) -> Self {
        let letters: Vec<char> = if config.letters.is_empty() {
            DEFAULT_LETTERS.chars().collect()
        } else {
            config.letters.chars().collect()
        };
        let stagger_total = STAGGER_MS * (letters.len() as u64).saturating_sub(1);
        let driver = AnimationDriver::for_platform(platform);
        Self {
            cycle_ms: 3 * STEP_MS + stagger_total,
            letters,
            animated: config.animated,
            text_style: config.text_style,
            phase: AnimationChannel::new("dancePhase", 0.0, runtime.frame_clock(), driver),
            mounted: Cell::new(false),
        }
    }

    /// Starts the wave when animation is enabled. Repeated mounts are ignored.
    pub fn mount(&self) {
        if self.mounted.replace(true) {
            return;
        }
        if self.animated {
            log::debug!("dancing text started, {}ms per wave", self.cycle_ms);
            self.phase
                .start_loop(0.0, 1.0, AnimationSpec::linear(self.cycle_ms));
        }
    }

    pub fn unmount(&self) {
        if self.phase.stop() {
            log::debug!("dancing text stopped");
        }
    }

    pub fn is_animating(&self) -> bool {
        self.phase.is_running()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Duration of one full wave across every letter.
    pub fn cycle_ms(&self) -> u64 {
        self.cycle_ms
    }

    pub fn letter_offset(&self, index: usize) -> f32 {
        let wave_ms = self.phase.value() * self.cycle_ms as f32;
        bounce_offset(wave_ms - (STAGGER_MS * index as u64) as f32)
    }

    pub fn render(&self) -> VisualNode {
        let driver = self.phase.driver();
        let children = self
            .letters
            .iter()
            .enumerate()
            .map(|(index, letter)| VisualNode::Text {
                text: letter.to_string(),
                font_size: self.text_style.font_size,
                bold: self.text_style.bold,
                color: self.text_style.color,
                translate_y: self.letter_offset(index),
                driver,
            })
            .collect();
        VisualNode::Row { children }
    }
}

#[cfg(test)]
#[path = "tests/dancing_text_tests.rs"]
mod tests;
