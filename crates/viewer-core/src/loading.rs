//! Loading-screen progress as a pure function of elapsed ticks.

use crate::constants::{LOADING_ASSETS, LOADING_INITIALIZING, LOADING_PREPARING};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingStage {
    Initializing,
    LoadingAssets,
    PreparingScene,
    Complete,
}

impl LoadingStage {
    pub fn caption(self) -> &'static str {
        match self {
            LoadingStage::Initializing => "Initializing...",
            LoadingStage::LoadingAssets => "Loading Assets...",
            LoadingStage::PreparingScene => "Preparing 3D Scene...",
            LoadingStage::Complete => "Ready!",
        }
    }

    fn next(self) -> Self {
        match self {
            LoadingStage::Initializing => LoadingStage::LoadingAssets,
            LoadingStage::LoadingAssets => LoadingStage::PreparingScene,
            LoadingStage::PreparingScene | LoadingStage::Complete => LoadingStage::Complete,
        }
    }

    /// (ceiling percent, increment per tick); `None` once complete.
    fn rate(self) -> Option<(f32, f32)> {
        match self {
            LoadingStage::Initializing => Some(LOADING_INITIALIZING),
            LoadingStage::LoadingAssets => Some(LOADING_ASSETS),
            LoadingStage::PreparingScene => Some(LOADING_PREPARING),
            LoadingStage::Complete => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadingProgress {
    pub percent: f32,
    pub stage: LoadingStage,
}

impl Default for LoadingProgress {
    fn default() -> Self {
        Self {
            percent: 0.0,
            stage: LoadingStage::Initializing,
        }
    }
}

impl LoadingProgress {
    /// Advance one frame.
    pub fn step(self) -> Self {
        let Some((ceiling, increment)) = self.stage.rate() else {
            return self;
        };
        let percent = (self.percent + increment).min(ceiling);
        let stage = if percent >= ceiling {
            self.stage.next()
        } else {
            self.stage
        };
        Self { percent, stage }
    }

    pub fn is_complete(&self) -> bool {
        self.stage == LoadingStage::Complete
    }

    /// Whole-number percentage for display.
    pub fn display_percent(&self) -> u32 {
        self.percent.clamp(0.0, 100.0).round() as u32
    }
}

pub fn progress_after(ticks: u32) -> LoadingProgress {
    let mut progress = LoadingProgress::default();
    for _ in 0..ticks {
        if progress.is_complete() {
            break;
        }
        progress = progress.step();
    }
    progress
}
