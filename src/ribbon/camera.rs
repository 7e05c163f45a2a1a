// SPDX-License-Identifier: MPL-2.0
//! Live preview configuration for the camera tile.
//!
//! The host owns the capture pipeline and pushes preview frames here. The
//! values are kept on the view, not on the tile: tiles are rebuilt every
//! frame, so parameters set while the camera tile is hidden or scrolled away
//! still apply as soon as it is drawn again.

use super::transform::CameraOrientation;
use iced::widget::image::Handle;
use iced::ContentFit;

/// How the preview frame fills the square tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewFit {
    /// Crop to fill the tile.
    #[default]
    Fill,
    /// Letterbox inside the tile.
    Fit,
}

impl PreviewFit {
    #[must_use]
    pub fn content_fit(self) -> ContentFit {
        match self {
            PreviewFit::Fill => ContentFit::Cover,
            PreviewFit::Fit => ContentFit::Contain,
        }
    }
}

/// Preview output pushed by the capture pipeline.
#[derive(Debug, Clone, Default)]
pub struct CameraOutputParameters {
    /// Latest preview frame, if the pipeline is running.
    pub frame: Option<Handle>,
    pub fit: PreviewFit,
}

/// Camera tile configuration kept across tile rebuilds.
#[derive(Debug, Clone, Default)]
pub struct CameraState {
    parameters: Option<CameraOutputParameters>,
    orientation: CameraOrientation,
    reloads: u64,
}

impl CameraState {
    pub fn set_parameters(&mut self, parameters: CameraOutputParameters) {
        self.parameters = Some(parameters);
    }

    pub fn set_orientation(&mut self, orientation: CameraOrientation) {
        self.orientation = orientation;
    }

    pub fn parameters(&self) -> Option<&CameraOutputParameters> {
        self.parameters.as_ref()
    }

    /// The current preview frame, if any.
    pub fn frame(&self) -> Option<&Handle> {
        self.parameters.as_ref().and_then(|p| p.frame.as_ref())
    }

    #[must_use]
    pub fn orientation(&self) -> CameraOrientation {
        self.orientation
    }

    /// Number of times the camera tile was reloaded.
    #[must_use]
    pub fn reloads(&self) -> u64 {
        self.reloads
    }

    pub(crate) fn mark_reloaded(&mut self) {
        self.reloads += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_survive_without_a_tile() {
        let mut state = CameraState::default();
        assert!(state.frame().is_none());

        state.set_parameters(CameraOutputParameters {
            frame: Some(Handle::from_rgba(1, 1, vec![255, 255, 255, 255])),
            fit: PreviewFit::Fit,
        });
        state.set_orientation(CameraOrientation::LandscapeRight);

        assert!(state.frame().is_some());
        assert_eq!(state.parameters().map(|p| p.fit), Some(PreviewFit::Fit));
        assert_eq!(state.orientation(), CameraOrientation::LandscapeRight);
    }

    #[test]
    fn fit_maps_to_content_fit() {
        assert_eq!(PreviewFit::Fill.content_fit(), ContentFit::Cover);
        assert_eq!(PreviewFit::Fit.content_fit(), ContentFit::Contain);
    }
}
