//! Studio state: the avatar being edited, the feedback slot and export.

use std::path::{Path, PathBuf};

use forge_common::{Feedback, FeedbackBoard};
use forge_config::sliders::BEARD_LABEL;
use forge_config::{AvatarConfig, AvatarEdit, SLIDERS};
use forge_renderer::{CaptureError, EncodedImage};
use rand::Rng;
use tracing::{info, warn};

pub const RESET_MESSAGE: &str = "Avatar restaurado para o modelo base.";
pub const RANDOMIZE_MESSAGE: &str = "Novo avatar gerado com sucesso!";
pub const EXPORT_OK_MESSAGE: &str = "Imagem 4K do avatar exportada!";
pub const EXPORT_FAILED_MESSAGE: &str = "Não foi possível exportar. Tente novamente.";

pub struct Studio {
    avatar: AvatarConfig,
    feedback: FeedbackBoard,
    output_dir: PathBuf,
    file_prefix: String,
}

impl Studio {
    pub fn new(output_dir: impl Into<PathBuf>, file_prefix: impl Into<String>) -> Self {
        Self {
            avatar: AvatarConfig::default(),
            feedback: FeedbackBoard::new(),
            output_dir: output_dir.into(),
            file_prefix: file_prefix.into(),
        }
    }

    pub fn avatar(&self) -> &AvatarConfig {
        &self.avatar
    }

    pub fn feedback(&self) -> &FeedbackBoard {
        &self.feedback
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Replace the avatar with one edit applied. Edits are silent.
    pub fn edit(&mut self, edit: AvatarEdit) {
        self.avatar = self.avatar.apply(edit);
    }

    pub fn reset(&mut self) {
        self.avatar = AvatarConfig::default();
        self.feedback.show(Feedback::info(RESET_MESSAGE));
    }

    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.avatar = forge_config::randomize(rng);
        self.feedback.show(Feedback::info(RANDOMIZE_MESSAGE));
    }

    /// Hand a capture result to the file system.
    ///
    /// Failures never propagate: a missing or failed capture and a failed
    /// write all end in the retry message and `None`.
    pub fn export(
        &mut self,
        capture: Result<EncodedImage, CaptureError>,
        timestamp_millis: i64,
    ) -> Option<PathBuf> {
        let image = match capture {
            Ok(image) => image,
            Err(e) => {
                warn!(error = %e, "Capture failed");
                self.feedback.show(Feedback::error(EXPORT_FAILED_MESSAGE));
                return None;
            }
        };

        let path = self
            .output_dir
            .join(EncodedImage::file_name(&self.file_prefix, timestamp_millis));
        match std::fs::write(&path, &image.bytes) {
            Ok(()) => {
                info!(
                    path = %path.display(),
                    width = image.width,
                    height = image.height,
                    "Exported avatar"
                );
                self.feedback.show(Feedback::info(EXPORT_OK_MESSAGE));
                Some(path)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to write export");
                self.feedback.show(Feedback::error(EXPORT_FAILED_MESSAGE));
                None
            }
        }
    }

    /// Slider labels with their current knob positions, e.g. `Altura 50%`.
    pub fn slider_summary(&self) -> String {
        let beard = if self.avatar.beard { "sim" } else { "não" };
        SLIDERS
            .iter()
            .map(|s| format!("{} {}%", s.label, s.position(&self.avatar)))
            .chain(std::iter::once(format!("{BEARD_LABEL}: {beard}")))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
