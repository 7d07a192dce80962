//! Slider ↔ value mapping for the proportion controls.
//!
//! Sliders run from 0 to 100; each parameter maps that onto its own range.

use crate::avatar::{AvatarConfig, AvatarEdit, ScaleParam};

/// One proportion slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    pub param: ScaleParam,
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
}

pub static SLIDERS: [Slider; 6] = [
    Slider {
        param: ScaleParam::Height,
        label: "Altura",
        min: 0.7,
        max: 1.3,
    },
    Slider {
        param: ScaleParam::BodyWidth,
        label: "Largura do Tronco",
        min: 0.7,
        max: 1.5,
    },
    Slider {
        param: ScaleParam::LegLength,
        label: "Comprimento das Pernas",
        min: 0.6,
        max: 1.4,
    },
    Slider {
        param: ScaleParam::ArmLength,
        label: "Comprimento dos Braços",
        min: 0.6,
        max: 1.4,
    },
    Slider {
        param: ScaleParam::HeadScale,
        label: "Proporção da Cabeça",
        min: 0.7,
        max: 1.3,
    },
    Slider {
        param: ScaleParam::Glossiness,
        label: "Brilho da Pele",
        min: 0.0,
        max: 1.0,
    },
];

pub const BEARD_LABEL: &str = "Adicionar barba";

/// Map `value` (clamped into `[min, max]`) onto `[0, 100]`.
pub fn to_percent(value: f32, min: f32, max: f32) -> f32 {
    let clamped = value.clamp(min, max);
    (clamped - min) / (max - min) * 100.0
}

/// Map `percent` (clamped into `[0, 100]`) onto `[min, max]`.
pub fn from_percent(percent: f32, min: f32, max: f32) -> f32 {
    let clamped = percent.clamp(0.0, 100.0);
    min + (clamped / 100.0) * (max - min)
}

impl Slider {
    pub fn for_param(param: ScaleParam) -> &'static Slider {
        SLIDERS
            .iter()
            .find(|s| s.param == param)
            .unwrap_or(&SLIDERS[0])
    }

    /// Current slider knob position, rounded to a whole percent.
    pub fn position(&self, config: &AvatarConfig) -> u8 {
        let value = self.param.get(config);
        let percent = match self.param {
            ScaleParam::Glossiness => value * 100.0,
            _ => to_percent(value, self.min, self.max),
        };
        percent.round().clamp(0.0, 100.0) as u8
    }

    /// The edit produced by moving the knob to `percent`.
    pub fn edit(&self, percent: f32) -> AvatarEdit {
        let value = match self.param {
            ScaleParam::Glossiness => percent / 100.0,
            _ => from_percent(percent, self.min, self.max),
        };
        AvatarEdit::Scale(self.param, value)
    }
}
