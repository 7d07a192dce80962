//! The avatar parameter record and its edit vocabulary.

use forge_common::Color;
use serde::{Deserialize, Serialize};

/// Flat parameter record describing one avatar's appearance.
///
/// A plain value: the studio replaces it wholesale on every edit via
/// [`AvatarConfig::apply`]. Scale attributes are not range-checked here;
/// the mesh composer clamps everything it consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvatarConfig {
    pub skin_color: Color,
    pub hair_color: Color,
    pub eye_color: Color,
    pub eyebrow_color: Color,
    pub top_color: Color,
    pub bottom_color: Color,
    pub accessory_color: Color,
    pub height: f32,
    pub body_width: f32,
    pub leg_length: f32,
    pub arm_length: f32,
    pub head_scale: f32,
    pub glossiness: f32,
    pub beard: bool,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            skin_color: Color::from_u24(0xf4d4c2),
            hair_color: Color::from_u24(0x3b2f2f),
            eye_color: Color::from_u24(0x1f2933),
            eyebrow_color: Color::from_u24(0x36251b),
            top_color: Color::from_u24(0x5f5ae3),
            bottom_color: Color::from_u24(0x232946),
            accessory_color: Color::from_u24(0xffd803),
            height: 1.0,
            body_width: 1.0,
            leg_length: 1.0,
            arm_length: 1.0,
            head_scale: 1.0,
            glossiness: 0.35,
            beard: false,
        }
    }
}

/// The seven color attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorParam {
    Skin,
    Hair,
    Eye,
    Eyebrow,
    Top,
    Bottom,
    Accessory,
}

impl ColorParam {
    pub const ALL: [ColorParam; 7] = [
        ColorParam::Skin,
        ColorParam::Hair,
        ColorParam::Eye,
        ColorParam::Eyebrow,
        ColorParam::Top,
        ColorParam::Bottom,
        ColorParam::Accessory,
    ];

    /// Label shown next to the color picker.
    pub fn label(self) -> &'static str {
        match self {
            ColorParam::Skin => "Tom da pele",
            ColorParam::Hair => "Cor do cabelo",
            ColorParam::Eye => "Cor dos olhos",
            ColorParam::Eyebrow => "Sobrancelhas",
            ColorParam::Top => "Blusa",
            ColorParam::Bottom => "Calça",
            ColorParam::Accessory => "Acessórios",
        }
    }

    pub fn get(self, config: &AvatarConfig) -> Color {
        match self {
            ColorParam::Skin => config.skin_color,
            ColorParam::Hair => config.hair_color,
            ColorParam::Eye => config.eye_color,
            ColorParam::Eyebrow => config.eyebrow_color,
            ColorParam::Top => config.top_color,
            ColorParam::Bottom => config.bottom_color,
            ColorParam::Accessory => config.accessory_color,
        }
    }

    fn slot(self, config: &mut AvatarConfig) -> &mut Color {
        match self {
            ColorParam::Skin => &mut config.skin_color,
            ColorParam::Hair => &mut config.hair_color,
            ColorParam::Eye => &mut config.eye_color,
            ColorParam::Eyebrow => &mut config.eyebrow_color,
            ColorParam::Top => &mut config.top_color,
            ColorParam::Bottom => &mut config.bottom_color,
            ColorParam::Accessory => &mut config.accessory_color,
        }
    }
}

/// The six numeric attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleParam {
    Height,
    BodyWidth,
    LegLength,
    ArmLength,
    HeadScale,
    Glossiness,
}

impl ScaleParam {
    pub const ALL: [ScaleParam; 6] = [
        ScaleParam::Height,
        ScaleParam::BodyWidth,
        ScaleParam::LegLength,
        ScaleParam::ArmLength,
        ScaleParam::HeadScale,
        ScaleParam::Glossiness,
    ];

    pub fn get(self, config: &AvatarConfig) -> f32 {
        match self {
            ScaleParam::Height => config.height,
            ScaleParam::BodyWidth => config.body_width,
            ScaleParam::LegLength => config.leg_length,
            ScaleParam::ArmLength => config.arm_length,
            ScaleParam::HeadScale => config.head_scale,
            ScaleParam::Glossiness => config.glossiness,
        }
    }

    fn slot(self, config: &mut AvatarConfig) -> &mut f32 {
        match self {
            ScaleParam::Height => &mut config.height,
            ScaleParam::BodyWidth => &mut config.body_width,
            ScaleParam::LegLength => &mut config.leg_length,
            ScaleParam::ArmLength => &mut config.arm_length,
            ScaleParam::HeadScale => &mut config.head_scale,
            ScaleParam::Glossiness => &mut config.glossiness,
        }
    }
}

/// A single user edit, as produced by a color picker, slider or toggle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AvatarEdit {
    Color(ColorParam, Color),
    Scale(ScaleParam, f32),
    Beard(bool),
}

impl AvatarConfig {
    /// Return a new config with `edit` applied. `self` is left untouched.
    pub fn apply(&self, edit: AvatarEdit) -> AvatarConfig {
        let mut next = *self;
        match edit {
            AvatarEdit::Color(param, color) => *param.slot(&mut next) = color.opaque(),
            AvatarEdit::Scale(param, value) => *param.slot(&mut next) = value,
            AvatarEdit::Beard(on) => next.beard = on,
        }
        next
    }

    /// Apply a batch of edits in order.
    pub fn apply_all<I>(&self, edits: I) -> AvatarConfig
    where
        I: IntoIterator<Item = AvatarEdit>,
    {
        edits.into_iter().fold(*self, |config, edit| config.apply(edit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_base_model() {
        let c = AvatarConfig::default();
        assert_eq!(c.skin_color.to_hex(), "#f4d4c2");
        assert_eq!(c.hair_color.to_hex(), "#3b2f2f");
        assert_eq!(c.eye_color.to_hex(), "#1f2933");
        assert_eq!(c.eyebrow_color.to_hex(), "#36251b");
        assert_eq!(c.top_color.to_hex(), "#5f5ae3");
        assert_eq!(c.bottom_color.to_hex(), "#232946");
        assert_eq!(c.accessory_color.to_hex(), "#ffd803");
        for param in ScaleParam::ALL {
            if param != ScaleParam::Glossiness {
                assert_eq!(param.get(&c), 1.0, "{param:?}");
            }
        }
        assert!((c.glossiness - 0.35).abs() < f32::EPSILON);
        assert!(!c.beard);
    }

    #[test]
    fn apply_returns_new_value_and_keeps_original() {
        let base = AvatarConfig::default();
        let edited = base.apply(AvatarEdit::Scale(ScaleParam::LegLength, 1.3));
        assert_eq!(edited.leg_length, 1.3);
        assert_eq!(base.leg_length, 1.0);
    }

    #[test]
    fn apply_color_edit_touches_only_that_slot() {
        let base = AvatarConfig::default();
        let red = Color::from_rgb(255, 0, 0);
        let edited = base.apply(AvatarEdit::Color(ColorParam::Top, red));
        for param in ColorParam::ALL {
            if param == ColorParam::Top {
                assert_eq!(param.get(&edited), red);
            } else {
                assert_eq!(param.get(&edited), param.get(&base));
            }
        }
    }

    #[test]
    fn color_edits_drop_alpha() {
        let clear = Color::from_rgba(0xf4, 0xd4, 0xc2, 0);
        let edited = AvatarConfig::default().apply(AvatarEdit::Color(ColorParam::Skin, clear));
        assert_eq!(edited.skin_color.a, 255);
        assert_eq!(edited.skin_color.to_hex(), "#f4d4c2");
    }

    #[test]
    fn apply_accepts_out_of_range_values() {
        let edited = AvatarConfig::default().apply(AvatarEdit::Scale(ScaleParam::Glossiness, -3.0));
        assert_eq!(edited.glossiness, -3.0);
    }

    #[test]
    fn apply_all_applies_in_order() {
        let edited = AvatarConfig::default().apply_all([
            AvatarEdit::Beard(true),
            AvatarEdit::Scale(ScaleParam::Height, 1.2),
            AvatarEdit::Beard(false),
        ]);
        assert!(!edited.beard);
        assert_eq!(edited.height, 1.2);
    }

    #[test]
    fn color_labels_are_unique() {
        let mut labels: Vec<_> = ColorParam::ALL.iter().map(|p| p.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 7);
    }
}
