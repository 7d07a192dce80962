use std::path::PathBuf;

use clap::Parser;
use forge_common::Color;
use forge_config::colors::parse_color;
use forge_config::{AvatarEdit, ColorParam, ScaleParam};

/// Avatar Forge: compose a parametric 3D avatar and export a 4K PNG.
#[derive(Parser, Debug)]
#[command(name = "forge", version, about)]
pub struct Args {
    /// Studio settings file override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Directory the exported PNG is written to.
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Number of preview frames to run before exporting.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Seed for --randomize.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start from a random avatar.
    #[arg(long)]
    pub randomize: bool,

    /// Start from the base model (applied before --randomize).
    #[arg(long)]
    pub reset: bool,

    #[arg(long, value_parser = parse_hex)]
    pub skin: Option<Color>,
    #[arg(long, value_parser = parse_hex)]
    pub hair: Option<Color>,
    #[arg(long, value_parser = parse_hex)]
    pub eye: Option<Color>,
    #[arg(long, value_parser = parse_hex)]
    pub eyebrow: Option<Color>,
    #[arg(long, value_parser = parse_hex)]
    pub top: Option<Color>,
    #[arg(long, value_parser = parse_hex)]
    pub bottom: Option<Color>,
    #[arg(long, value_parser = parse_hex)]
    pub accessory: Option<Color>,

    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    pub body_width: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    pub leg_length: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    pub arm_length: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    pub head_scale: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    pub glossiness: Option<f32>,

    /// Add a beard.
    #[arg(long, conflicts_with = "no_beard")]
    pub beard: bool,

    /// Remove the beard.
    #[arg(long)]
    pub no_beard: bool,

    /// Print the composed shape tree as JSON and exit.
    #[arg(long)]
    pub dump_tree: bool,
}

fn parse_hex(s: &str) -> Result<Color, String> {
    parse_color(s).map_err(|e| e.to_string())
}

impl Args {
    /// The per-attribute flags as edits, colors first, in declaration order.
    pub fn edits(&self) -> Vec<AvatarEdit> {
        let colors = [
            (ColorParam::Skin, self.skin),
            (ColorParam::Hair, self.hair),
            (ColorParam::Eye, self.eye),
            (ColorParam::Eyebrow, self.eyebrow),
            (ColorParam::Top, self.top),
            (ColorParam::Bottom, self.bottom),
            (ColorParam::Accessory, self.accessory),
        ];
        let scales = [
            (ScaleParam::Height, self.height),
            (ScaleParam::BodyWidth, self.body_width),
            (ScaleParam::LegLength, self.leg_length),
            (ScaleParam::ArmLength, self.arm_length),
            (ScaleParam::HeadScale, self.head_scale),
            (ScaleParam::Glossiness, self.glossiness),
        ];

        let mut edits: Vec<AvatarEdit> = colors
            .into_iter()
            .filter_map(|(param, color)| color.map(|c| AvatarEdit::Color(param, c)))
            .collect();
        edits.extend(
            scales
                .into_iter()
                .filter_map(|(param, value)| value.map(|v| AvatarEdit::Scale(param, v))),
        );
        if self.beard {
            edits.push(AvatarEdit::Beard(true));
        } else if self.no_beard {
            edits.push(AvatarEdit::Beard(false));
        }
        edits
    }
}

pub fn parse() -> Args {
    Args::parse()
}
