//! "Surprise me" configuration generator.

use crate::avatar::AvatarConfig;
use forge_common::Color;
use rand::Rng;

/// Skin tones the randomizer picks from.
pub const SKIN_TONES: [u32; 6] = [0xf8d9c4, 0xdab49d, 0xb48a76, 0x8a5a44, 0x593327, 0x3d2215];

/// Hair tones, also used for eyebrows.
pub const HAIR_TONES: [u32; 8] = [
    0x0f0e0f, 0x2d2019, 0x4c3623, 0x6d4c3d, 0xa1674a, 0xc98f4c, 0xd1a960, 0x1f1214,
];

fn pick<R: Rng>(rng: &mut R, tones: &[u32]) -> Color {
    Color::from_u24(tones[rng.gen_range(0..tones.len())])
}

fn random_color<R: Rng>(rng: &mut R) -> Color {
    Color::from_u24(rng.gen_range(0..0xff_ffff))
}

/// Perturb `base` by `(u - 0.5) * spread` and clamp into `[min, max]`.
fn jitter<R: Rng>(rng: &mut R, base: f32, spread: f32, min: f32, max: f32) -> f32 {
    let u: f32 = rng.gen();
    (base + (u - 0.5) * spread).clamp(min, max)
}

/// Build a random avatar around the default proportions.
pub fn randomize<R: Rng>(rng: &mut R) -> AvatarConfig {
    let base = AvatarConfig::default();
    AvatarConfig {
        skin_color: pick(rng, &SKIN_TONES),
        hair_color: pick(rng, &HAIR_TONES),
        eye_color: random_color(rng),
        eyebrow_color: pick(rng, &HAIR_TONES),
        top_color: random_color(rng),
        bottom_color: random_color(rng),
        accessory_color: random_color(rng),
        beard: rng.gen_bool(0.5),
        height: jitter(rng, base.height, 0.6, 0.7, 1.3),
        body_width: jitter(rng, base.body_width, 0.9, 0.7, 1.5),
        leg_length: jitter(rng, base.leg_length, 0.8, 0.6, 1.4),
        arm_length: jitter(rng, base.arm_length, 0.8, 0.6, 1.4),
        head_scale: jitter(rng, base.head_scale, 0.5, 0.7, 1.3),
        glossiness: rng.gen::<f32>() * 0.8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn randomized_values_stay_in_slider_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let c = randomize(&mut rng);
            assert!((0.7..=1.3).contains(&c.height));
            assert!((0.7..=1.5).contains(&c.body_width));
            assert!((0.6..=1.4).contains(&c.leg_length));
            assert!((0.6..=1.4).contains(&c.arm_length));
            assert!((0.7..=1.3).contains(&c.head_scale));
            assert!((0.0..0.8).contains(&c.glossiness));
        }
    }

    #[test]
    fn skin_and_hair_come_from_palettes() {
        let mut rng = StdRng::seed_from_u64(42);
        let skins: Vec<Color> = SKIN_TONES.iter().map(|&t| Color::from_u24(t)).collect();
        let hairs: Vec<Color> = HAIR_TONES.iter().map(|&t| Color::from_u24(t)).collect();
        for _ in 0..100 {
            let c = randomize(&mut rng);
            assert!(skins.contains(&c.skin_color));
            assert!(hairs.contains(&c.hair_color));
            assert!(hairs.contains(&c.eyebrow_color));
        }
    }

    #[test]
    fn same_seed_same_avatar() {
        let a = randomize(&mut StdRng::seed_from_u64(99));
        let b = randomize(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn beard_shows_up_both_ways() {
        let mut rng = StdRng::seed_from_u64(3);
        let beards: Vec<bool> = (0..64).map(|_| randomize(&mut rng).beard).collect();
        assert!(beards.iter().any(|&b| b));
        assert!(beards.iter().any(|&b| !b));
    }
}
