//! Factory defaults for every effect kind.

use crate::assets::color::{Color, NamedPalette};
use crate::scene::model::*;

pub const DEFAULT_SCROLL_TEXT: &str = "WELCOME TO THE CRACKTRO DESIGNER! CREATE AMAZING RETRO EFFECTS AND ANIMATIONS... GREETINGS TO ALL DEMOSCENE ENTHUSIASTS AROUND THE WORLD! THIS APP WAS MADE WITH LOVE FOR THE OLDSCHOOL VIBES... PRESS PLAY TO SEE YOUR CREATION COME TO LIFE!   ";

pub const DEFAULT_SINEWAVE_TEXT: &str = "HELLO WORLD FROM THE DEMOSCENE!";

pub const MATRIX_CHARACTERS: &str = "アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン0123456789";

pub const DEFAULT_FONT_FAMILY: &str = "\"Press Start 2P\", monospace";

const fn hex(v: u32) -> Color {
    Color::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

pub(crate) fn new_effect_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Build an effect of `ty` with a fresh id and factory parameters.
///
/// Enabled, z-index 0, fully opaque, normal blending.
pub fn create_default_effect(ty: EffectType) -> Effect {
    let (name, kind) = default_kind(ty);
    Effect {
        id: new_effect_id(),
        name: name.to_owned(),
        enabled: true,
        z_index: 0,
        opacity: 1.0,
        blend_mode: BlendMode::Normal,
        kind,
    }
}

/// Copy of `effect` with a new id and a `(Copy)` name suffix.
pub fn duplicate_effect(effect: &Effect) -> Effect {
    Effect {
        id: new_effect_id(),
        name: format!("{} (Copy)", effect.name),
        ..effect.clone()
    }
}

fn default_kind(ty: EffectType) -> (&'static str, EffectKind) {
    let font = || DEFAULT_FONT_FAMILY.to_owned();
    match ty {
        EffectType::ScrollText => (
            "Scroll Text",
            EffectKind::ScrollText(ScrollTextParams {
                text: DEFAULT_SCROLL_TEXT.to_owned(),
                speed: 2.0,
                font_size: 24.0,
                font_family: font(),
                color: hex(0x00FF00),
                gradient_colors: vec![hex(0xFF00FF), hex(0x00FFFF), hex(0xFFFF00)],
                use_gradient: true,
                direction: ScrollDirection::Left,
                y_position: 50.0,
            }),
        ),
        EffectType::SineWave => (
            "Sine Wave Text",
            EffectKind::SineWave(SineWaveParams {
                text: DEFAULT_SINEWAVE_TEXT.to_owned(),
                amplitude: 30.0,
                frequency: 0.1,
                speed: 3.0,
                font_size: 28.0,
                font_family: font(),
                colors: NamedPalette::Neon.colors(),
                y_position: 50.0,
            }),
        ),
        EffectType::Starfield => (
            "Starfield",
            EffectKind::Starfield(StarfieldParams {
                star_count: 200,
                speed: 3.0,
                star_color: Color::WHITE,
                max_size: 3.0,
                depth: 3.0,
            }),
        ),
        EffectType::Plasma => (
            "Plasma",
            EffectKind::Plasma(PlasmaParams {
                scale: 4.0,
                speed: 2.0,
                colors: NamedPalette::Neon.colors(),
                intensity: 1.0,
            }),
        ),
        EffectType::RasterBars => (
            "Raster Bars",
            EffectKind::RasterBars(RasterBarsParams {
                bar_count: 8,
                bar_height: 20.0,
                speed: 2.0,
                colors: NamedPalette::Neon.colors(),
                amplitude: 100.0,
                spacing: 40.0,
            }),
        ),
        EffectType::CopperBars => (
            "Copper Bars",
            EffectKind::CopperBars(CopperBarsParams {
                colors: NamedPalette::Sunset.colors(),
                bar_height: 4.0,
                speed: 1.0,
                wave_amplitude: 50.0,
            }),
        ),
        EffectType::Particles => (
            "Particles",
            EffectKind::Particles(ParticlesParams {
                particle_count: 100,
                speed: 2.0,
                colors: NamedPalette::Fire.colors(),
                max_size: 4.0,
                shape: ParticleShape::Circle,
                gravity: 0.5,
                spread: 100.0,
            }),
        ),
        EffectType::Checkerboard => (
            "Checkerboard Floor",
            EffectKind::Checkerboard(CheckerboardParams {
                color1: hex(0xFF00FF),
                color2: hex(0x000000),
                tile_size: 40.0,
                perspective: 400.0,
                scroll_speed: 2.0,
                y_offset: 60.0,
            }),
        ),
        EffectType::Logo => (
            "Bouncing Logo",
            EffectKind::Logo(LogoParams {
                text: "CRACKTRO".to_owned(),
                font_size: 48.0,
                font_family: font(),
                colors: NamedPalette::Neon.colors(),
                bounce_amplitude: 20.0,
                bounce_speed: 2.0,
                rotation_enabled: false,
                rotation_speed: 1.0,
                scale_effect: true,
                glow_enabled: true,
                glow_color: hex(0xFF00FF),
            }),
        ),
        EffectType::Fire => (
            "Fire Effect",
            EffectKind::Fire(FireParams {
                intensity: 1.0,
                speed: 3.0,
                colors: NamedPalette::Fire.colors(),
                height: 150,
                spread: 2.0,
            }),
        ),
        EffectType::Matrix => (
            "Matrix Rain",
            EffectKind::Matrix(MatrixParams {
                font_size: 14.0,
                speed: 2.0,
                color: hex(0x00FF00),
                density: 0.95,
                characters: MATRIX_CHARACTERS.to_owned(),
            }),
        ),
        EffectType::Tunnel => (
            "Tunnel",
            EffectKind::Tunnel(TunnelParams {
                speed: 2.0,
                ring_count: 20,
                colors: NamedPalette::Cyber.colors(),
                rotation: 1.0,
                perspective: 500.0,
            }),
        ),
        EffectType::Glitch => (
            "Glitch Effect",
            EffectKind::Glitch(GlitchParams {
                intensity: 0.5,
                speed: 2.0,
                color_shift: true,
                scanlines: true,
                noise: 0.3,
                slice_count: 10,
            }),
        ),
        EffectType::Metaballs => (
            "Metaballs",
            EffectKind::Metaballs(MetaballsParams {
                ball_count: 5,
                speed: 1.5,
                colors: NamedPalette::Neon.colors(),
                threshold: 1.0,
                size: 80.0,
            }),
        ),
        EffectType::DotMatrix => (
            "Dot Matrix",
            EffectKind::DotMatrix(DotMatrixParams {
                text: "HELLO WORLD".to_owned(),
                dot_size: 4.0,
                gap: 2.0,
                speed: 2.0,
                color: hex(0x00FF00),
                background_color: hex(0x001100),
                scroll_direction: ScrollDirection::Left,
            }),
        ),
        EffectType::RotoZoom => (
            "Rotozoom",
            EffectKind::RotoZoom(RotoZoomParams {
                pattern: RotoPattern::Checkerboard,
                rotation_speed: 1.0,
                zoom_speed: 0.5,
                colors: vec![hex(0xFF00FF), hex(0x000000)],
                scale: 2.0,
            }),
        ),
        EffectType::Twister => (
            "Twister",
            EffectKind::Twister(TwisterParams {
                bar_count: 16,
                speed: 2.0,
                colors: NamedPalette::Sunset.colors(),
                amplitude: 100.0,
                segments: 32,
            }),
        ),
        EffectType::Wireframe3d => (
            "3D Wireframe",
            EffectKind::Wireframe3d(Wireframe3dParams {
                shape: WireShape::Cube,
                rotation_speed_x: 1.0,
                rotation_speed_y: 1.5,
                rotation_speed_z: 0.5,
                color: hex(0x00FFFF),
                line_width: 2.0,
                scale: 100.0,
            }),
        ),
        EffectType::Sprite => (
            "Sprite",
            EffectKind::Sprite(SpriteParams {
                image_url: String::new(),
                width: 100.0,
                height: 100.0,
                x: 50.0,
                y: 50.0,
                animation_type: SpriteAnimation::Float,
                animation_speed: 1.0,
                animation_amplitude: 20.0,
            }),
        ),
        EffectType::Vhs => (
            "VHS Effect",
            EffectKind::Vhs(VhsParams {
                scanline_intensity: 0.5,
                noise_intensity: 0.3,
                rgb_shift: 2.0,
                distortion: 0.3,
                flickering: true,
                tracking_lines: true,
            }),
        ),
        EffectType::Bobs => (
            "Bouncing Bobs",
            EffectKind::Bobs(BobsParams {
                bob_count: 16,
                speed: 2.0,
                size: 20.0,
                colors: NamedPalette::Neon.colors(),
                pattern: BobPattern::Circle,
                trail_length: 30.0,
                glow_enabled: true,
            }),
        ),
        EffectType::Moire => (
            "Moiré Pattern",
            EffectKind::Moire(MoireParams {
                pattern: MoirePattern::Circles,
                spacing: 15.0,
                speed: 1.0,
                colors: vec![Color::WHITE, Color::WHITE],
                offset_x: 20.0,
                offset_y: 20.0,
            }),
        ),
        EffectType::LensFlare => (
            "Lens Flare",
            EffectKind::LensFlare(LensFlareParams {
                x: 70.0,
                y: 30.0,
                size: 50.0,
                intensity: 0.8,
                colors: vec![hex(0xFFD700), hex(0x00FFFF), hex(0xFF00FF), hex(0xFF6600)],
                anamorphic: true,
                ghost_count: 5,
            }),
        ),
        EffectType::VectorBalls => (
            "Vector Balls",
            EffectKind::VectorBalls(VectorBallsParams {
                ball_count: 27,
                size: 15.0,
                speed: 1.0,
                rotation_x: 1.0,
                rotation_y: 1.5,
                rotation_z: 0.5,
                colors: NamedPalette::Neon.colors(),
                formation: Formation::Cube,
                perspective: 400.0,
            }),
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/defaults.rs"]
mod tests;
