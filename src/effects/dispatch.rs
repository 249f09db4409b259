//! Type-erased entry points over every [`Renderer`].
//!
//! A session only ever holds an [`EffectKind`] and a [`SimState`]; these functions route both to
//! the matching renderer. A state whose variant no longer matches the parameters (the effect was
//! retyped) is replaced by a fresh reseed.

use super::{PaintCx, Renderer};
use super::{
    bobs, checkerboard, copper_bars, dot_matrix, fire, glitch, lens_flare, logo, matrix, metaballs,
    moire, particles, plasma, raster_bars, rotozoom, scroll_text, sine_wave, sprite, starfield,
    tunnel, twister, vector_balls, vhs, wireframe,
};
use crate::foundation::core::Canvas;
use crate::foundation::math::Fnv1a64;
use crate::foundation::rng::FrameRng;
use crate::render::layer::Layer;
use crate::scene::model::{EffectKind, EffectType};

macro_rules! renderers {
    ($($variant:ident => $renderer:ty, $state:ty;)*) => {
        /// Simulation state of one effect instance.
        #[derive(Clone, Debug, PartialEq)]
        pub enum SimState {
            $($variant($state),)*
        }

        impl SimState {
            pub fn effect_type(&self) -> EffectType {
                match self {
                    $(Self::$variant(_) => EffectType::$variant,)*
                }
            }
        }

        /// Key that changes whenever `kind` needs a reseed on `canvas`. Includes the effect type.
        pub(crate) fn structural_key(kind: &EffectKind, canvas: Canvas) -> u64 {
            let inner = match kind {
                $(EffectKind::$variant(p) => <$renderer as Renderer>::structural_key(p, canvas),)*
            };
            let mut h = Fnv1a64::new(inner);
            h.write_str(kind.effect_type().as_str());
            h.finish()
        }

        pub(crate) fn reseed(kind: &EffectKind, canvas: Canvas, rng: &mut FrameRng) -> SimState {
            match kind {
                $(EffectKind::$variant(p) => {
                    SimState::$variant(<$renderer as Renderer>::reseed(p, canvas, rng))
                })*
            }
        }

        pub(crate) fn step(
            state: SimState,
            kind: &EffectKind,
            canvas: Canvas,
            dt: f64,
            rng: &mut FrameRng,
        ) -> SimState {
            match (state, kind) {
                $((SimState::$variant(s), EffectKind::$variant(p)) => {
                    SimState::$variant(<$renderer as Renderer>::step(s, p, canvas, dt, rng))
                })*
                (_, kind) => reseed(kind, canvas, rng),
            }
        }

        pub(crate) fn paint(
            state: &mut SimState,
            kind: &EffectKind,
            layer: &mut Layer<'_>,
            cx: &mut PaintCx<'_>,
        ) {
            if state.effect_type() != kind.effect_type() {
                *state = reseed(kind, layer.canvas(), cx.rng);
            }
            match (state, kind) {
                $((SimState::$variant(s), EffectKind::$variant(p)) => {
                    <$renderer as Renderer>::paint(s, p, layer, cx)
                })*
                _ => {}
            }
        }
    };
}

renderers! {
    ScrollText => scroll_text::ScrollText, scroll_text::ScrollTextState;
    SineWave => sine_wave::SineWave, sine_wave::SineWaveState;
    Starfield => starfield::Starfield, starfield::StarfieldState;
    Plasma => plasma::Plasma, plasma::PlasmaState;
    RasterBars => raster_bars::RasterBars, raster_bars::RasterBarsState;
    CopperBars => copper_bars::CopperBars, copper_bars::CopperBarsState;
    Particles => particles::Particles, particles::ParticlesState;
    Checkerboard => checkerboard::Checkerboard, checkerboard::CheckerboardState;
    Logo => logo::Logo, logo::LogoState;
    Fire => fire::Fire, fire::FireState;
    Matrix => matrix::Matrix, matrix::MatrixState;
    Tunnel => tunnel::Tunnel, tunnel::TunnelState;
    Glitch => glitch::Glitch, glitch::GlitchState;
    Metaballs => metaballs::Metaballs, metaballs::MetaballsState;
    DotMatrix => dot_matrix::DotMatrix, dot_matrix::DotMatrixState;
    RotoZoom => rotozoom::RotoZoom, rotozoom::RotoZoomState;
    Twister => twister::Twister, twister::TwisterState;
    Wireframe3d => wireframe::Wireframe, wireframe::WireframeState;
    Sprite => sprite::Sprite, sprite::SpriteState;
    Vhs => vhs::Vhs, vhs::VhsState;
    Bobs => bobs::Bobs, bobs::BobsState;
    Moire => moire::Moire, moire::MoireState;
    LensFlare => lens_flare::LensFlare, lens_flare::LensFlareState;
    VectorBalls => vector_balls::VectorBalls, vector_balls::VectorBallsState;
}

#[cfg(test)]
#[path = "../../tests/unit/effects/dispatch.rs"]
mod tests;
