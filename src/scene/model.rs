use serde::{Deserialize, Serialize};

use crate::assets::color::Color;

/// Layer compositing operator (W3C compositing names).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

impl BlendMode {
    pub const ALL: [Self; 16] = [
        Self::Normal,
        Self::Multiply,
        Self::Screen,
        Self::Overlay,
        Self::Darken,
        Self::Lighten,
        Self::ColorDodge,
        Self::ColorBurn,
        Self::HardLight,
        Self::SoftLight,
        Self::Difference,
        Self::Exclusion,
        Self::Hue,
        Self::Saturation,
        Self::Color,
        Self::Luminosity,
    ];
}

/// Effect discriminator, as stored in the `type` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectType {
    ScrollText,
    SineWave,
    Starfield,
    Plasma,
    RasterBars,
    CopperBars,
    Particles,
    Checkerboard,
    Logo,
    Fire,
    Matrix,
    Tunnel,
    Glitch,
    Metaballs,
    DotMatrix,
    RotoZoom,
    Twister,
    Wireframe3d,
    Sprite,
    Vhs,
    Bobs,
    Moire,
    LensFlare,
    VectorBalls,
}

impl EffectType {
    pub const ALL: [Self; 24] = [
        Self::ScrollText,
        Self::SineWave,
        Self::Starfield,
        Self::Plasma,
        Self::RasterBars,
        Self::CopperBars,
        Self::Particles,
        Self::Checkerboard,
        Self::Logo,
        Self::Fire,
        Self::Matrix,
        Self::Tunnel,
        Self::Glitch,
        Self::Metaballs,
        Self::DotMatrix,
        Self::RotoZoom,
        Self::Twister,
        Self::Wireframe3d,
        Self::Sprite,
        Self::Vhs,
        Self::Bobs,
        Self::Moire,
        Self::LensFlare,
        Self::VectorBalls,
    ];

    /// Wire name of the discriminator.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ScrollText => "scrolltext",
            Self::SineWave => "sinewave",
            Self::Starfield => "starfield",
            Self::Plasma => "plasma",
            Self::RasterBars => "rasterbars",
            Self::CopperBars => "copperbars",
            Self::Particles => "particles",
            Self::Checkerboard => "checkerboard",
            Self::Logo => "logo",
            Self::Fire => "fire",
            Self::Matrix => "matrix",
            Self::Tunnel => "tunnel",
            Self::Glitch => "glitch",
            Self::Metaballs => "metaballs",
            Self::DotMatrix => "dotmatrix",
            Self::RotoZoom => "rotozoom",
            Self::Twister => "twister",
            Self::Wireframe3d => "wireframe3d",
            Self::Sprite => "sprite",
            Self::Vhs => "vhs",
            Self::Bobs => "bobs",
            Self::Moire => "moire",
            Self::LensFlare => "lensflare",
            Self::VectorBalls => "vectorballs",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl std::fmt::Display for EffectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One configured layer of a project.
///
/// Common fields live here; the per-kind parameters are flattened next to them so the JSON form
/// is a single object discriminated by `type`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    pub id: String,
    pub name: String,
    pub enabled: bool,
    /// Paint order, lowest first. Ties keep list order.
    pub z_index: i32,
    pub opacity: f64,
    pub blend_mode: BlendMode,
    #[serde(flatten)]
    pub kind: EffectKind,
}

impl Effect {
    pub fn effect_type(&self) -> EffectType {
        self.kind.effect_type()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EffectKind {
    ScrollText(ScrollTextParams),
    SineWave(SineWaveParams),
    Starfield(StarfieldParams),
    Plasma(PlasmaParams),
    RasterBars(RasterBarsParams),
    CopperBars(CopperBarsParams),
    Particles(ParticlesParams),
    Checkerboard(CheckerboardParams),
    Logo(LogoParams),
    Fire(FireParams),
    Matrix(MatrixParams),
    Tunnel(TunnelParams),
    Glitch(GlitchParams),
    Metaballs(MetaballsParams),
    DotMatrix(DotMatrixParams),
    RotoZoom(RotoZoomParams),
    Twister(TwisterParams),
    Wireframe3d(Wireframe3dParams),
    Sprite(SpriteParams),
    Vhs(VhsParams),
    Bobs(BobsParams),
    Moire(MoireParams),
    LensFlare(LensFlareParams),
    VectorBalls(VectorBallsParams),
}

impl EffectKind {
    pub fn effect_type(&self) -> EffectType {
        match self {
            Self::ScrollText(_) => EffectType::ScrollText,
            Self::SineWave(_) => EffectType::SineWave,
            Self::Starfield(_) => EffectType::Starfield,
            Self::Plasma(_) => EffectType::Plasma,
            Self::RasterBars(_) => EffectType::RasterBars,
            Self::CopperBars(_) => EffectType::CopperBars,
            Self::Particles(_) => EffectType::Particles,
            Self::Checkerboard(_) => EffectType::Checkerboard,
            Self::Logo(_) => EffectType::Logo,
            Self::Fire(_) => EffectType::Fire,
            Self::Matrix(_) => EffectType::Matrix,
            Self::Tunnel(_) => EffectType::Tunnel,
            Self::Glitch(_) => EffectType::Glitch,
            Self::Metaballs(_) => EffectType::Metaballs,
            Self::DotMatrix(_) => EffectType::DotMatrix,
            Self::RotoZoom(_) => EffectType::RotoZoom,
            Self::Twister(_) => EffectType::Twister,
            Self::Wireframe3d(_) => EffectType::Wireframe3d,
            Self::Sprite(_) => EffectType::Sprite,
            Self::Vhs(_) => EffectType::Vhs,
            Self::Bobs(_) => EffectType::Bobs,
            Self::Moire(_) => EffectType::Moire,
            Self::LensFlare(_) => EffectType::LensFlare,
            Self::VectorBalls(_) => EffectType::VectorBalls,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    #[default]
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleShape {
    #[default]
    Circle,
    Square,
    Star,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotoPattern {
    #[default]
    Checkerboard,
    Stripes,
    Dots,
    Custom,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireShape {
    #[default]
    Cube,
    Torus,
    Sphere,
    Pyramid,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpriteAnimation {
    None,
    Bounce,
    #[default]
    Float,
    Rotate,
    Pulse,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BobPattern {
    #[default]
    Circle,
    Wave,
    Lissajous,
    Spiral,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoirePattern {
    #[default]
    Circles,
    Lines,
    Grid,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formation {
    #[default]
    Cube,
    Sphere,
    Torus,
    Wave,
}

/// Horizontally scrolling banner text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollTextParams {
    pub text: String,
    /// Pixels per frame.
    pub speed: f64,
    pub font_size: f64,
    pub font_family: String,
    pub color: Color,
    pub gradient_colors: Vec<Color>,
    pub use_gradient: bool,
    pub direction: ScrollDirection,
    /// Baseline position as a percentage of the height.
    pub y_position: f64,
}

/// Text whose glyphs ride a sine wave.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SineWaveParams {
    pub text: String,
    pub amplitude: f64,
    pub frequency: f64,
    pub speed: f64,
    pub font_size: f64,
    pub font_family: String,
    pub colors: Vec<Color>,
    pub y_position: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarfieldParams {
    pub star_count: u32,
    pub speed: f64,
    pub star_color: Color,
    pub max_size: f64,
    pub depth: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlasmaParams {
    pub scale: f64,
    pub speed: f64,
    pub colors: Vec<Color>,
    /// Output alpha in `[0, 1]`.
    pub intensity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RasterBarsParams {
    pub bar_count: u32,
    pub bar_height: f64,
    pub speed: f64,
    pub colors: Vec<Color>,
    pub amplitude: f64,
    pub spacing: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopperBarsParams {
    pub colors: Vec<Color>,
    pub bar_height: f64,
    pub speed: f64,
    pub wave_amplitude: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticlesParams {
    pub particle_count: u32,
    pub speed: f64,
    pub colors: Vec<Color>,
    pub max_size: f64,
    pub shape: ParticleShape,
    pub gravity: f64,
    pub spread: f64,
}

/// Perspective floor below a horizon line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckerboardParams {
    pub color1: Color,
    pub color2: Color,
    pub tile_size: f64,
    pub perspective: f64,
    pub scroll_speed: f64,
    /// Horizon position as a percentage of the height.
    pub y_offset: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoParams {
    pub text: String,
    pub font_size: f64,
    pub font_family: String,
    pub colors: Vec<Color>,
    pub bounce_amplitude: f64,
    pub bounce_speed: f64,
    pub rotation_enabled: bool,
    pub rotation_speed: f64,
    pub scale_effect: bool,
    pub glow_enabled: bool,
    pub glow_color: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FireParams {
    pub intensity: f64,
    pub speed: f64,
    pub colors: Vec<Color>,
    /// Rows of the heat buffer, anchored to the bottom edge.
    pub height: u32,
    pub spread: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixParams {
    pub font_size: f64,
    pub speed: f64,
    pub color: Color,
    /// Probability that a glyph survives a frame unchanged.
    pub density: f64,
    pub characters: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TunnelParams {
    pub speed: f64,
    pub ring_count: u32,
    pub colors: Vec<Color>,
    pub rotation: f64,
    pub perspective: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlitchParams {
    pub intensity: f64,
    pub speed: f64,
    pub color_shift: bool,
    pub scanlines: bool,
    pub noise: f64,
    pub slice_count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaballsParams {
    pub ball_count: u32,
    pub speed: f64,
    pub colors: Vec<Color>,
    pub threshold: f64,
    pub size: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DotMatrixParams {
    pub text: String,
    pub dot_size: f64,
    pub gap: f64,
    pub speed: f64,
    pub color: Color,
    pub background_color: Color,
    pub scroll_direction: ScrollDirection,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotoZoomParams {
    pub pattern: RotoPattern,
    pub rotation_speed: f64,
    pub zoom_speed: f64,
    pub colors: Vec<Color>,
    pub scale: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwisterParams {
    pub bar_count: u32,
    pub speed: f64,
    pub colors: Vec<Color>,
    pub amplitude: f64,
    pub segments: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wireframe3dParams {
    pub shape: WireShape,
    #[serde(rename = "rotationSpeedX")]
    pub rotation_speed_x: f64,
    #[serde(rename = "rotationSpeedY")]
    pub rotation_speed_y: f64,
    #[serde(rename = "rotationSpeedZ")]
    pub rotation_speed_z: f64,
    pub color: Color,
    pub line_width: f64,
    pub scale: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpriteParams {
    /// Relative path, `file://` URL, or empty for the placeholder.
    pub image_url: String,
    pub width: f64,
    pub height: f64,
    /// Centre position as percentages of the surface.
    pub x: f64,
    pub y: f64,
    pub animation_type: SpriteAnimation,
    pub animation_speed: f64,
    pub animation_amplitude: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VhsParams {
    pub scanline_intensity: f64,
    pub noise_intensity: f64,
    pub rgb_shift: f64,
    pub distortion: f64,
    pub flickering: bool,
    pub tracking_lines: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BobsParams {
    pub bob_count: u32,
    pub speed: f64,
    pub size: f64,
    pub colors: Vec<Color>,
    pub pattern: BobPattern,
    /// 0 clears every frame; larger values leave longer trails.
    pub trail_length: f64,
    pub glow_enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoireParams {
    pub pattern: MoirePattern,
    pub spacing: f64,
    pub speed: f64,
    pub colors: Vec<Color>,
    pub offset_x: f64,
    pub offset_y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LensFlareParams {
    /// Light source position as percentages of the surface.
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub intensity: f64,
    pub colors: Vec<Color>,
    pub anamorphic: bool,
    pub ghost_count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorBallsParams {
    pub ball_count: u32,
    pub size: f64,
    pub speed: f64,
    #[serde(rename = "rotationX")]
    pub rotation_x: f64,
    #[serde(rename = "rotationY")]
    pub rotation_y: f64,
    #[serde(rename = "rotationZ")]
    pub rotation_z: f64,
    pub colors: Vec<Color>,
    pub formation: Formation,
    pub perspective: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
