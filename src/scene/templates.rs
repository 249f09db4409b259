//! Built-in starter projects.

use serde_json::{Value, json};

use crate::assets::color::{Color, NamedPalette};
use crate::foundation::error::{CracktroError, CracktroResult};
use crate::scene::defaults::create_default_effect;
use crate::scene::model::{Effect, EffectType};
use crate::scene::project::{DEFAULT_PROJECT_HEIGHT, DEFAULT_PROJECT_WIDTH, Project};

/// A starter project: effect kinds plus per-effect parameter overrides.
#[derive(Clone, Debug)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub background: Color,
    pub effects: Vec<(EffectType, Value)>,
}

impl Template {
    /// Build a fresh project: factory defaults, then overrides, z-index = position.
    pub fn instantiate(&self) -> CracktroResult<Project> {
        let mut project = Project::new(
            self.name,
            DEFAULT_PROJECT_WIDTH,
            DEFAULT_PROJECT_HEIGHT,
            self.background,
        );
        for (i, (ty, overrides)) in self.effects.iter().enumerate() {
            let mut effect = apply_overrides(create_default_effect(*ty), overrides)?;
            effect.z_index = i32::try_from(i)
                .map_err(|_| CracktroError::validation("template has too many effects"))?;
            project.effects.push(effect);
        }
        Ok(project)
    }
}

/// Shallow-merge a JSON object onto an effect; `id` and `type` cannot be overridden.
pub(crate) fn apply_overrides(effect: Effect, overrides: &Value) -> CracktroResult<Effect> {
    let Some(patch) = overrides.as_object() else {
        return Ok(effect);
    };
    let mut v = serde_json::to_value(&effect)?;
    let Some(obj) = v.as_object_mut() else {
        return Err(CracktroError::serde("effect did not serialize to an object"));
    };
    for (k, val) in patch {
        if k == "id" || k == "type" {
            continue;
        }
        obj.insert(k.clone(), val.clone());
    }
    Ok(serde_json::from_value(v)?)
}

fn palette(p: NamedPalette) -> Value {
    Value::Array(p.colors().into_iter().map(|c| json!(c.to_hex())).collect())
}

pub fn template(id: &str) -> Option<Template> {
    templates().into_iter().find(|t| t.id == id)
}

pub fn templates() -> Vec<Template> {
    use EffectType as T;

    let black = Color::BLACK;
    vec![
        Template {
            id: "classic-cracktro",
            name: "Classic Cracktro",
            description: "Traditional demoscene intro with starfield, scrolling text, and bouncing logo",
            background: black,
            effects: vec![
                (T::Starfield, json!({"starCount": 200, "speed": 2})),
                (T::ScrollText, json!({"yPosition": 85})),
                (T::Logo, json!({"text": "LEGEND", "glowEnabled": true})),
            ],
        },
        Template {
            id: "plasma-dream",
            name: "Plasma Dream",
            description: "Psychedelic plasma effect with copper bars",
            background: black,
            effects: vec![
                (T::Plasma, json!({"colors": palette(NamedPalette::Neon)})),
                (T::CopperBars, json!({"opacity": 0.5})),
            ],
        },
        Template {
            id: "retro-fire",
            name: "Retro Fire",
            description: "Fire effect with 3D checkerboard floor and sine wave text",
            background: black,
            effects: vec![
                (T::Checkerboard, json!({"color1": "#8B00FF", "color2": "#000000"})),
                (T::Fire, json!({"height": 200})),
                (T::SineWave, json!({"yPosition": 30})),
            ],
        },
        Template {
            id: "matrix-world",
            name: "Matrix World",
            description: "Digital rain effect with glowing logo",
            background: black,
            effects: vec![
                (T::Matrix, json!({"color": "#00FF00"})),
                (
                    T::Logo,
                    json!({
                        "text": "HACKED",
                        "colors": ["#00FF00", "#00FF00"],
                        "glowEnabled": true,
                        "glowColor": "#00FF00"
                    }),
                ),
            ],
        },
        Template {
            id: "tunnel-vision",
            name: "Tunnel Vision",
            description: "Zooming tunnel effect with raster bars",
            background: black,
            effects: vec![
                (T::Tunnel, json!({"speed": 3})),
                (T::RasterBars, json!({"opacity": 0.6, "barCount": 5})),
            ],
        },
        Template {
            id: "particle-show",
            name: "Particle Show",
            description: "Colorful particle fountain with sine wave text",
            background: Color::rgb(0x0a, 0x0a, 0x0a),
            effects: vec![
                (
                    T::Particles,
                    json!({"particleCount": 150, "colors": palette(NamedPalette::Fire)}),
                ),
                (T::SineWave, json!({"yPosition": 25, "text": "PARTICLE MAGIC"})),
            ],
        },
        Template {
            id: "amiga-style",
            name: "Amiga Style",
            description: "Classic Amiga copper bars with checkerboard",
            background: Color::rgb(0x00, 0x00, 0x22),
            effects: vec![
                (T::Checkerboard, json!({"yOffset": 70})),
                (T::CopperBars, json!({"colors": palette(NamedPalette::Amiga)})),
                (
                    T::ScrollText,
                    json!({
                        "yPosition": 15,
                        "text": "AMIGA FOREVER... GREETINGS TO ALL OLDSCHOOL HACKERS!"
                    }),
                ),
            ],
        },
        Template {
            id: "cyber-punk",
            name: "Cyber Punk",
            description: "Neon-styled futuristic intro",
            background: Color::rgb(0x0D, 0x02, 0x21),
            effects: vec![
                (T::Starfield, json!({"starColor": "#FF00FF", "speed": 5})),
                (T::RasterBars, json!({"colors": palette(NamedPalette::Cyber)})),
                (
                    T::Logo,
                    json!({
                        "text": "CYBER",
                        "colors": palette(NamedPalette::Neon),
                        "glowEnabled": true,
                        "glowColor": "#00FFFF"
                    }),
                ),
            ],
        },
        Template {
            id: "vhs-retro",
            name: "VHS Retro",
            description: "Nostalgic VHS tape effect with static and tracking",
            background: Color::rgb(0x1a, 0x1a, 0x1a),
            effects: vec![
                (T::Starfield, json!({"starCount": 50, "speed": 0.5})),
                (T::Logo, json!({"text": "REWIND", "colors": ["#FF6B6B", "#4ECDC4"]})),
                (
                    T::Vhs,
                    json!({"noiseIntensity": 0.3, "scanlineIntensity": 0.5, "trackingLines": true}),
                ),
            ],
        },
        Template {
            id: "bouncing-bobs",
            name: "Bouncing Bobs",
            description: "Classic Amiga bobs with trails",
            background: black,
            effects: vec![
                (T::Plasma, json!({"opacity": 0.3})),
                (
                    T::Bobs,
                    json!({"bobCount": 12, "pattern": "lissajous", "trailLength": 8}),
                ),
                (
                    T::ScrollText,
                    json!({"yPosition": 90, "text": "BOBS DEMO... CLASSIC AMIGA STYLE!"}),
                ),
            ],
        },
        Template {
            id: "vector-world",
            name: "Vector World",
            description: "3D vector balls with wireframe",
            background: Color::rgb(0x00, 0x00, 0x22),
            effects: vec![
                (T::VectorBalls, json!({"formation": "sphere", "ballCount": 32})),
                (T::Wireframe3d, json!({"shape": "cube", "opacity": 0.3})),
            ],
        },
        Template {
            id: "moire-madness",
            name: "Moiré Madness",
            description: "Hypnotic moiré interference patterns",
            background: black,
            effects: vec![
                (
                    T::Moire,
                    json!({"pattern": "circles", "colors": ["#FF00FF", "#00FFFF"]}),
                ),
                (
                    T::SineWave,
                    json!({"yPosition": 50, "colors": ["#FFFFFF", "#FFFF00"]}),
                ),
            ],
        },
        Template {
            id: "lens-flare-cinema",
            name: "Lens Flare Cinema",
            description: "Cinematic lens flare with starfield",
            background: black,
            effects: vec![
                (T::Starfield, json!({"starCount": 300, "speed": 1})),
                (T::LensFlare, json!({"size": 150, "anamorphic": true})),
                (T::Logo, json!({"text": "CINEMA", "fontSize": 72})),
            ],
        },
        Template {
            id: "rotozoom-classic",
            name: "RotoZoom Classic",
            description: "Classic rotozoom effect with text overlay",
            background: black,
            effects: vec![
                (
                    T::RotoZoom,
                    json!({"pattern": "checkerboard", "rotationSpeed": 1, "zoomSpeed": 0.5}),
                ),
                (T::ScrollText, json!({"yPosition": 85, "useGradient": true})),
            ],
        },
        Template {
            id: "metaballs-glow",
            name: "Metaballs Glow",
            description: "Glowing metaballs with particle effects",
            background: Color::rgb(0x0a, 0x0a, 0x0a),
            effects: vec![
                (
                    T::Metaballs,
                    json!({"ballCount": 5, "colors": palette(NamedPalette::Neon)}),
                ),
                (T::Particles, json!({"particleCount": 50, "opacity": 0.5})),
            ],
        },
        Template {
            id: "dot-matrix-display",
            name: "Dot Matrix Display",
            description: "LED-style dot matrix scrolling display",
            background: Color::rgb(0x11, 0x11, 0x11),
            effects: vec![
                (
                    T::DotMatrix,
                    json!({"text": "WELCOME TO THE SHOW...", "color": "#FF0000"}),
                ),
                (T::Starfield, json!({"opacity": 0.3, "starCount": 100})),
            ],
        },
        Template {
            id: "glitch-art",
            name: "Glitch Art",
            description: "Digital glitch effect with cyberpunk vibes",
            background: black,
            effects: vec![
                (T::Plasma, json!({"opacity": 0.5})),
                (
                    T::Glitch,
                    json!({"intensity": 0.7, "colorShift": true, "scanlines": true}),
                ),
                (
                    T::Logo,
                    json!({"text": "ERROR", "colors": ["#FF0000", "#00FF00", "#0000FF"]}),
                ),
            ],
        },
        Template {
            id: "twister-demo",
            name: "Twister Demo",
            description: "Classic twister effect with copper bars",
            background: black,
            effects: vec![
                (T::Twister, json!({"barCount": 16, "amplitude": 100})),
                (T::CopperBars, json!({"opacity": 0.4, "barHeight": 2})),
            ],
        },
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/scene/templates.rs"]
mod tests;
