use super::*;
use crate::assets::color::Color;
use crate::scene::defaults::create_default_effect;
use crate::scene::model::{EffectKind, EffectType};

fn project(types: &[EffectType]) -> Project {
    let mut p = Project::new("session", 64, 48, Color::rgb(10, 20, 30));
    for (i, ty) in types.iter().enumerate() {
        let mut e = create_default_effect(*ty);
        e.z_index = i as i32;
        p.effects.push(e);
    }
    p
}

fn session() -> RenderSession {
    RenderSession::new(RenderSessionOpts {
        seed: Some(11),
        ..RenderSessionOpts::default()
    })
    .unwrap()
}

#[test]
fn first_frame_seeds_every_enabled_effect() {
    let p = project(&[EffectType::Starfield, EffectType::Plasma, EffectType::Fire]);
    let mut s = session();
    s.render_frame(&p).unwrap();
    let stats = s.stats();
    assert_eq!(stats.frames_rendered, 1);
    assert_eq!(stats.reseeds, 3);
    assert_eq!(stats.layers_painted, 3);
    assert_eq!(s.instance_count(), 3);
}

#[test]
fn removed_effects_are_dropped() {
    let mut p = project(&[EffectType::Starfield, EffectType::Bobs]);
    let mut s = session();
    s.render_frame(&p).unwrap();
    let gone = p.effects.remove(0).id;
    s.render_frame(&p).unwrap();
    assert!(s.state(&gone).is_none());
    assert_eq!(s.instance_count(), 1);
    assert_eq!(s.stats().instances_dropped, 1);
}

#[test]
fn disabled_effects_are_frozen_and_hidden() {
    let mut p = project(&[EffectType::Starfield]);
    let id = p.effects[0].id.clone();
    let mut s = session();
    s.render_frame(&p).unwrap();
    let before = s.state(&id).cloned().unwrap();

    p.effects[0].enabled = false;
    let frame = s.render_frame(&p).unwrap();
    assert_eq!(s.state(&id), Some(&before));
    assert!(
        frame
            .data
            .chunks_exact(4)
            .all(|px| px == [10, 20, 30, 255])
    );
}

fn copper_time(s: &RenderSession, id: &str) -> f64 {
    match s.state(id) {
        Some(SimState::CopperBars(state)) => state.time,
        other => panic!("unexpected state {other:?}"),
    }
}

#[test]
fn reenabled_effect_resumes_from_frozen_state() {
    let mut p = project(&[EffectType::CopperBars]);
    let id = p.effects[0].id.clone();
    let speed = match &p.effects[0].kind {
        EffectKind::CopperBars(params) => params.speed,
        other => panic!("unexpected kind {other:?}"),
    };
    let mut s = session();
    for _ in 0..5 {
        s.render_frame(&p).unwrap();
    }
    let frozen = copper_time(&s, &id);
    assert!(frozen > 0.0);

    p.effects[0].enabled = false;
    for _ in 0..5 {
        s.render_frame(&p).unwrap();
    }
    assert_eq!(copper_time(&s, &id), frozen);

    p.effects[0].enabled = true;
    s.render_frame(&p).unwrap();
    assert!((copper_time(&s, &id) - (frozen + speed * 0.03)).abs() < 1e-12);
    assert_eq!(s.stats().reseeds, 1);
}

#[test]
fn degenerate_params_render_without_panicking() {
    let mut p = project(&[EffectType::CopperBars, EffectType::Fire, EffectType::Glitch]);
    for e in &mut p.effects {
        match &mut e.kind {
            EffectKind::CopperBars(params) => params.bar_height = 1e-6,
            EffectKind::Fire(params) => params.height = u32::MAX,
            EffectKind::Glitch(params) => {
                params.slice_count = u32::MAX;
                params.intensity = 1.0;
            }
            _ => {}
        }
    }
    let mut s = session();
    let frame = s.render_frame(&p).unwrap();
    assert_eq!((frame.width, frame.height), (64, 48));
    match s.state(&p.effects[1].id) {
        Some(SimState::Fire(state)) => assert_eq!(state.rows, 48),
        other => panic!("unexpected state {other:?}"),
    }
}

#[test]
fn paused_clock_holds_state_but_still_paints() {
    let p = project(&[EffectType::Starfield]);
    let id = p.effects[0].id.clone();
    let mut s = session();
    s.render_frame(&p).unwrap();
    s.clock().set_playing(false);
    let held = s.state(&id).cloned().unwrap();
    s.render_frame(&p).unwrap();
    s.render_frame(&p).unwrap();
    assert_eq!(s.state(&id), Some(&held));
    assert_eq!(s.stats().layers_painted, 3);

    s.clock().set_playing(true);
    s.render_frame(&p).unwrap();
    assert_ne!(s.state(&id), Some(&held));
}

#[test]
fn structural_change_reseeds_once() {
    let mut p = project(&[EffectType::Starfield]);
    let id = p.effects[0].id.clone();
    let mut s = session();
    s.render_frame(&p).unwrap();
    s.render_frame(&p).unwrap();
    assert_eq!(s.stats().reseeds, 1);

    if let EffectKind::Starfield(params) = &mut p.effects[0].kind {
        params.star_count = 12;
    }
    s.render_frame(&p).unwrap();
    s.render_frame(&p).unwrap();
    assert_eq!(s.stats().reseeds, 2);
    match s.state(&id) {
        Some(SimState::Starfield(st)) => assert_eq!(st.stars.len(), 12),
        other => panic!("unexpected state {other:?}"),
    }
}

#[test]
fn cosmetic_change_keeps_state() {
    let mut p = project(&[EffectType::Starfield]);
    let mut s = session();
    s.render_frame(&p).unwrap();
    if let EffectKind::Starfield(params) = &mut p.effects[0].kind {
        params.star_color = Color::rgb(255, 0, 0);
    }
    p.effects[0].opacity = 0.5;
    s.render_frame(&p).unwrap();
    assert_eq!(s.stats().reseeds, 1);
}

#[test]
fn higher_z_index_paints_on_top() {
    let mut stacked = project(&[EffectType::Checkerboard, EffectType::Plasma]);
    let plasma_only = {
        let mut p = stacked.clone();
        p.effects.remove(0);
        p
    };
    let a = session().render_frame(&stacked).unwrap();
    let b = session().render_frame(&plasma_only).unwrap();
    assert_eq!(a, b);

    // Swapping z-order puts the checkerboard floor above the plasma.
    stacked.effects[0].z_index = 5;
    let c = session().render_frame(&stacked).unwrap();
    assert_ne!(c, b);
}

#[test]
fn same_seed_same_frames() {
    let p = project(&[EffectType::Starfield, EffectType::Particles, EffectType::Glitch]);
    let a = session().render_after(&p, 5).unwrap();
    let b = session().render_after(&p, 5).unwrap();
    assert_eq!(a, b);
}

#[test]
fn render_after_rejects_zero_frames() {
    let p = project(&[]);
    assert!(session().render_after(&p, 0).is_err());
}

#[test]
fn negative_dt_is_rejected() {
    let opts = RenderSessionOpts {
        dt: -1.0,
        ..RenderSessionOpts::default()
    };
    assert!(RenderSession::new(opts).is_err());
}

#[test]
fn resize_reallocates_layers() {
    let mut p = project(&[EffectType::Plasma]);
    let mut s = session();
    s.render_frame(&p).unwrap();
    p.width = 32;
    p.height = 16;
    let frame = s.render_frame(&p).unwrap();
    assert_eq!((frame.width, frame.height), (32, 16));
    assert_eq!(s.stats().reseeds, 2);
}

#[test]
fn shader_backend_matches_cpu_for_fields() {
    let p = project(&[EffectType::Plasma]);
    let cpu = session().render_frame(&p).unwrap();
    let mut shader = RenderSession::new(RenderSessionOpts {
        seed: Some(11),
        field_backend: FieldBackend::Shader,
        threads: Some(2),
        ..RenderSessionOpts::default()
    })
    .unwrap();
    assert_eq!(shader.render_frame(&p).unwrap(), cpu);
}

#[test]
fn overlays_draw_above_effects() {
    let p = project(&[]);
    let mut s = session();
    s.set_overlays(Overlays {
        grid: true,
        scanlines: false,
    });
    let frame = s.render_frame(&p).unwrap();
    assert_ne!(frame.pixel(0, 1), Some([10, 20, 30, 255]));
    assert_eq!(frame.pixel(1, 1), Some([10, 20, 30, 255]));
}
