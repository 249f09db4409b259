use serde_json::json;

use super::*;
use crate::editor::persistence::MemoryStore;
use crate::scene::model::EffectKind;

fn store_with_project() -> EditorStore {
    let mut s = EditorStore::new();
    s.create_project("demo", 320, 200).unwrap();
    s
}

fn speed_of(s: &EditorStore, id: &str) -> f64 {
    match &s.project().unwrap().effect(id).unwrap().kind {
        EffectKind::Starfield(p) => p.speed,
        other => panic!("unexpected kind {other:?}"),
    }
}

#[test]
fn defaults() {
    let s = EditorStore::new();
    assert!(s.project().is_none());
    assert!(s.is_playing());
    assert_eq!(s.zoom(), 1.0);
    assert!(!s.show_grid());
    assert!(!s.is_fullscreen());
    assert!(!s.can_undo());
}

#[test]
fn create_project_opens_and_lists_it() {
    let mut s = EditorStore::new();
    let id = s.create_project("first", 800, 600).unwrap().id.clone();
    assert_eq!(s.projects().len(), 1);
    assert_eq!(s.project().unwrap().id, id);
    assert_eq!(s.project().unwrap().background_color, Color::BLACK);
    assert!(s.create_project("bad", 0, 10).is_err());
    assert_eq!(s.projects().len(), 1);
}

#[test]
fn commands_without_project_are_noops() {
    let mut s = EditorStore::new();
    assert!(s.add_effect(EffectType::Plasma).is_none());
    assert!(!s.remove_effect("x"));
    assert!(!s.save_project());
    assert_eq!(s.export_project().unwrap(), "");
    assert!(!s.can_undo());
}

#[test]
fn add_effect_stacks_on_top_and_selects() {
    let mut s = store_with_project();
    let a = s.add_effect(EffectType::Plasma).unwrap();
    let b = s.add_effect(EffectType::Starfield).unwrap();
    let p = s.project().unwrap();
    assert_eq!(p.effect(&a).unwrap().z_index, 0);
    assert_eq!(p.effect(&b).unwrap().z_index, 1);
    assert_eq!(s.selected_effect_id(), Some(b.as_str()));
}

#[test]
fn remove_effect_clears_selection() {
    let mut s = store_with_project();
    let a = s.add_effect(EffectType::Fire).unwrap();
    assert!(s.remove_effect(&a));
    assert!(s.selected_effect_id().is_none());
    assert!(!s.remove_effect(&a));
}

#[test]
fn update_effect_merges_fields() {
    let mut s = store_with_project();
    let id = s.add_effect(EffectType::Starfield).unwrap();
    assert!(
        s.update_effect(&id, &json!({"speed": 9.0, "opacity": 0.5, "id": "hijack"}))
            .unwrap()
    );
    let e = s.project().unwrap().effect(&id).unwrap();
    assert_eq!(e.opacity, 0.5);
    assert_eq!(speed_of(&s, &id), 9.0);
    assert!(!s.update_effect("missing", &json!({"speed": 1.0})).unwrap());
}

#[test]
fn invalid_update_leaves_project_untouched() {
    let mut s = store_with_project();
    let id = s.add_effect(EffectType::Starfield).unwrap();
    let before = s.project().cloned();
    assert!(s.update_effect(&id, &json!({"starCount": "many"})).is_err());
    assert!(s.update_effect(&id, &json!({"opacity": 3.0})).is_err());
    assert!(s.update_effect(&id, &json!([1, 2])).is_err());
    assert_eq!(s.project().cloned(), before);
}

#[test]
fn duplicate_appends_copy_and_selects_it() {
    let mut s = store_with_project();
    let id = s.add_effect(EffectType::Bobs).unwrap();
    let copy = s.duplicate_effect(&id).unwrap();
    assert_ne!(copy, id);
    let p = s.project().unwrap();
    assert_eq!(p.effects.len(), 2);
    assert_eq!(p.effect(&copy).unwrap().name, "Bouncing Bobs (Copy)");
    assert_eq!(s.selected_effect_id(), Some(copy.as_str()));
    assert!(s.duplicate_effect("missing").is_none());
}

#[test]
fn reorder_renumbers_z_indices() {
    let mut s = store_with_project();
    let a = s.add_effect(EffectType::Plasma).unwrap();
    let b = s.add_effect(EffectType::Fire).unwrap();
    let c = s.add_effect(EffectType::Logo).unwrap();
    assert!(s.reorder_effects(2, 0));
    let ids: Vec<(&str, i32)> = s
        .project()
        .unwrap()
        .effects
        .iter()
        .map(|e| (e.id.as_str(), e.z_index))
        .collect();
    assert_eq!(ids, vec![(c.as_str(), 0), (a.as_str(), 1), (b.as_str(), 2)]);
    assert!(!s.reorder_effects(7, 0));
}

#[test]
fn toggle_enabled_flips() {
    let mut s = store_with_project();
    let id = s.add_effect(EffectType::Vhs).unwrap();
    assert!(s.toggle_effect_enabled(&id));
    assert!(!s.project().unwrap().effect(&id).unwrap().enabled);
}

#[test]
fn zoom_is_clamped() {
    let mut s = EditorStore::new();
    s.set_zoom(-1.0);
    assert_eq!(s.zoom(), 0.25);
    s.set_zoom(9.0);
    assert_eq!(s.zoom(), 2.0);
    s.set_zoom(f64::NAN);
    assert_eq!(s.zoom(), 2.0);
}

#[test]
fn view_toggles_do_not_enter_history() {
    let mut s = EditorStore::new();
    assert!(s.toggle_grid());
    assert!(s.toggle_fullscreen());
    assert!(!s.toggle_playing());
    s.select_effect(Some("x"));
    assert!(!s.can_undo());
}

#[test]
fn playback_clock_is_shared() {
    let mut s = EditorStore::new();
    let clock = s.playback().clone();
    s.set_playing(false);
    assert!(!clock.is_playing());
}

#[test]
fn revision_increases_on_every_command() {
    let mut s = EditorStore::new();
    let r0 = s.revision();
    s.toggle_grid();
    let r1 = s.revision();
    s.create_project("p", 10, 10).unwrap();
    assert!(r1 > r0);
    assert!(s.revision() > r1);
}

#[test]
fn preset_applies_only_to_same_type() {
    let mut s = store_with_project();
    let star = s.add_effect(EffectType::Starfield).unwrap();
    s.update_effect(&star, &json!({"speed": 7.0, "opacity": 0.25}))
        .unwrap();
    let preset = s.save_preset("fast", &star).unwrap();

    let plasma = s.add_effect(EffectType::Plasma).unwrap();
    assert!(!s.load_preset(&preset));

    let other = s.add_effect(EffectType::Starfield).unwrap();
    assert!(s.load_preset(&preset));
    let e = s.project().unwrap().effect(&other).unwrap();
    assert_eq!(e.name, "Starfield");
    assert_eq!(e.opacity, 0.25);
    assert_eq!(speed_of(&s, &other), 7.0);
    assert!(s.project().unwrap().effect(&plasma).is_some());

    assert!(s.delete_preset(&preset));
    assert!(!s.load_preset(&preset));
}

#[test]
fn import_rejects_garbage_and_keeps_state() {
    let mut s = store_with_project();
    let before = s.project().cloned();
    let revision = s.revision();
    assert!(s.import_project("not json").is_err());
    assert_eq!(s.project().cloned(), before);
    assert_eq!(s.revision(), revision);
}

#[test]
fn export_then_import_reassigns_identity() {
    let mut s = store_with_project();
    s.add_effect(EffectType::Plasma).unwrap();
    s.add_effect(EffectType::Tunnel).unwrap();
    let json = s.export_project().unwrap();
    let original = s.project().cloned().unwrap();

    let imported = s.import_project(&json).unwrap().clone();
    assert_ne!(imported.id, original.id);
    assert_eq!(imported.effects, original.effects);
    assert_eq!(s.projects().len(), 2);
    assert!(s.selected_effect_id().is_none());
}

#[test]
fn apply_template_opens_it() {
    let mut s = EditorStore::new();
    let p = s.apply_template("plasma-dream").unwrap();
    assert_eq!((p.width, p.height), (800, 600));
    assert!(!p.effects.is_empty());
    assert!(s.apply_template("nope").is_err());
}

#[test]
fn save_project_upserts() {
    let mut s = EditorStore::new();
    s.apply_template("retro-fire").unwrap();
    assert!(s.projects().is_empty());
    assert!(s.save_project());
    assert!(s.save_project());
    assert_eq!(s.projects().len(), 1);
}

#[test]
fn delete_open_project_closes_it() {
    let mut s = store_with_project();
    let id = s.project().unwrap().id.clone();
    assert!(s.delete_project(&id));
    assert!(s.project().is_none());
    assert!(s.projects().is_empty());
    assert!(s.undo());
    assert_eq!(s.project().unwrap().id, id);
}

#[test]
fn undo_redo_walks_project_snapshots() {
    let mut s = store_with_project();
    let id = s.add_effect(EffectType::Starfield).unwrap();
    assert!(s.undo());
    assert!(s.project().unwrap().effects.is_empty());
    assert!(s.redo());
    assert!(s.project().unwrap().effect(&id).is_some());
    assert!(!s.redo());
}

#[test]
fn history_is_bounded_to_fifty() {
    let mut s = store_with_project();
    let id = s.add_effect(EffectType::Starfield).unwrap();
    for i in 1..=51 {
        s.update_effect(&id, &json!({ "speed": f64::from(i) }))
            .unwrap();
    }
    let mut undone = 0;
    for _ in 0..51 {
        if s.undo() {
            undone += 1;
        }
    }
    assert_eq!(undone, 50);
    assert_eq!(speed_of(&s, &id), 1.0);
}

#[test]
fn update_settings_validates_canvas() {
    let mut s = store_with_project();
    assert!(
        s.update_project_settings(ProjectSettings {
            name: Some("renamed".into()),
            background_color: Some(Color::rgb(1, 2, 3)),
            ..ProjectSettings::default()
        })
        .unwrap()
    );
    assert_eq!(s.project().unwrap().name, "renamed");
    assert!(
        s.update_project_settings(ProjectSettings {
            width: Some(0),
            ..ProjectSettings::default()
        })
        .is_err()
    );
    assert_eq!(s.project().unwrap().width, 320);
}

#[test]
fn persisted_subset_round_trips() {
    let mut s = store_with_project();
    s.set_zoom(0.5);
    s.toggle_grid();
    s.toggle_fullscreen();
    let mut kv = MemoryStore::new();
    s.persist(&mut kv).unwrap();

    let restored = EditorStore::load(&kv).unwrap();
    assert_eq!(restored.zoom(), 0.5);
    assert!(restored.show_grid());
    assert!(!restored.is_fullscreen());
    assert_eq!(restored.projects().len(), 1);
    assert!(restored.project().is_none());
}
