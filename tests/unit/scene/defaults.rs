use super::*;

#[test]
fn every_type_has_a_matching_default() {
    for ty in EffectType::ALL {
        let e = create_default_effect(ty);
        assert_eq!(e.effect_type(), ty);
        assert!(e.enabled);
        assert_eq!(e.z_index, 0);
        assert_eq!(e.opacity, 1.0);
        assert_eq!(e.blend_mode, BlendMode::Normal);
        assert!(!e.name.is_empty());
    }
}

#[test]
fn default_ids_are_unique() {
    let a = create_default_effect(EffectType::Plasma);
    let b = create_default_effect(EffectType::Plasma);
    assert_ne!(a.id, b.id);
    assert!(uuid::Uuid::parse_str(&a.id).is_ok());
}

#[test]
fn starfield_defaults() {
    let e = create_default_effect(EffectType::Starfield);
    assert_eq!(e.name, "Starfield");
    let EffectKind::Starfield(p) = e.kind else {
        panic!("expected starfield");
    };
    assert_eq!(p.star_count, 200);
    assert_eq!(p.speed, 3.0);
    assert_eq!(p.star_color, Color::WHITE);
}

#[test]
fn duplicate_keeps_fields_and_marks_copy() {
    let mut e = create_default_effect(EffectType::Tunnel);
    e.opacity = 0.25;
    e.z_index = 4;
    let d = duplicate_effect(&e);
    assert_ne!(d.id, e.id);
    assert_eq!(d.name, "Tunnel (Copy)");
    assert_eq!(d.kind, e.kind);
    assert_eq!(d.opacity, 0.25);
    assert_eq!(d.z_index, 4);
}

#[test]
fn matrix_charset_is_katakana_and_digits() {
    assert_eq!(MATRIX_CHARACTERS.chars().count(), 56);
    assert!(MATRIX_CHARACTERS.ends_with("0123456789"));
}
