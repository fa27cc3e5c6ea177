use super::*;

#[test]
fn default_uses_shipped_constants() {
    let config = PanelConfig::default();
    assert_eq!(config.storage_key, "sidebarOpen");
    assert!((config.breakpoint_px - 1024.0).abs() < f64::EPSILON);
    assert!((config.panel_width_px - 320.0).abs() < f64::EPSILON);
    assert_eq!(config.shortcut_key, 'b');
}

#[test]
fn default_keeps_fallback_asymmetry() {
    let config = PanelConfig::default();
    assert!(!config.owner_fallback);
    assert!(config.mirror_fallback);
    assert_ne!(
        config.owner_open(PanelPhase::Uninitialized),
        config.mirror_open(PanelPhase::Uninitialized)
    );
}

#[test]
fn unified_sets_both_fallbacks() {
    let closed = PanelConfig::unified(false);
    assert!(!closed.owner_fallback);
    assert!(!closed.mirror_fallback);
    assert_eq!(
        closed.owner_open(PanelPhase::Uninitialized),
        closed.mirror_open(PanelPhase::Uninitialized)
    );

    let open = PanelConfig::unified(true);
    assert!(open.owner_fallback && open.mirror_fallback);
    assert_eq!(open.storage_key, PanelConfig::default().storage_key);
}

#[test]
fn render_values_follow_phase_after_mount() {
    let config = PanelConfig::default();
    assert!(!config.owner_open(PanelPhase::Uninitialized));
    assert!(config.mirror_open(PanelPhase::Uninitialized));
    for open in [true, false] {
        let phase = PanelPhase::Resolved(open);
        assert_eq!(config.owner_open(phase), open);
        assert_eq!(config.mirror_open(phase), open);
    }
}

#[test]
fn reserved_width_is_panel_width_or_zero() {
    let config = PanelConfig::default();
    assert!((config.reserved_width_px(PanelPhase::Uninitialized) - 320.0).abs() < f64::EPSILON);
    assert!((config.reserved_width_px(PanelPhase::Resolved(true)) - 320.0).abs() < f64::EPSILON);
    assert!(config.reserved_width_px(PanelPhase::Resolved(false)).abs() < f64::EPSILON);
}

#[test]
fn resolved_default_ignores_mirror_fallback() {
    let config = PanelConfig::default();
    assert!(!config.resolved_default(None));
    assert!(config.resolved_default(Some(1024.0)));
    assert!(!config.resolved_default(Some(1023.0)));

    let open = PanelConfig::unified(true);
    assert!(open.resolved_default(None));
}
