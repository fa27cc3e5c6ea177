use panel::{PanelConfig, PanelPhase};

use super::*;

#[test]
fn sidebar_class_marks_open_state() {
    assert_eq!(sidebar_class(true), "app-sidebar app-sidebar--open");
    assert_eq!(sidebar_class(false), "app-sidebar");
}

#[test]
fn content_style_rounds_to_whole_pixels() {
    assert_eq!(content_style(320.0), "padding-left: 320px;");
    assert_eq!(content_style(0.0), "padding-left: 0px;");
}

#[test]
fn pre_mount_markup_is_fixed() {
    let config = PanelConfig::default();
    let server = (
        sidebar_class(config.owner_open(PanelPhase::Uninitialized)),
        content_style(config.reserved_width_px(PanelPhase::Uninitialized)),
    );
    assert_eq!(server.0, "app-sidebar");
    assert_eq!(server.1, "padding-left: 320px;");
}

#[test]
fn resolved_phase_drives_both_outputs() {
    let config = PanelConfig::default();
    let closed = PanelPhase::Resolved(false);
    assert_eq!(sidebar_class(config.owner_open(closed)), "app-sidebar");
    assert_eq!(content_style(config.reserved_width_px(closed)), "padding-left: 0px;");

    let open = PanelPhase::Resolved(true);
    assert_eq!(sidebar_class(config.owner_open(open)), "app-sidebar app-sidebar--open");
    assert_eq!(content_style(config.reserved_width_px(open)), "padding-left: 320px;");
}

#[test]
fn chevron_points_down_when_expanded() {
    assert_eq!(chevron_style(true), "transform: rotate(0deg);");
    assert_eq!(chevron_style(false), "transform: rotate(-90deg);");
}
