//! Main content area that leaves room for the navigation sidebar.
//!
//! ARCHITECTURE
//! ============
//! Holds a [`panel::PanelMirror`], never a handle to the sidebar. The mirror
//! follows same-tab `sidebarStateChange` events and cross-tab `storage`
//! events; this component only turns its phase into left padding. Before
//! hydration the padding is the mirror fallback (panel width reserved).

#[cfg(feature = "hydrate")]
use std::rc::Rc;

use leptos::prelude::*;
use panel::{PanelConfig, PanelPhase};
#[cfg(feature = "hydrate")]
use panel::browser::{BrowserStorage, DomChannel, viewport_width};
#[cfg(feature = "hydrate")]
use panel::{Mounted, PanelMirror, PanelStore, Subscription};

use crate::util::layout::content_style;

#[cfg(feature = "hydrate")]
struct MirrorHost {
    _mirror: PanelMirror,
    _observer: Subscription,
    _mounted: Mounted,
}

/// Wraps routed pages in a `<main>` padded by the mirrored panel width.
#[component]
pub fn ContentFrame(children: Children) -> impl IntoView {
    let phase = RwSignal::new(PanelPhase::Uninitialized);
    let config = PanelConfig::default();
    let style = move || content_style(config.reserved_width_px(phase.get()));

    #[cfg(feature = "hydrate")]
    {
        let host = StoredValue::new_local(None::<MirrorHost>);
        Effect::new(move || {
            if host.with_value(Option::is_some) {
                return;
            }
            let mirror = PanelMirror::new();
            let observer = mirror.observe(move |next| phase.set(next));
            let store = PanelStore::new(Rc::new(BrowserStorage));
            let mounted = mirror.mount(&store, &DomChannel, viewport_width());
            host.set_value(Some(MirrorHost {
                _mirror: mirror,
                _observer: observer,
                _mounted: mounted,
            }));
        });

        on_cleanup(move || {
            drop(host.try_update_value(Option::take));
        });
    }

    view! {
        <main id="main-content" class="content-frame" role="main" style=style>
            <div class="content-frame__inner">{children()}</div>
        </main>
    }
}
