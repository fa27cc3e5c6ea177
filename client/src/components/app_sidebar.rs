//! Collapsible navigation sidebar; the only writer of the panel state.
//!
//! ARCHITECTURE
//! ============
//! Rendering reads a local `RwSignal<PanelPhase>`. Before hydration that
//! signal is `Uninitialized`, so SSR and the first client render both use the
//! owner fallback (closed). A hydrate-only effect builds a
//! [`panel::PanelOwner`] over `localStorage` and the DOM change event, copies
//! its phase into the signal, and wires window resize plus the Ctrl+B
//! shortcut. Buttons route through the owner so every change is persisted and
//! broadcast.

#[cfg(feature = "hydrate")]
use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use panel::{PanelConfig, PanelPhase};
#[cfg(feature = "hydrate")]
use panel::browser::{BrowserStorage, DomChannel, attach_owner_host, viewport_width};
#[cfg(feature = "hydrate")]
use panel::{Mounted, PanelOwner, PanelStore, Subscription};

use crate::state::navigation::{DEFAULT_EXPANDED, is_active_link, sidebar_sections, toggle_section};
use crate::util::layout::{chevron_style, sidebar_class};

#[cfg(feature = "hydrate")]
struct SidebarHost {
    owner: PanelOwner,
    _observer: Subscription,
    _mounted: Mounted,
    _listeners: Mounted,
}

/// Left navigation sidebar with open/close buttons and a Ctrl+B shortcut.
///
/// `disabled` turns the keyboard shortcut off; the buttons keep working.
#[component]
pub fn AppSidebar(#[prop(optional)] disabled: bool) -> impl IntoView {
    let phase = RwSignal::new(PanelPhase::Uninitialized);
    let expanded = RwSignal::new(DEFAULT_EXPANDED.to_vec());
    let pathname = use_location().pathname;
    let config = PanelConfig::default();
    let is_open = Memo::new(move |_| config.owner_open(phase.get()));

    #[cfg(feature = "hydrate")]
    let host = StoredValue::new_local(None::<SidebarHost>);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            if host.with_value(Option::is_some) {
                return;
            }
            let owner = PanelOwner::new(PanelStore::new(Rc::new(BrowserStorage)), Rc::new(DomChannel));
            owner.set_disabled(disabled);
            let observer = owner.observe(move |next| phase.set(next));
            let mounted = owner.mount(viewport_width());
            let listeners = attach_owner_host(&owner);
            host.set_value(Some(SidebarHost {
                owner,
                _observer: observer,
                _mounted: mounted,
                _listeners: listeners,
            }));
        });

        on_cleanup(move || {
            drop(host.try_update_value(Option::take));
        });
    }

    let set_open = {
        #[cfg(feature = "hydrate")]
        {
            move |open: bool| {
                host.with_value(|host| {
                    if let Some(host) = host {
                        host.owner.set_open(open);
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = disabled;
            move |_open: bool| {}
        }
    };

    let sections = sidebar_sections()
        .iter()
        .map(|section| {
            let id = section.id;
            let items = section.items;
            let section_open = move || expanded.with(|e| e.contains(&id));
            view! {
                <div class="app-sidebar__section">
                    <button
                        class="app-sidebar__section-header"
                        on:click=move |_| expanded.update(|e| toggle_section(e, id))
                    >
                        <span class="app-sidebar__chevron" style=move || chevron_style(section_open())>"›"</span>
                        {section.title}
                    </button>
                    <Show when=section_open>
                        <ul class="app-sidebar__items">
                            {items
                                .iter()
                                .map(|item| {
                                    let href = item.href;
                                    view! {
                                        <li>
                                            <a
                                                class="app-sidebar__link"
                                                class:app-sidebar__link--active=move || {
                                                    pathname.with(|path| is_active_link(href, path))
                                                }
                                                href=href
                                            >
                                                {item.label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </Show>
                </div>
            }
        })
        .collect_view();

    view! {
        <Show when=move || !is_open.get()>
            <button
                class="app-sidebar__open"
                aria-label="Open navigation"
                title="Open navigation (Ctrl+B)"
                on:click=move |_| set_open(true)
            >
                "☰"
            </button>
        </Show>
        <aside
            class=move || sidebar_class(is_open.get())
            aria-hidden=move || if is_open.get() { "false" } else { "true" }
            attr:data-phase=move || if phase.get().is_mounted() { "ready" } else { "pending" }
            on:mouseleave=move |_| set_open(false)
        >
            <div class="app-sidebar__header">
                <h2>"Menu"</h2>
                <button class="app-sidebar__close" aria-label="Close navigation" on:click=move |_| set_open(false)>
                    "×"
                </button>
            </div>
            <nav class="app-sidebar__nav">{sections}</nav>
            <div class="app-sidebar__footer">
                <p>"© Khota Training & Consulting"</p>
            </div>
        </aside>
    }
}
