use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::models::dashboard_state::DashboardState;
use crate::session::now_millis;
use crate::shortcuts::{Shortcut, ShortcutMatcher, is_suppressed};

pub struct UseDashboardHandle {
    pub notifications_open: bool,
    pub toggle_notifications: Callback<()>,
    pub set_notifications_open: Callback<bool>,
    /// Report the current path; a change closes the slideover.
    pub navigated: Callback<String>,
}

/// Shared dashboard flags.
#[hook]
pub fn use_dashboard() -> UseDashboardHandle {
    let (state, dispatch) = use_store::<DashboardState>();

    let toggle_notifications = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| dispatch.reduce(|state| Rc::new(state.toggled())))
    };

    let set_notifications_open = {
        let dispatch = dispatch.clone();
        Callback::from(move |open: bool| {
            dispatch.reduce_mut(|state| state.notifications_open = open);
        })
    };

    let navigated = Callback::from(move |path: String| {
        dispatch.reduce_mut(|state| state.navigated(&path));
    });

    UseDashboardHandle {
        notifications_open: state.notifications_open,
        toggle_notifications,
        set_notifications_open,
        navigated,
    }
}

/// Bind the layout's keyboard shortcuts and close the slideover when the
/// path changes. Mount once per layout.
#[hook]
pub fn use_dashboard_shortcuts() {
    let dashboard = use_dashboard();
    let navigator = use_navigator();
    let location = use_location();
    let matcher = use_mut_ref(ShortcutMatcher::default);

    {
        let navigated = dashboard.navigated.clone();
        let path = location.map(|location| location.path().to_string());
        use_effect_with(path, move |path| {
            if let Some(path) = path {
                navigated.emit(path.clone());
            }
            || ()
        });
    }

    let toggle = dashboard.toggle_notifications;
    use_event_with_window("keydown", move |event: KeyboardEvent| {
        let tag = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .map(|element| element.tag_name());
        if is_suppressed(
            tag.as_deref(),
            event.ctrl_key(),
            event.meta_key(),
            event.alt_key(),
        ) {
            matcher.borrow_mut().reset();
            return;
        }
        let shortcut = matcher.borrow_mut().feed(&event.key(), now_millis());
        match shortcut {
            Some(Shortcut::Navigate(route)) => {
                if let Some(navigator) = &navigator {
                    log::debug!("shortcut to {route:?}");
                    navigator.push(&route);
                }
            }
            Some(Shortcut::ToggleNotifications) => toggle.emit(()),
            None => {}
        }
    });
}
