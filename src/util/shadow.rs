//! Browser shadow-root glue for hydrated cards.
//!
//! Declarative shadow roots are only honoured when the browser parses the
//! initial document. Markup inserted later through `innerHTML` keeps its
//! `<template shadowrootmode>` inert, so hydrated cards attach (or reuse) an
//! open shadow root imperatively and write the element's root contents into it.
//! Requires a browser environment.

#![cfg(feature = "hydrate")]

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;

use crate::registry::RECIPE_CARD_TAG;

/// Run `callback` on the next animation frame, after pending DOM updates have
/// landed. Runs it immediately when no frame can be requested.
pub fn after_next_frame(callback: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        callback();
        return;
    };
    let slot = std::rc::Rc::new(std::cell::Cell::new(Some(callback)));
    let slot_for_frame = std::rc::Rc::clone(&slot);
    let frame = Closure::once_into_js(move || {
        if let Some(callback) = slot_for_frame.take() {
            callback();
        }
    });
    if let Err(err) = window.request_animation_frame(frame.unchecked_ref()) {
        leptos::logging::warn!("recipe-card: requestAnimationFrame failed: {err:?}");
        if let Some(callback) = slot.take() {
            callback();
        }
    }
}

/// Write `root_html` into the open shadow root of the `<recipe-card>` under
/// `mount`, attaching the root first if the host has none.
pub fn sync_shadow_root(mount: &web_sys::Element, root_html: &str) {
    let host = match mount.query_selector(RECIPE_CARD_TAG) {
        Ok(Some(host)) => host,
        Ok(None) => return,
        Err(err) => {
            leptos::logging::warn!("recipe-card: host lookup failed: {err:?}");
            return;
        }
    };
    let root = if let Some(root) = host.shadow_root() {
        root
    } else {
        let init = web_sys::ShadowRootInit::new(web_sys::ShadowRootMode::Open);
        match host.attach_shadow(&init) {
            Ok(root) => root,
            Err(err) => {
                leptos::logging::warn!("recipe-card: attachShadow failed: {err:?}");
                return;
            }
        }
    };
    root.set_inner_html(root_html);
}
