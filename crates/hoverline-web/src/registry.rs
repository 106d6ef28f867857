//! Page-wide widget registry and the JavaScript-facing API.
//!
//! All widgets on a page share one pointer signal, fed by a single
//! `mousemove` listener that lives as long as the registry.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use hoverline_core::{
    HoverBorderAnimator, HoverConfig, PointerSignal, SystemClock, ValueStore, WidgetError,
    WidgetKind, WidgetResult,
};
use uuid::Uuid;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::DomWidget;
use crate::host::MountedWidget;
use crate::local_store::LocalStore;
use crate::pointer_feed::PointerFeed;

/// JSON hover configuration on a widget root.
pub const CONFIG_ATTRIBUTE: &str = "data-hover-config";
/// Widget kind on roots picked up by `mount_all`.
pub const WIDGET_ATTRIBUTE: &str = "data-hover-widget";
/// Key under which a widget's selection is persisted.
pub const STORE_KEY_ATTRIBUTE: &str = "data-store-key";
/// Set on a root once it is mounted.
pub const MOUNTED_ATTRIBUTE: &str = "data-hover-id";

thread_local! {
    static REGISTRY: RefCell<Option<WidgetRegistry>> = const { RefCell::new(None) };
}

/// Every widget mounted on the page.
pub struct WidgetRegistry {
    pointer: PointerSignal,
    _feed: Option<PointerFeed>,
    store: Option<Rc<dyn ValueStore>>,
    widgets: HashMap<String, MountedWidget>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        let pointer = PointerSignal::new(Rc::new(SystemClock::new()));
        let feed = PointerFeed::attach(pointer.clone());
        let store = match LocalStore::open() {
            Ok(store) => Some(Rc::new(store) as Rc<dyn ValueStore>),
            Err(e) => {
                log::warn!("Selections will not persist: {}", e);
                None
            }
        };
        Self {
            pointer,
            _feed: feed,
            store,
            widgets: HashMap::new(),
        }
    }

    /// Bind and start a widget rooted at `root`, returning its id.
    pub fn mount(&mut self, root: Element, kind: WidgetKind) -> WidgetResult<String> {
        let config = match root.get_attribute(CONFIG_ATTRIBUTE) {
            Some(json) => HoverConfig::from_json(&json)?,
            None => HoverConfig::default(),
        };
        let store_key = root
            .get_attribute(STORE_KEY_ATTRIBUTE)
            .or_else(|| Some(root.id()).filter(|id| !id.is_empty()));

        let adapter = DomWidget::bind(root.clone(), kind)?;
        let animator = HoverBorderAnimator::new(adapter, self.pointer.clone(), config)?;
        let widget = MountedWidget::mount(animator, self.store.clone(), store_key);

        let id = Uuid::new_v4().to_string();
        if let Err(e) = root.set_attribute(MOUNTED_ATTRIBUTE, &id) {
            log::trace!("Failed to tag widget root: {:?}", e);
        }
        log::info!("Mounted {} widget {}", kind, id);
        self.widgets.insert(id.clone(), widget);
        Ok(id)
    }

    /// Dispose one widget. Returns false if the id is unknown.
    pub fn dispose(&mut self, id: &str) -> bool {
        let Some(mut widget) = self.widgets.remove(id) else {
            return false;
        };
        widget.dispose();
        let _ = widget.root().remove_attribute(MOUNTED_ATTRIBUTE);
        log::info!("Disposed widget {}", id);
        true
    }

    pub fn dispose_all(&mut self) {
        let ids: Vec<String> = self.widgets.keys().cloned().collect();
        for id in ids {
            self.dispose(&id);
        }
    }

    pub fn get(&self, id: &str) -> Option<&MountedWidget> {
        self.widgets.get(id)
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn with_registry<R>(f: impl FnOnce(&mut WidgetRegistry) -> R) -> R {
    REGISTRY.with(|cell| {
        let mut registry = cell.borrow_mut();
        f(registry.get_or_insert_with(WidgetRegistry::new))
    })
}

fn query(selector: &str) -> WidgetResult<Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .ok_or_else(|| WidgetError::MissingElement(selector.to_string()))
}

/// Mount the widget matching `selector`. Returns its id, or an empty
/// string if the widget could not be initialized.
#[wasm_bindgen]
pub fn mount_widget(selector: &str, kind: &str) -> String {
    let result = kind
        .parse::<WidgetKind>()
        .and_then(|kind| Ok((query(selector)?, kind)))
        .and_then(|(root, kind)| with_registry(|registry| registry.mount(root, kind)));
    match result {
        Ok(id) => id,
        Err(e) => {
            log::warn!("Failed to mount {}: {}", selector, e);
            String::new()
        }
    }
}

/// Mount every unmounted element carrying `data-hover-widget`.
#[wasm_bindgen]
pub fn mount_all() -> u32 {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return 0;
    };
    let Ok(nodes) = document.query_selector_all(&format!("[{}]", WIDGET_ATTRIBUTE)) else {
        return 0;
    };
    let mut mounted = 0;
    for i in 0..nodes.length() {
        let Some(root) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        if root.has_attribute(MOUNTED_ATTRIBUTE) {
            continue;
        }
        let kind = root.get_attribute(WIDGET_ATTRIBUTE).unwrap_or_default();
        let result = kind
            .parse::<WidgetKind>()
            .and_then(|kind| with_registry(|registry| registry.mount(root, kind)));
        match result {
            Ok(_) => mounted += 1,
            Err(e) => log::warn!("Skipping {} widget: {}", kind, e),
        }
    }
    log::debug!("Mounted {} widgets", mounted);
    mounted
}

#[wasm_bindgen]
pub fn dispose_widget(id: &str) -> bool {
    with_registry(|registry| registry.dispose(id))
}

#[wasm_bindgen]
pub fn dispose_all() {
    with_registry(|registry| registry.dispose_all());
}

/// Select an option as a click would. Returns whether the selection changed.
#[wasm_bindgen]
pub fn select_option(id: &str, index: usize) -> bool {
    with_registry(|registry| registry.get(id).is_some_and(|w| w.select(index)))
}

/// Current selection of a widget as JSON.
#[wasm_bindgen]
pub fn widget_value(id: &str) -> Option<String> {
    with_registry(|registry| {
        let value = registry.get(id)?.value()?;
        match serde_json::to_string(&value) {
            Ok(json) => Some(json),
            Err(e) => {
                log::warn!("Failed to serialize value of {}: {}", id, e);
                None
            }
        }
    })
}
