//! Hoverline Core Library
//!
//! Platform-agnostic hover-border engine shared by every form widget family:
//! the shared pointer signal, the per-widget animation state machine, the
//! adapter contract widgets implement, and selection bookkeeping.

pub mod adapter;
pub mod animator;
pub mod clock;
pub mod config;
pub mod error;
pub mod geometry;
pub mod headless;
pub mod pointer;
pub mod selection;
pub mod storage;
pub mod timers;
pub mod widget;

pub use adapter::{BorderElement, BorderHandles, HoverTarget, StyleProperty, WidgetAdapter};
pub use animator::{HoverBorderAnimator, HoverPhase, HoverState, TimeoutRequest};
pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use config::HoverConfig;
pub use error::{ConfigError, WidgetError, WidgetResult};
pub use geometry::{BorderTransform, BoundingBox, Side, find_hovered_option, nearest_option};
pub use headless::{HeadlessOption, HeadlessRunner, HeadlessWidget, RecordingElement};
pub use pointer::{PointerPosition, PointerSignal};
pub use selection::{SelectionMode, SelectionModel, SelectionValue};
pub use storage::{MemoryStore, StoreError, StoreResult, ValueStore};
pub use timers::TimerQueue;
pub use widget::WidgetKind;
