use leptos::*;
use std::{cell::RefCell, collections::HashMap, rc::Rc};
use uuid::Uuid;

/// How long a toast stays on screen before it removes itself.
pub const TOAST_DURATION_MS: u64 = 3500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(Uuid);

impl ToastId {
    fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => {
                "bg-status-success-bg border-status-success-border text-status-success-text"
            }
            ToastKind::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub text: String,
    pub kind: ToastKind,
}

/// Active toasts in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, text: impl Into<String>, kind: ToastKind) -> ToastId {
        let id = ToastId::fresh();
        self.items.push(Toast {
            id,
            text: text.into(),
            kind,
        });
        id
    }

    /// Returns whether a toast was removed; unknown ids are ignored.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(target_arch = "wasm32")]
type TimerHandle = leptos::leptos_dom::helpers::TimeoutHandle;
#[cfg(not(target_arch = "wasm32"))]
type TimerHandle = ();

/// Root-scoped toast queue plus the expiry timers of its entries.
#[derive(Clone)]
pub struct ToastContext {
    queue: RwSignal<ToastQueue>,
    timers: Rc<RefCell<HashMap<ToastId, TimerHandle>>>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            queue: create_rw_signal(ToastQueue::default()),
            timers: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn show(&self, text: impl Into<String>, kind: ToastKind) -> ToastId {
        let text = text.into();
        log::debug!("toast ({:?}): {}", kind, text);
        let Some(id) = self.queue.try_update(|queue| queue.push(text, kind)) else {
            return ToastId::fresh();
        };
        self.schedule_expiry(id);
        id
    }

    pub fn success(&self, text: impl Into<String>) -> ToastId {
        self.show(text, ToastKind::Success)
    }

    pub fn error(&self, text: impl Into<String>) -> ToastId {
        self.show(text, ToastKind::Error)
    }

    pub fn dismiss(&self, id: ToastId) {
        if let Some(_handle) = self.timers.borrow_mut().remove(&id) {
            #[cfg(target_arch = "wasm32")]
            _handle.clear();
        }
        self.queue.try_update(|queue| queue.dismiss(id));
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        let queue = self.queue;
        Signal::derive(move || queue.with(|q| q.items().to_vec()))
    }

    /// Cancels every pending expiry; used when the hosting view unmounts.
    pub fn cancel_timers(&self) {
        for (_id, _handle) in self.timers.borrow_mut().drain() {
            #[cfg(target_arch = "wasm32")]
            _handle.clear();
        }
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Timer body: forgets the handle and removes the toast.
    fn expire(&self, id: ToastId) {
        self.timers.borrow_mut().remove(&id);
        self.queue.try_update(|queue| queue.dismiss(id));
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_expiry(&self, id: ToastId) {
        let ctx = self.clone();
        let scheduled = set_timeout_with_handle(
            move || ctx.expire(id),
            std::time::Duration::from_millis(TOAST_DURATION_MS),
        );
        match scheduled {
            Ok(handle) => {
                self.timers.borrow_mut().insert(id, handle);
            }
            Err(_) => log::warn!("could not schedule toast expiry"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_expiry(&self, id: ToastId) {
        self.timers.borrow_mut().insert(id, ());
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the application's toast queue and tears its timers down with the owner.
pub fn provide_toasts() -> ToastContext {
    let ctx = ToastContext::new();
    provide_context(ctx.clone());
    let for_cleanup = ctx.clone();
    on_cleanup(move || for_cleanup.cancel_timers());
    ctx
}

pub fn use_toasts() -> ToastContext {
    match use_context::<ToastContext>() {
        Some(ctx) => ctx,
        None => {
            log::warn!("toast context missing; toasts raised here will not be rendered");
            provide_toasts()
        }
    }
}
