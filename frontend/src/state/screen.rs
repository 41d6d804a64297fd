use crate::api::ApiError;
use leptos::*;
use std::{cell::Cell, future::Future, rc::Rc};

/// Lifecycle of a screen's initial load.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState<T> {
    Idle,
    Loading,
    Populated(T),
    Empty,
    NotFound(String),
    Error(String),
}

impl<T> ScreenState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ScreenState::Populated(data) => Some(data),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Owns a screen's state and the generation counter that decides which load
/// result may still be applied.
pub struct ScreenLoader<T: 'static> {
    state: RwSignal<ScreenState<T>>,
    generation: Rc<Cell<u64>>,
    fallback: &'static str,
    is_empty: fn(&T) -> bool,
}

impl<T: 'static> Clone for ScreenLoader<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            generation: Rc::clone(&self.generation),
            fallback: self.fallback,
            is_empty: self.is_empty,
        }
    }
}

impl<T: Clone + 'static> ScreenLoader<T> {
    pub fn new(fallback: &'static str) -> Self {
        Self::with_empty_check(fallback, |_| false)
    }

    pub fn with_empty_check(fallback: &'static str, is_empty: fn(&T) -> bool) -> Self {
        let loader = Self {
            state: create_rw_signal(ScreenState::Idle),
            generation: Rc::new(Cell::new(0)),
            fallback,
            is_empty,
        };
        let on_unmount = loader.clone();
        on_cleanup(move || on_unmount.invalidate());
        loader
    }

    pub fn state(&self) -> ReadSignal<ScreenState<T>> {
        self.state.read_only()
    }

    /// Starts a new generation; results of older tickets are dropped from now on.
    pub fn begin(&self) -> LoadTicket {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        self.state.try_set(ScreenState::Loading);
        LoadTicket(next)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.generation.get() == ticket.0
    }

    /// Discards whatever load is in flight without touching the state.
    pub fn invalidate(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }

    /// Applies `result` if `ticket` is still current; returns whether it was applied.
    pub fn finish(&self, ticket: LoadTicket, result: Result<T, ApiError>) -> bool {
        if !self.is_current(ticket) {
            log::debug!("dropping stale load result (generation {})", ticket.0);
            return false;
        }
        let next = match result {
            Ok(data) if (self.is_empty)(&data) => ScreenState::Empty,
            Ok(data) => ScreenState::Populated(data),
            Err(err) => {
                log::warn!("{}: {}", self.fallback, err);
                let message = err.message_or(self.fallback);
                if err.is_not_found() {
                    ScreenState::NotFound(message)
                } else {
                    ScreenState::Error(message)
                }
            }
        };
        self.state.try_set(next);
        true
    }

    /// Runs `fetch` under a fresh ticket on the local executor.
    pub fn load<Fut>(&self, fetch: Fut)
    where
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let ticket = self.begin();
        let loader = self.clone();
        spawn_local(async move {
            let result = fetch.await;
            loader.finish(ticket, result);
        });
    }
}
