// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          sync::Arc};

use tokio::sync::Mutex;

use crate::{Continuation, Reducer};

/// The state is shared between the reducer (writer) and any readers. There is exactly
/// one lock, and it is exclusive: a reduction and a render pass never overlap.
pub type SharedState<S> = Arc<Mutex<S>>;

/// Thread safe and async Redux store (using [`tokio`]).
///
/// Unlike a classic Redux store, this one has exactly one reducer and no subscribers or
/// middleware. Whoever drains the [`crate::ActionReceiver`] calls
/// [`Store::dispatch_action`] for each action, in order, and then decides what to do
/// with the new state (eg: render it).
pub struct Store<S, A> {
    state: SharedState<S>,
    reducer: Box<dyn Reducer<S, A>>,
}

impl<S: Debug, A> Debug for Store<S, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("reducer", &"<dyn Reducer>")
            .finish()
    }
}

impl<S, A> Store<S, A>
where
    S: Send,
{
    pub fn new(state: S, reducer: impl Reducer<S, A> + 'static) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            reducer: Box::new(reducer),
        }
    }

    /// Returns a handle to the state. Lock it for the duration of one read pass only.
    #[must_use]
    pub fn get_shared_state(&self) -> SharedState<S> { self.state.clone() }

    /// Runs the reducer against the state for a single `action`. The lock is acquired
    /// before the reducer runs and released as soon as it returns.
    pub async fn dispatch_action(&self, action: A) -> Continuation {
        let mut state = self.state.lock().await;
        self.reducer.run(action, &mut state)
    }
}

impl<S, A> Store<S, A>
where
    S: Send + Clone,
{
    /// Clone of the current state. Mostly useful in tests.
    pub async fn get_state(&self) -> S { self.state.lock().await.clone() }
}
