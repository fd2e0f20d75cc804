// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tokio::sync::mpsc::{self, error::TrySendError};

/// Number of actions that can be queued before producers are made to wait.
pub const DISPATCHER_CAPACITY: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum DispatchError {
    /// The single [`ActionReceiver`] has been dropped, so nobody will ever reduce this
    /// action. This is how producers learn that the session is over.
    #[error("action queue is closed")]
    #[diagnostic(code(binx_redux::dispatch::closed))]
    Closed,

    /// Only returned by [`ActionDispatcher::try_dispatch`].
    #[error("action queue is full")]
    #[diagnostic(code(binx_redux::dispatch::full))]
    Full,
}

/// Producer side of the action queue. Cheap to clone, one per producer task.
#[derive(Debug)]
pub struct ActionDispatcher<A> {
    sender: mpsc::Sender<A>,
}

impl<A> Clone for ActionDispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

/// Consumer side of the action queue. There is exactly one of these.
#[derive(Debug)]
pub struct ActionReceiver<A> {
    receiver: mpsc::Receiver<A>,
}

/// Creates a bounded FIFO queue that holds at most `capacity` actions.
///
/// # Panics
///
/// Panics if `capacity` is 0.
#[must_use]
pub fn create_dispatcher<A>(capacity: usize) -> (ActionDispatcher<A>, ActionReceiver<A>) {
    let (sender, receiver) = mpsc::channel(capacity);
    (ActionDispatcher { sender }, ActionReceiver { receiver })
}

impl<A> ActionDispatcher<A> {
    /// Enqueue `action`, waiting for space if the queue is full.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Closed`] if the receiver has been dropped.
    pub async fn dispatch(&self, action: A) -> Result<(), DispatchError> {
        self.sender.send(action).await.map_err(|_| {
            tracing::debug!(message = "ActionDispatcher::dispatch -> receiver dropped");
            DispatchError::Closed
        })
    }

    /// Enqueue `action` without waiting.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Full`] if there is no room, or
    /// [`DispatchError::Closed`] if the receiver has been dropped.
    pub fn try_dispatch(&self, action: A) -> Result<(), DispatchError> {
        self.sender.try_send(action).map_err(|err| match err {
            TrySendError::Full(_) => DispatchError::Full,
            TrySendError::Closed(_) => DispatchError::Closed,
        })
    }

    #[must_use]
    pub fn is_closed(&self) -> bool { self.sender.is_closed() }
}

impl<A> ActionReceiver<A> {
    /// Next action in submission order. Returns [`None`] once every
    /// [`ActionDispatcher`] has been dropped and the queue is drained.
    pub async fn recv(&mut self) -> Option<A> { self.receiver.recv().await }

    /// Stop accepting new actions. Already queued actions can still be received.
    pub fn close(&mut self) { self.receiver.close(); }
}
