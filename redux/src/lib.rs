// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A small Redux store built on [Tokio](https://tokio.rs/).
//!
//! There are three moving parts:
//! 1. [`ActionDispatcher`] (producers) and [`ActionReceiver`] (the one consumer) form a
//!    bounded FIFO queue of actions. A full queue applies backpressure to producers, it
//!    never drops an action.
//! 2. [`Reducer`] is the only code that is allowed to mutate the state. It gets one
//!    action at a time and returns a [`Continuation`].
//! 3. [`Store`] owns the state behind a single exclusive lock, and runs the reducer while
//!    holding it. Readers (eg: a renderer) take the same lock for one pass via
//!    [`Store::get_shared_state`].
//!
//! ```
//! use binx_redux::{Continuation, Reducer, Store, create_dispatcher};
//!
//! #[derive(Debug, Default)]
//! struct Counter(i32);
//!
//! #[derive(Debug)]
//! enum Action { Add(i32), Quit }
//!
//! #[derive(Debug)]
//! struct CounterReducer;
//!
//! impl Reducer<Counter, Action> for CounterReducer {
//!     fn run(&self, action: Action, state: &mut Counter) -> Continuation {
//!         match action {
//!             Action::Add(it) => { state.0 += it; Continuation::Continue }
//!             Action::Quit => Continuation::Exit,
//!         }
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = Store::new(Counter::default(), CounterReducer);
//! let (dispatcher, mut receiver) = create_dispatcher::<Action>(4);
//! dispatcher.dispatch(Action::Add(2)).await.unwrap();
//! dispatcher.dispatch(Action::Quit).await.unwrap();
//! while let Some(action) = receiver.recv().await {
//!     if store.dispatch_action(action).await == Continuation::Exit { break; }
//! }
//! assert_eq!(store.get_shared_state().lock().await.0, 2);
//! # }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod dispatcher;
pub mod reducer;
pub mod store;

// Re-export.
pub use dispatcher::*;
pub use reducer::*;
pub use store::*;
