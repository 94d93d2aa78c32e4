//! Event publishing helpers
//!
//! Contracts lead every topic list with a short symbol naming the event and
//! follow it with the parties an indexer filters on. Amounts go in the data.

use soroban_sdk::{Env, IntoVal, Symbol, Topics, Val};

pub struct Events;

impl Events {
    /// Publish `data` under the single topic `name`.
    pub fn emit<T>(e: &Env, name: Symbol, data: T)
    where
        T: IntoVal<Env, Val>,
    {
        e.events().publish((name,), data);
    }

    /// Publish `data` under a full topic tuple, e.g. `(symbol, user)`.
    pub fn emit_with_topics<T, U>(e: &Env, topics: T, data: U)
    where
        T: Topics,
        U: IntoVal<Env, Val>,
    {
        e.events().publish(topics, data);
    }
}
