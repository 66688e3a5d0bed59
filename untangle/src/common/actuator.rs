/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use std::collections::BTreeMap;
use std::fmt;
use std::ptr;
use std::rc::{Rc, Weak};

use static_assertions::assert_not_impl_any;
use tracing::{debug, error, info, instrument, trace, warn};

use crate::common::config::{ReportLevel, ReportingConfig, CONFIG};
use crate::common::slot::{call_cell, is_vacant, new_cell, vacate, ActionCell};
use crate::common::{Outcome, Slot};
use crate::error::InvalidAction;
use crate::traits::Action;

/// Token for an action the actuator owns, returned by [`Actuator::attach`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionId(u64);

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "action#{}", self.0)
    }
}

/// One registry entry: a link to a caller's [`Slot`] or an action the actuator owns.
enum Entry<'a, Args, R> {
    Linked(Weak<ActionCell<'a, Args, R>>),
    Owned(ActionId, Rc<ActionCell<'a, Args, R>>),
}

impl<'a, Args, R> Entry<'a, Args, R> {
    fn resolve(&self) -> Option<Rc<ActionCell<'a, Args, R>>> {
        match self {
            Self::Linked(link) => link.upgrade(),
            Self::Owned(_, cell) => Some(Rc::clone(cell)),
        }
    }

    /// An entry is live while its storage exists and holds an action.
    fn is_live(&self) -> bool {
        self.resolve().is_some_and(|cell| !is_vacant(&cell))
    }

    fn links(&self, slot: &Slot<'a, Args, R>) -> bool {
        matches!(self, Self::Linked(link) if ptr::eq(link.as_ptr(), slot.cell_ptr()))
    }
}

impl<Args, R> Clone for Entry<'_, Args, R> {
    fn clone(&self) -> Self {
        match self {
            Self::Linked(link) => Self::Linked(Weak::clone(link)),
            Self::Owned(id, cell) => Self::Owned(*id, Rc::clone(cell)),
        }
    }
}

/// A dynamic list of actions that can be triggered together or one at a time by name.
///
/// An actuator lets objects of unrelated types answer one call without a shared trait:
/// bind a method of each object (see [`crate::binding`]), put the bindings in [`Slot`]s,
/// and register the slots. It keeps two registries:
///
/// *   an ordered list, triggered as a whole by [`invoke`](Actuator::invoke) in insertion
///     order (duplicates allowed), and
/// *   a name-keyed map, triggered one entry at a time by [`invoke_action`](Actuator::invoke_action).
///
/// Entries either link a caller's [`Slot`] ([`add`](Actuator::add),
/// [`add_named`](Actuator::add_named)) without keeping it alive, or own their action
/// outright ([`attach`](Actuator::attach), [`insert_named`](Actuator::insert_named)).
///
/// # Stale entries
///
/// An entry goes stale when its slot is cleared or dropped, or when its action reports
/// [`InvalidAction::DeadTarget`]. Stale entries are never called. A broadcast drops them from
/// the ordered list once the whole pass is done, and clears the slot of any action that
/// reported a dead target so the owner sees it empty. A named invocation drops the stale
/// entry immediately. Each failure is reported through `tracing` as configured by
/// [`ReportingConfig`]; nothing is returned to the caller.
///
/// # Results
///
/// Values returned by the actions of the latest invocation are collected, in call order,
/// into [`results`](Actuator::results). Unit returns are not collected (see [`Outcome`]).
///
/// # Threading
///
/// An actuator is single-threaded: it is neither `Send` nor `Sync`, and invocation is
/// synchronous, running every action to completion in turn.
///
/// ```rust
/// use std::rc::Rc;
/// use untangle::prelude::*;
///
/// struct Triangle;
/// struct Square;
/// impl Triangle { fn sides(&self) -> u32 { 3 } }
/// impl Square { fn sides(&self) -> u32 { 4 } }
///
/// let t = Rc::new(Triangle);
/// let s = Rc::new(Square);
/// let a = Slot::new(bind(&t, Triangle::sides));
/// let b = Slot::new(bind(&s, Square::sides));
///
/// let mut sides = connect!(a, b);
/// sides.invoke(());
/// assert_eq!(sides.results(), &[3, 4]);
///
/// drop(s);
/// sides.invoke(());
/// assert_eq!(sides.results(), &[3]);
/// assert!(b.is_empty());
/// ```
pub struct Actuator<'a, Args, R = ()> {
    actions: Vec<Entry<'a, Args, R>>,
    named: BTreeMap<String, Entry<'a, Args, R>>,
    results: Vec<R>,
    reporting: ReportingConfig,
    next_id: u64,
}

assert_not_impl_any!(Actuator<'static, (), ()>: Send, Sync);
assert_not_impl_any!(Slot<'static, (), ()>: Send, Sync);

impl<'a, Args, R> Actuator<'a, Args, R> {
    /// Creates an empty actuator that reports failures as set in the global configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            named: BTreeMap::new(),
            results: Vec::new(),
            reporting: CONFIG.reporting,
            next_id: 0,
        }
    }

    /// Replaces the failure reporting settings.
    #[must_use]
    pub fn with_reporting(mut self, reporting: ReportingConfig) -> Self {
        self.reporting = reporting;
        self
    }

    /// Triggers every action in the ordered registry, in insertion order.
    ///
    /// The results of the previous invocation are cleared first. Each live entry is called
    /// with its own clone of `args`; a failure is reported and the pass moves on. Entries
    /// found stale are dropped once the pass is over.
    #[instrument(level = "trace", skip_all, fields(entries = self.actions.len()))]
    pub fn invoke(&mut self, args: Args)
    where
        Args: Clone,
    {
        self.results.clear();
        for entry in &self.actions {
            let Some(cell) = entry.resolve() else {
                continue;
            };
            if is_vacant(&cell) {
                continue;
            }
            match call_cell(&cell, args.clone()) {
                Ok(value) => {
                    if let Some(value) = Outcome::new(value).into_value() {
                        self.results.push(value);
                    }
                }
                Err(error) => {
                    self.report(&error);
                    if error.is_stale() {
                        vacate(&cell);
                    }
                }
            }
        }
        let pruned = self.prune();
        trace!(pruned, collected = self.results.len(), "Broadcast completed");
    }

    /// Triggers the action registered under `name`.
    ///
    /// The results of the previous invocation are cleared first. An unknown name does
    /// nothing. A stale entry is removed from the named registry on the spot.
    #[instrument(level = "trace", skip(self, args))]
    pub fn invoke_action(&mut self, name: &str, args: Args) {
        self.results.clear();
        let Some(cell) = self.named.get(name).map(Entry::resolve) else {
            trace!("No action registered under this name");
            return;
        };
        let outcome = cell.map_or(Err(InvalidAction::Empty), |cell| call_cell(&cell, args));
        match outcome {
            Ok(value) => {
                if let Some(value) = Outcome::new(value).into_value() {
                    self.results.push(value);
                }
            }
            Err(InvalidAction::Empty) => {
                trace!("Named action is empty, removing it");
                self.named.remove(name);
            }
            Err(error) => {
                self.report(&error);
                if error.is_stale() {
                    self.named.remove(name);
                }
            }
        }
    }

    /// Links `slot` at the end of the ordered registry. The same slot may be added twice.
    pub fn add(&mut self, slot: &Slot<'a, Args, R>) {
        self.actions.push(Entry::Linked(slot.downgrade()));
    }

    /// Links `slot` under `name`, replacing any entry already registered under it.
    pub fn add_named(&mut self, name: impl Into<String>, slot: &Slot<'a, Args, R>) {
        self.named.insert(name.into(), Entry::Linked(slot.downgrade()));
    }

    /// Moves `action` into the actuator at the end of the ordered registry.
    ///
    /// The returned id is the only way to remove it explicitly; see [`detach`](Self::detach).
    pub fn attach<A>(&mut self, action: A) -> ActionId
    where
        A: Action<Args, R> + 'a,
    {
        let id = self.issue_id();
        self.actions.push(Entry::Owned(id, new_cell(action)));
        id
    }

    /// Moves `action` into the actuator under `name`, replacing any entry already registered
    /// under it.
    pub fn insert_named<A>(&mut self, name: impl Into<String>, action: A)
    where
        A: Action<Args, R> + 'a,
    {
        let id = self.issue_id();
        self.named.insert(name.into(), Entry::Owned(id, new_cell(action)));
    }

    /// Removes every ordered entry linking `slot`. Identity, not equality, decides.
    pub fn remove(&mut self, slot: &Slot<'a, Args, R>) {
        self.actions.retain(|entry| !entry.links(slot));
    }

    /// Removes the owned action `id`. Returns `false` if it was not there.
    pub fn detach(&mut self, id: ActionId) -> bool {
        let before = self.actions.len();
        self.actions
            .retain(|entry| !matches!(entry, Entry::Owned(owned, _) if *owned == id));
        self.actions.len() != before
    }

    /// Removes the entry registered under `name`, if any.
    pub fn remove_named(&mut self, name: &str) {
        self.named.remove(name);
    }

    /// Returns `true` if either registry holds an entry.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        !self.actions.is_empty() || !self.named.is_empty()
    }

    /// Returns `true` if an entry is registered under `name`, whether or not it is stale.
    #[must_use]
    pub fn has_action(&self, name: &str) -> bool {
        self.named.contains_key(name)
    }

    /// Number of entries in the ordered registry.
    #[must_use]
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Number of entries in the named registry.
    #[must_use]
    pub fn named_count(&self) -> usize {
        self.named.len()
    }

    /// Names in the named registry, in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.named.keys().map(String::as_str).collect()
    }

    /// Values collected by the latest invocation, in call order.
    #[must_use]
    pub fn results(&self) -> &[R] {
        &self.results
    }

    /// Takes the values collected by the latest invocation, leaving the buffer empty.
    pub fn take_results(&mut self) -> Vec<R> {
        std::mem::take(&mut self.results)
    }

    /// Removes every entry from both registries and clears the results.
    ///
    /// Linked slots are left as they are.
    pub fn clear(&mut self) {
        self.actions.clear();
        self.named.clear();
        self.results.clear();
    }

    /// Drops ordered entries that are no longer live. Returns how many were dropped.
    pub(crate) fn prune(&mut self) -> usize {
        let before = self.actions.len();
        self.actions.retain(Entry::is_live);
        before - self.actions.len()
    }

    /// Drops named entries that are no longer live. Returns how many were dropped.
    pub(crate) fn prune_named(&mut self) -> usize {
        let before = self.named.len();
        self.named.retain(|_, entry| entry.is_live());
        before - self.named.len()
    }

    fn issue_id(&mut self) -> ActionId {
        let id = ActionId(self.next_id);
        self.next_id += 1;
        id
    }

    fn report(&self, error: &InvalidAction) {
        if !self.reporting.enabled {
            return;
        }
        let disposition = if error.is_stale() { "removed" } else { "skipped" };
        match self.reporting.level {
            ReportLevel::Error => error!(disposition, "{error}"),
            ReportLevel::Warn => warn!(disposition, "{error}"),
            ReportLevel::Info => info!(disposition, "{error}"),
            ReportLevel::Debug => debug!(disposition, "{error}"),
            ReportLevel::Trace => trace!(disposition, "{error}"),
        }
    }
}

impl<Args, R> Default for Actuator<'_, Args, R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning copies both registries; the results buffer starts empty.
///
/// Owned actions are shared between the clones rather than duplicated.
impl<Args, R> Clone for Actuator<'_, Args, R> {
    fn clone(&self) -> Self {
        Self {
            actions: self.actions.clone(),
            named: self.named.clone(),
            results: Vec::new(),
            reporting: self.reporting,
            next_id: self.next_id,
        }
    }

    /// Assignment: both registries are replaced by copies of `source`'s, never merged.
    fn clone_from(&mut self, source: &Self) {
        self.actions.clear();
        self.named.clear();
        self.actions.extend(source.actions.iter().cloned());
        self.named.extend(
            source
                .named
                .iter()
                .map(|(name, entry)| (name.clone(), entry.clone())),
        );
        self.reporting = source.reporting;
        self.next_id = self.next_id.max(source.next_id);
    }
}

impl<Args, R> fmt::Debug for Actuator<'_, Args, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actuator")
            .field("actions", &self.actions.len())
            .field("named", &self.named.keys().collect::<Vec<_>>())
            .field("results", &self.results.len())
            .field("reporting", &self.reporting)
            .finish()
    }
}
