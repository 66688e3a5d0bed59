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

use std::cell::RefCell;
use std::fmt;
use std::mem;
use std::rc::{Rc, Weak};

use crate::error::InvalidAction;
use crate::traits::Action;

/// Crate-internal: a type-erased action with the actuator's signature.
pub(crate) type BoxedAction<'a, Args, R> = Box<dyn Action<Args, R> + 'a>;

/// Crate-internal: the storage cell shared between a [`Slot`] and the actuators that link it.
///
/// The `RefCell` is only ever borrowed for a state change, never across an action call.
pub(crate) type ActionCell<'a, Args, R> = RefCell<SlotState<'a, Args, R>>;

/// What a slot's storage holds.
pub(crate) enum SlotState<'a, Args, R> {
    Vacant,
    Ready(BoxedAction<'a, Args, R>),
    /// The action has been taken out for a call in progress.
    Running,
}

/// Caller-owned storage for one action, or for nothing.
///
/// An [`Actuator`](crate::common::Actuator) links a slot by weak reference: it never keeps the
/// slot's storage alive, and it sees every change the owner makes. That gives two ways to take
/// an action out of every actuator that links it without touching the actuators:
///
/// *   [`clear`](Slot::clear) the slot; linked entries are dropped on their next pass.
/// *   drop the slot; the weak links no longer resolve and are dropped the same way.
///
/// An action may clear or replace its own slot while it runs. The change wins over the
/// running action, which is dropped once its call returns.
///
/// When a checked binding in the slot reports a dead target during a broadcast, the actuator
/// clears the slot itself, so the owner can observe it through [`is_empty`](Slot::is_empty).
pub struct Slot<'a, Args, R = ()> {
    cell: Rc<ActionCell<'a, Args, R>>,
}

impl<'a, Args, R> Slot<'a, Args, R> {
    /// Creates a slot holding `action`.
    pub fn new<A>(action: A) -> Self
    where
        A: Action<Args, R> + 'a,
    {
        Self {
            cell: new_cell(action),
        }
    }

    /// Creates a slot holding nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cell: Rc::new(RefCell::new(SlotState::Vacant)),
        }
    }

    /// Returns `true` if the slot holds no action.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        is_vacant(&self.cell)
    }

    /// Puts `action` in the slot, replacing what was there.
    pub fn set<A>(&mut self, action: A)
    where
        A: Action<Args, R> + 'a,
    {
        let action: BoxedAction<'a, Args, R> = Box::new(action);
        drop(self.cell.replace(SlotState::Ready(action)));
    }

    /// Empties the slot.
    pub fn clear(&mut self) {
        vacate(&self.cell);
    }

    /// Calls the action in the slot directly, bypassing any actuator.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAction::Empty`] for an empty slot, [`InvalidAction::Busy`] when the
    /// slot's action is already running, or whatever the action itself reports.
    pub fn call(&self, args: Args) -> Result<R, InvalidAction> {
        call_cell(&self.cell, args)
    }

    /// Returns `true` if both slots are the same storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }

    pub(crate) fn downgrade(&self) -> Weak<ActionCell<'a, Args, R>> {
        Rc::downgrade(&self.cell)
    }

    pub(crate) fn cell_ptr(&self) -> *const ActionCell<'a, Args, R> {
        Rc::as_ptr(&self.cell)
    }
}

impl<Args, R> Default for Slot<'_, Args, R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<Args, R> fmt::Debug for Slot<'_, Args, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("empty", &self.is_empty())
            .field("links", &Rc::weak_count(&self.cell))
            .finish()
    }
}

/// Puts the action back when its call ends, unwinding included, unless the slot changed meanwhile.
struct RunningCall<'c, 'a, Args, R> {
    cell: &'c ActionCell<'a, Args, R>,
    action: Option<BoxedAction<'a, Args, R>>,
}

impl<Args, R> Drop for RunningCall<'_, '_, Args, R> {
    fn drop(&mut self) {
        let Some(action) = self.action.take() else {
            return;
        };
        let mut state = self.cell.borrow_mut();
        if matches!(*state, SlotState::Running) {
            *state = SlotState::Ready(action);
        }
    }
}

/// Boxes `action` into fresh storage.
pub(crate) fn new_cell<'a, Args, R, A>(action: A) -> Rc<ActionCell<'a, Args, R>>
where
    A: Action<Args, R> + 'a,
{
    let action: BoxedAction<'a, Args, R> = Box::new(action);
    Rc::new(RefCell::new(SlotState::Ready(action)))
}

/// Calls whatever `cell` holds.
///
/// The action is taken out of the cell for the duration of the call, so the call may clear or
/// refill its own slot. A nested call on the same cell fails with `Busy`.
pub(crate) fn call_cell<Args, R>(
    cell: &ActionCell<'_, Args, R>,
    args: Args,
) -> Result<R, InvalidAction> {
    let mut state = cell.borrow_mut();
    let action = match mem::replace(&mut *state, SlotState::Running) {
        SlotState::Ready(action) => action,
        SlotState::Vacant => {
            *state = SlotState::Vacant;
            return Err(InvalidAction::Empty);
        }
        SlotState::Running => return Err(InvalidAction::Busy { target: "Slot" }),
    };
    drop(state);

    let mut call = RunningCall {
        cell,
        action: Some(action),
    };
    let result = call
        .action
        .as_mut()
        .map_or(Err(InvalidAction::Empty), |action| action.call(args));
    drop(call);
    result
}

/// Empties `cell`. The previous action is dropped after the cell is released.
pub(crate) fn vacate<Args, R>(cell: &ActionCell<'_, Args, R>) {
    drop(cell.replace(SlotState::Vacant));
}

/// A cell is vacant when it holds no action. A cell whose action is mid-call is occupied.
pub(crate) fn is_vacant<Args, R>(cell: &ActionCell<'_, Args, R>) -> bool {
    matches!(*cell.borrow(), SlotState::Vacant)
}
