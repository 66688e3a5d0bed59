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

use tracing::trace;

use crate::common::{Actuator, Slot};

/// Creates an actuator whose ordered registry links `slots`, in order.
///
/// Slots that are already empty are left out.
#[must_use]
pub fn connect<'a, Args, R>(slots: &[&Slot<'a, Args, R>]) -> Actuator<'a, Args, R> {
    let mut actuator = Actuator::new();
    for slot in slots {
        actuator.add(slot);
    }
    let pruned = actuator.prune();
    trace!(linked = actuator.action_count(), pruned, "Connected actuator");
    actuator
}

/// Creates an actuator whose named registry links each `(name, slot)` pair.
///
/// When a name repeats, the first pair wins. Slots that are already empty are left out.
#[must_use]
pub fn connect_named<'a, Args, R>(pairs: &[(&str, &Slot<'a, Args, R>)]) -> Actuator<'a, Args, R> {
    let mut actuator = Actuator::new();
    for (name, slot) in pairs {
        if !actuator.has_action(name) {
            actuator.add_named(*name, slot);
        }
    }
    let pruned = actuator.prune_named();
    trace!(linked = actuator.named_count(), pruned, "Connected named actuator");
    actuator
}
