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

use thiserror::Error;

/// Why an action could not be carried out.
///
/// This is the only failure an [`Actuator`](crate::common::Actuator) observes from the
/// actions it triggers. It never escapes the actuator: the actuator reports it through
/// `tracing` and, for stale failures, prunes the offending entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAction {
    /// The object a checked binding points at has been dropped.
    #[error("bind::method: invalid object `{target}`")]
    DeadTarget {
        /// Type name of the bound object.
        target: &'static str,
    },
    /// The slot holds no action.
    #[error("action slot is empty")]
    Empty,
    /// The bound object, or the slot itself, is already borrowed by a call in progress.
    #[error("bind::method: object `{target}` is already borrowed")]
    Busy {
        /// Type name of the busy object.
        target: &'static str,
    },
}

impl InvalidAction {
    /// Returns `true` when the failure means the action will never succeed again.
    ///
    /// Stale failures (`DeadTarget`, `Empty`) cause the owning entry to be removed;
    /// `Busy` is transient and leaves the entry in place.
    #[must_use]
    pub const fn is_stale(&self) -> bool {
        matches!(self, Self::DeadTarget { .. } | Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_target_names_the_type() {
        let err = InvalidAction::DeadTarget { target: "shapes::Circle" };
        assert_eq!(err.to_string(), "bind::method: invalid object `shapes::Circle`");
        assert!(err.is_stale());
    }

    #[test]
    fn busy_is_not_stale() {
        assert!(!InvalidAction::Busy { target: "Square" }.is_stale());
        assert!(InvalidAction::Empty.is_stale());
    }
}
