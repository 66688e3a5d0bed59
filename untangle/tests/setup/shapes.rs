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

//! Unrelated shape types sharing method names but no trait.
//!
//! Every call is written to a shared [`Journal`] so tests can check who was called, with
//! what, and in which order.

use std::cell::RefCell;
use std::rc::Rc;

/// Calls recorded by the shapes, in order.
pub type Journal = Rc<RefCell<Vec<String>>>;

/// Creates an empty journal.
pub fn journal() -> Journal {
    Rc::default()
}

/// Returns the journal entries, in order.
pub fn entries(journal: &Journal) -> Vec<String> {
    journal.borrow().clone()
}

/// Counts the journal entries that start with `prefix`.
pub fn count(journal: &Journal, prefix: &str) -> usize {
    journal
        .borrow()
        .iter()
        .filter(|entry| entry.starts_with(prefix))
        .count()
}

macro_rules! shape {
    ($name:ident, $label:literal) => {
        #[derive(Debug)]
        pub struct $name {
            journal: Journal,
            height: i32,
        }

        impl $name {
            pub fn new(journal: &Journal) -> Self {
                Self {
                    journal: Rc::clone(journal),
                    height: 0,
                }
            }

            pub fn rotate(&self, angle: i32) {
                self.log(format!("{}::rotate {angle}", $label));
            }

            pub fn height_in(&mut self, h: i32) {
                self.log(format!("{}::height_in", $label));
                self.height = h;
            }

            pub fn height_out(&self) -> i32 {
                self.log(format!("{}::height_out", $label));
                self.height
            }

            pub fn test_vr(&self) {
                self.log(format!("{}::test_vr", $label));
            }

            pub fn test_vr_args(&self, x: i32, y: i32) {
                self.log(format!("{}::test_vr_args {x}, {y}", $label));
            }

            fn log(&self, entry: String) {
                self.journal.borrow_mut().push(entry);
            }
        }
    };
}

shape!(Triangle, "triangle");
shape!(Circle, "circle");
shape!(Square, "square");

/// A free function with the same shape as the `rotate` methods.
pub fn rotate_free(journal: &Journal, angle: i32) {
    journal.borrow_mut().push(format!("function::rotate {angle}"));
}
