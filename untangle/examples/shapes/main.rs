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

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::Level;
use untangle::prelude::*;

// shapes share method names, but no trait
#[derive(Debug, Default)]
struct Triangle {
    angle: Cell<i32>,
}

#[derive(Debug, Default)]
struct Circle {
    angle: Cell<i32>,
}

#[derive(Debug, Default)]
struct Square {
    height: i32,
}

impl Triangle {
    fn rotate(&self, by: i32) {
        self.angle.set(self.angle.get() + by);
        println!("triangle rotated to {}", self.angle.get());
    }

    fn corners(&self) -> u32 {
        3
    }
}

impl Circle {
    fn rotate(&self, by: i32) {
        self.angle.set(self.angle.get() + by);
        println!("circle rotated to {} (nobody can tell)", self.angle.get());
    }

    fn corners(&self) -> u32 {
        0
    }
}

impl Square {
    fn rotate(&self, by: i32) {
        println!("square rotated by {by}");
    }

    fn grow(&mut self, by: i32) -> i32 {
        self.height += by;
        self.height
    }
}

fn main() {
    // failed actions are reported through tracing
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let triangle = Rc::new(Triangle::default());
    let circle = Rc::new(Circle::default());
    let square = Rc::new(RefCell::new(Square::default()));

    // bind each object's method, then connect the slots into one actuator
    let rotate_triangle = Slot::new(bind(&triangle, Triangle::rotate));
    let rotate_circle = Slot::new(bind(&circle, Circle::rotate));
    let mut rotate = connect!(rotate_triangle, rotate_circle);
    rotate.invoke((20,));

    // a plain function can join in too
    let rotate_log = Slot::new(from_fn(|by: i32| println!("rotation requested: {by}")));
    rotate.add(&rotate_log);
    rotate.invoke((45,));

    // return values are collected in call order
    let triangle_corners = Slot::new(bind(&triangle, Triangle::corners));
    let circle_corners = Slot::new(bind(&circle, Circle::corners));
    let mut corners = connect!(triangle_corners, circle_corners);
    corners.invoke(());
    println!("corners: {:?}", corners.results());

    // dropping a target deregisters its action on the next call, with a warning
    drop(circle);
    rotate.invoke((10,));
    println!(
        "rotate still has {} actions, circle slot empty: {}",
        rotate.action_count(),
        rotate_circle.is_empty()
    );

    // named actions are triggered one at a time
    let grow_square = Slot::new(bind_mut(&square, Square::grow));
    let mut by_name = connect!("square" => grow_square);
    by_name.insert_named(
        "triangle",
        from_fn({
            let triangle = Rc::clone(&triangle);
            move |by: i32| {
                triangle.rotate(by);
                triangle.angle.get()
            }
        }),
    );
    by_name.invoke_action("square", (4,));
    by_name.invoke_action("square", (4,));
    println!("square height: {:?}", by_name.results());
    by_name.invoke_action("triangle", (5,));
    println!("triangle angle: {:?}", by_name.results());

    // the actuator can also hold the actions itself
    let mut owned: Actuator<'_, (i32,)> = Actuator::new();
    let id = owned.attach(bind(&square, |s: &RefCell<Square>, by: i32| {
        s.borrow().rotate(by);
    }));
    owned.invoke((90,));
    owned.detach(id);
    println!("owned actuator connected: {}", owned.is_connected());
}
