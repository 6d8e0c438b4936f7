//! Keyboard input
//!
//! `InputState` is mutated by key-down/key-up events between ticks.
//! Each tick reads an `InputSnapshot` captured once at tick start, so the
//! physics step never observes a half-applied event.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    const fn bit(self) -> u8 {
        match self {
            Direction::Up => InputSnapshot::UP,
            Direction::Down => InputSnapshot::DOWN,
            Direction::Left => InputSnapshot::LEFT,
            Direction::Right => InputSnapshot::RIGHT,
        }
    }
}

/// Key names (as reported by `KeyboardEvent.key`) bound to each direction.
/// Matching is case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub left: Vec<String>,
    pub right: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let keys = |a: &str, b: &str| vec![a.to_string(), b.to_string()];
        Self {
            up: keys("ArrowUp", "w"),
            down: keys("ArrowDown", "s"),
            left: keys("ArrowLeft", "a"),
            right: keys("ArrowRight", "d"),
        }
    }
}

impl KeyBindings {
    pub fn keys_for(&self, direction: Direction) -> &[String] {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    /// First direction bound to `key`, if the key is tracked at all
    pub fn direction_of(&self, key: &str) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self.keys_for(dir).iter().any(|k| k == key))
    }
}

/// Held directions at the start of a tick.
/// Packed into a single byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub bits: u8,
}

impl InputSnapshot {
    pub const UP: u8 = 1 << 0;
    pub const DOWN: u8 = 1 << 1;
    pub const LEFT: u8 = 1 << 2;
    pub const RIGHT: u8 = 1 << 3;

    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn from_directions(directions: &[Direction]) -> Self {
        let bits = directions.iter().fold(0, |acc, dir| acc | dir.bit());
        Self { bits }
    }

    #[inline]
    pub fn is_held(&self, direction: Direction) -> bool {
        self.bits & direction.bit() != 0
    }
}

/// Currently held tracked keys
#[derive(Clone, Debug, Default)]
pub struct InputState {
    bindings: KeyBindings,
    held: HashSet<String>,
}

impl InputState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings, held: HashSet::new() }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Mark `key` held. Returns false (and changes nothing) for untracked keys.
    pub fn key_down(&mut self, key: &str) -> bool {
        if self.bindings.direction_of(key).is_none() {
            return false;
        }
        self.held.insert(key.to_string());
        true
    }

    /// Mark `key` released. Returns false for untracked keys.
    pub fn key_up(&mut self, key: &str) -> bool {
        if self.bindings.direction_of(key).is_none() {
            return false;
        }
        self.held.remove(key);
        true
    }

    pub fn is_key_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// A direction is held when any of its bound keys is held
    pub fn snapshot(&self) -> InputSnapshot {
        let bits = Direction::ALL
            .into_iter()
            .filter(|&dir| self.bindings.keys_for(dir).iter().any(|k| self.held.contains(k)))
            .fold(0, |acc, dir| acc | dir.bit());
        InputSnapshot { bits }
    }
}
