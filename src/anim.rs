//! Animation state machine inputs
//!
//! The animation runtime owns the state machines; gameplay code only reads
//! named inputs from them and pokes their values. This module describes that
//! runtime through a handful of capability traits so the gameplay side can be
//! driven by any implementation (including [`memory::MemoryMachine`] in tests).

pub mod memory;

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// A persistent boolean signal
pub trait BoolInput {
    fn value(&self) -> bool;
    fn set_value(&self, value: bool);
}

/// A pulse-like signal
pub trait TriggerInput {
    fn fire(&self);
}

/// One entry in a state machine's input list
pub trait MachineInput {
    fn name(&self) -> &str;
    fn as_bool(&self) -> Rc<dyn BoolInput>;
    fn as_trigger(&self) -> Rc<dyn TriggerInput>;
}

/// The externally owned animation state machine
pub trait StateMachine {
    fn input_count(&self) -> usize;
    fn input(&self, index: usize) -> Option<Box<dyn MachineInput + '_>>;
}

/// Which accessor an input should be narrowed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    Boolean,
    Trigger,
}

/// Name plus expected kind of an input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSpec {
    pub name: String,
    pub kind: InputKind,
}

impl InputSpec {
    pub fn boolean(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Boolean,
        }
    }

    pub fn trigger(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Trigger,
        }
    }

    /// Kind by naming convention: `walking` is the only boolean, the rest fire once
    pub fn infer(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == "walking" {
            Self::boolean(name)
        } else {
            Self::trigger(name)
        }
    }
}

/// A resolved input handle
#[derive(Clone)]
pub enum AnimationInput {
    Boolean(Rc<dyn BoolInput>),
    Trigger(Rc<dyn TriggerInput>),
}

impl AnimationInput {
    pub fn kind(&self) -> InputKind {
        match self {
            AnimationInput::Boolean(_) => InputKind::Boolean,
            AnimationInput::Trigger(_) => InputKind::Trigger,
        }
    }
}

impl fmt::Debug for AnimationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationInput::Boolean(input) => f
                .debug_tuple("Boolean")
                .field(&input.value())
                .finish(),
            AnimationInput::Trigger(_) => f.write_str("Trigger"),
        }
    }
}

/// Scan the machine's inputs by index and return the first one named
/// `spec.name`, narrowed to `spec.kind`.
///
/// A miss is not an error: the caller gets `None` and carries on.
pub fn get_input_by_name(machine: &dyn StateMachine, spec: &InputSpec) -> Option<AnimationInput> {
    for i in 0..machine.input_count() {
        let Some(input) = machine.input(i) else {
            continue;
        };
        if input.name() == spec.name {
            return Some(match spec.kind {
                InputKind::Boolean => AnimationInput::Boolean(input.as_bool()),
                InputKind::Trigger => AnimationInput::Trigger(input.as_trigger()),
            });
        }
    }
    None
}

/// Input handles resolved once per machine, keyed by name
#[derive(Debug, Clone, Default)]
pub struct InputRefs {
    refs: HashMap<String, AnimationInput>,
}

impl InputRefs {
    /// Look up every spec against the machine. Missing inputs are skipped.
    pub fn resolve(machine: &dyn StateMachine, specs: &[InputSpec]) -> Self {
        let mut refs = HashMap::with_capacity(specs.len());
        for spec in specs {
            match get_input_by_name(machine, spec) {
                Some(input) => {
                    refs.insert(spec.name.clone(), input);
                }
                None => log::warn!("Animation input '{}' not found on state machine", spec.name),
            }
        }
        log::debug!("Resolved {}/{} animation inputs", refs.len(), specs.len());
        Self { refs }
    }

    pub fn get(&self, name: &str) -> Option<&AnimationInput> {
        self.refs.get(name)
    }

    /// Set a boolean input. Returns false if no boolean input has that name.
    pub fn set_bool(&self, name: &str, value: bool) -> bool {
        match self.refs.get(name) {
            Some(AnimationInput::Boolean(input)) => {
                input.set_value(value);
                true
            }
            _ => false,
        }
    }

    pub fn bool_value(&self, name: &str) -> Option<bool> {
        match self.refs.get(name) {
            Some(AnimationInput::Boolean(input)) => Some(input.value()),
            _ => None,
        }
    }

    /// Fire a trigger input. Returns false if no trigger input has that name.
    pub fn fire(&self, name: &str) -> bool {
        match self.refs.get(name) {
            Some(AnimationInput::Trigger(input)) => {
                input.fire();
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryMachine;
    use super::*;

    fn hero_machine() -> MemoryMachine {
        MemoryMachine::new()
            .with_bool("walking")
            .with_trigger("attack")
            .with_trigger("hit")
    }

    #[test]
    fn test_lookup_boolean() {
        let machine = hero_machine();
        let input = get_input_by_name(&machine, &InputSpec::boolean("walking"));
        let Some(AnimationInput::Boolean(walking)) = input else {
            panic!("expected boolean input");
        };
        walking.set_value(true);
        assert!(machine.bool_value("walking").unwrap());
    }

    #[test]
    fn test_lookup_trigger() {
        let machine = hero_machine();
        let input = get_input_by_name(&machine, &InputSpec::trigger("attack"));
        let Some(AnimationInput::Trigger(attack)) = input else {
            panic!("expected trigger input");
        };
        attack.fire();
        attack.fire();
        assert_eq!(machine.fired_count("attack"), 2);
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let machine = hero_machine();
        assert!(get_input_by_name(&machine, &InputSpec::trigger("jump")).is_none());
        assert!(get_input_by_name(&MemoryMachine::new(), &InputSpec::trigger("attack")).is_none());
    }

    #[test]
    fn test_lookup_narrows_to_requested_kind() {
        // Asking for a trigger by name returns the trigger accessor even on a
        // boolean input; the runtime decides what that means.
        let machine = hero_machine();
        let input = get_input_by_name(&machine, &InputSpec::trigger("walking")).unwrap();
        assert_eq!(input.kind(), InputKind::Trigger);
    }

    #[test]
    fn test_lookup_first_match_wins() {
        let machine = MemoryMachine::new()
            .with_trigger("attack")
            .with_bool("walking")
            .with_bool("walking");
        let Some(AnimationInput::Boolean(walking)) =
            get_input_by_name(&machine, &InputSpec::boolean("walking"))
        else {
            panic!("expected boolean input");
        };
        walking.set_value(true);
        assert!(machine.input(1).unwrap().as_bool().value());
        assert!(!machine.input(2).unwrap().as_bool().value());
    }

    #[test]
    fn test_infer_kind() {
        assert_eq!(InputSpec::infer("walking").kind, InputKind::Boolean);
        assert_eq!(InputSpec::infer("attack").kind, InputKind::Trigger);
        assert_eq!(InputSpec::infer("death").kind, InputKind::Trigger);
    }

    #[test]
    fn test_input_refs_resolve_skips_missing() {
        let machine = hero_machine();
        let specs = [
            InputSpec::infer("walking"),
            InputSpec::infer("attack"),
            InputSpec::infer("death"),
        ];
        let refs = InputRefs::resolve(&machine, &specs);
        assert_eq!(refs.len(), 2);
        assert!(refs.get("death").is_none());
        assert!(!refs.fire("death"));
    }

    #[test]
    fn test_input_refs_dispatch() {
        let machine = hero_machine();
        let refs = InputRefs::resolve(
            &machine,
            &[InputSpec::infer("walking"), InputSpec::infer("hit")],
        );

        assert!(refs.set_bool("walking", true));
        assert_eq!(refs.bool_value("walking"), Some(true));
        assert!(machine.bool_value("walking").unwrap());

        assert!(refs.fire("hit"));
        assert_eq!(machine.fired_count("hit"), 1);

        // Kind mismatch is a miss
        assert!(!refs.fire("walking"));
        assert!(!refs.set_bool("hit", true));
        assert_eq!(refs.bool_value("hit"), None);
    }

    #[test]
    fn test_empty_refs() {
        let refs = InputRefs::default();
        assert!(refs.is_empty());
        assert!(!refs.set_bool("walking", true));
    }
}
