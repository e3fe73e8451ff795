use std::fmt::Debug;

/// A record with more than one field, ordered through a derived key only.
///
/// Deliberately has no `Ord` or `PartialOrd`, sorting it has to go through a comparator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

pub fn people() -> Vec<Person> {
    vec![
        Person::new("Ada", 36),
        Person::new("Grace", 85),
        Person::new("Linus", 21),
        Person::new("Barbara", 36),
        Person::new("Ken", 79),
        Person::new("Edsger", 72),
        Person::new("Al", 21),
    ]
}

// Dyn values are fat pointers, something an implementation might have overlooked.
pub trait DynTrait: Debug {
    fn value(&self) -> i32;
}

#[derive(Debug)]
pub struct DynValA {
    pub value: i32,
}

#[derive(Debug)]
pub struct DynValB {
    pub value: i32,
}

impl DynTrait for DynValA {
    fn value(&self) -> i32 {
        self.value
    }
}

impl DynTrait for DynValB {
    fn value(&self) -> i32 {
        self.value
    }
}
