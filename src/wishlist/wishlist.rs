use serde::{Deserialize, Serialize};

use crate::catalog::Car;

/// Outcome of a wishlist toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

/// Ordered set of car snapshots, unique by id. Insertion order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist {
    cars: Vec<Car>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list, dropping later duplicates of an id.
    pub fn from_cars(cars: impl IntoIterator<Item = Car>) -> Self {
        let mut wishlist = Self::new();
        for car in cars {
            if !wishlist.contains(car.id) {
                wishlist.cars.push(car);
            }
        }
        wishlist
    }

    /// Remove the car if its id is present, append it otherwise.
    pub fn toggle(&mut self, car: &Car) -> Toggled {
        match self.cars.iter().position(|c| c.id == car.id) {
            Some(index) => {
                self.cars.remove(index);
                Toggled::Removed
            }
            None => {
                self.cars.push(car.clone());
                Toggled::Added
            }
        }
    }

    pub fn contains(&self, id: u64) -> bool {
        self.cars.iter().any(|c| c.id == id)
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Car> {
        self.cars.iter()
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

impl<'a> IntoIterator for &'a Wishlist {
    type Item = &'a Car;
    type IntoIter = std::slice::Iter<'a, Car>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
