//! Trait-based polymorphism: a small animal hierarchy.
//!
//! Where a class-based language would use inheritance with an overridden
//! instance method and a static type tag, this module uses a trait with a
//! per-type implementation. [`Dog`] composes an [`Animal`] and layers its
//! own detail on top of the base formatting.

use serde::Serialize;

/// Display contract shared by every animal-like type.
pub trait Describe {
    /// Human-readable name with qualifying detail.
    fn full_name(&self) -> String;

    /// The concrete kind, analogous to a type tag.
    fn kind(&self) -> &'static str;
}

/// A named animal of some species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Animal {
    pub name: String,
    pub species: String,
}

impl Animal {
    /// Creates a new animal.
    pub fn new(name: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
        }
    }
}

impl Describe for Animal {
    fn full_name(&self) -> String {
        format!("{} ({})", self.name, self.species)
    }

    fn kind(&self) -> &'static str {
        "Animal"
    }
}

/// A dog: an animal whose species is always `"Canine"`, extended with a breed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dog {
    #[serde(flatten)]
    animal: Animal,
    breed: String,
}

impl Dog {
    /// Creates a new dog. The species is fixed to `"Canine"`.
    pub fn new(name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            animal: Animal::new(name, "Canine"),
            breed: breed.into(),
        }
    }

    /// The dog's name.
    pub fn name(&self) -> &str {
        &self.animal.name
    }

    /// The dog's breed.
    pub fn breed(&self) -> &str {
        &self.breed
    }
}

impl Describe for Dog {
    /// Extends the base animal formatting with the breed.
    fn full_name(&self) -> String {
        format!("{}, Breed: {}", self.animal.full_name(), self.breed)
    }

    fn kind(&self) -> &'static str {
        "Dog"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_full_name() {
        let animal = Animal::new("Max", "Mammal");
        assert_eq!(animal.full_name(), "Max (Mammal)");
    }

    #[test]
    fn test_animal_kind() {
        let animal = Animal::new("Max", "Mammal");
        assert_eq!(animal.kind(), "Animal");
    }

    #[test]
    fn test_dog_full_name_extends_base() {
        let dog = Dog::new("Buddy", "Labrador Retriever");
        assert_eq!(
            dog.full_name(),
            "Buddy (Canine), Breed: Labrador Retriever"
        );
    }

    #[test]
    fn test_dog_species_is_fixed() {
        let dog = Dog::new("Rex", "Beagle");
        assert!(dog.full_name().contains("(Canine)"));
    }

    #[test]
    fn test_dog_kind() {
        let dog = Dog::new("Buddy", "Labrador Retriever");
        assert_eq!(dog.kind(), "Dog");
    }

    #[test]
    fn test_describe_as_trait_object() {
        let animals: Vec<Box<dyn Describe>> = vec![
            Box::new(Animal::new("Max", "Mammal")),
            Box::new(Dog::new("Buddy", "Labrador Retriever")),
        ];

        let names: Vec<String> = animals.iter().map(|a| a.full_name()).collect();
        assert_eq!(
            names,
            vec![
                "Max (Mammal)".to_string(),
                "Buddy (Canine), Breed: Labrador Retriever".to_string(),
            ]
        );
    }

    #[test]
    fn test_dog_serializes_flat() {
        let dog = Dog::new("Buddy", "Labrador Retriever");
        let value = serde_json::to_value(&dog).unwrap();
        assert_eq!(value["name"], "Buddy");
        assert_eq!(value["species"], "Canine");
        assert_eq!(value["breed"], "Labrador Retriever");
    }
}
