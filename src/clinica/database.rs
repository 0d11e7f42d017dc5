pub mod animals;
pub mod owners;

// Re-export entities for easier access
pub use animals::{ActiveModel as AnimalModel, Entity as Animals};
pub use owners::{ActiveModel as OwnerModel, Entity as Owners};

// Entity collection for convenience
pub mod entities {
    pub use super::{AnimalModel, Animals, OwnerModel, Owners};
}
