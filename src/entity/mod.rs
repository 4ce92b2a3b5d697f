pub mod construction_stage;

pub use construction_stage::Entity as ConstructionStage;
