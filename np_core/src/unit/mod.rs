//! Units - Servants, craft essences and enemies as plain catalog data

mod craft_essence;
mod enemy;
mod servant;

pub use craft_essence::CraftEssence;
pub use enemy::Enemy;
pub use servant::{ClassOverride, NoblePhantasm, Servant, ServantData, Skill};
