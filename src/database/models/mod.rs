pub mod category;
pub mod pet;
pub mod tag;
pub mod user;

pub use category::Category;
pub use pet::{Pet, PetRow, PetStatus};
pub use tag::Tag;
pub use user::User;
