pub use super::beam::Entity as Beam;
pub use super::satellite::Entity as Satellite;
pub use super::transponder::Entity as Transponder;
