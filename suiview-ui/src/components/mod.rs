mod connected_account;
mod owned_objects;

pub use connected_account::ConnectedAccount;
pub use owned_objects::OwnedObjects;
