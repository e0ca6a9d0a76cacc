pub mod interaction;
pub mod layout;
pub mod neighbors;
pub mod point_look;
pub mod records;
