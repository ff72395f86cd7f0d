//! Models shared between the editor and the image upload service.

pub mod model;
