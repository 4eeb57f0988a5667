mod health;
mod mapping;
mod redirect;

pub use health::health_handler;
pub use mapping::create_mapping_handler;
pub use redirect::redirect_handler;
