//! The lodging detail page: a loader that renders one lodging and a
//! `delete` form action.

pub mod delete;
pub mod view;

pub use delete::{delete, require_same_origin, route_delete_lodging};
pub use view::{load, route_lodging, route_lodging_data, LodgingProps, PageData};
