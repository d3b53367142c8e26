//! Route table for the client

use dioxus::prelude::*;

mod home;
mod sheet;

pub use home::HomeRoute;
pub use sheet::SheetRoute;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    HomeRoute {},
    #[route("/sheet/:id")]
    SheetRoute { id: String },
}
