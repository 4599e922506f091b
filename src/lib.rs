pub use client::TowerfallClient;
pub use error::{Result, TowerfallError};
pub use model::*;
pub use route::{NavigationHook, Route, Router, View};

mod api;
mod client;
pub mod error;
pub mod model;
pub mod route;
