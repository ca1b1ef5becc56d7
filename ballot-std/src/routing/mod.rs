//! # Routing Implementations
//!
//! This module provides the router backends and the router view:
//!
//! | Router | Use Case | Order kept |
//! |--------|----------|------------|
//! | [`RouteTable`] | Small fixed tables, the default | yes |
//! | [`HashMapRouter`] | Larger tables built at runtime | no |
//! | `PhfRouter` | Tables known at compile time (`phf` feature) | no |
//! | `MatchitRouter` | Radix-tree lookup (`matchit` feature) | no |
//!
//! All backends match exact, case-sensitive literal paths.

pub mod hashmap;
#[cfg(feature = "matchit")]
pub mod matchit;
#[cfg(feature = "phf")]
pub mod phf;
pub mod table;
pub mod view;

pub use self::hashmap::{HashMapRouter, HashMapRouterBuilder};
#[cfg(feature = "matchit")]
pub use self::matchit::{MatchitRouter, MatchitRouterBuilder};
#[cfg(feature = "phf")]
pub use self::phf::PhfRouter;
pub use self::table::{Route, RouteTable, RouteTableBuilder};
pub use self::view::Routes;
