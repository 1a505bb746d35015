// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;
#[macro_use]
extern crate log;
extern crate serde;
extern crate serde_yaml;
extern crate csv;
extern crate fnv;
extern crate itertools;
extern crate oxttl;
extern crate oxrdf;
extern crate algorithm;

pub mod errors;
pub mod settings;
pub mod models;
pub mod namespace;
pub mod drepr;
pub mod export;
pub mod view;
pub mod prelude;
