//! Instance generation and JSON persistence.
//!
//! - [`generate`] builds reproducible lab-inventory style instances from a
//!   seeded `ChaCha8` generator.
//! - [`load_instance`] and [`save_instance`] move instances to and from
//!   pretty-printed JSON files.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use knapsack_data::{GeneratorConfig, generate, load_instance, save_instance};
//!
//! let instance = generate(&GeneratorConfig::default()).expect("generate instance");
//! let path = Utf8Path::new("data/knapsack_labA_inv.json");
//! save_instance(path, &instance).expect("save instance");
//! assert_eq!(load_instance(path).expect("load instance"), instance);
//! ```

#![forbid(unsafe_code)]

mod generate;
mod io;

pub use generate::{GenerateError, GeneratorConfig, generate};
pub use io::{InstanceIoError, load_instance, save_instance};
