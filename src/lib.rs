//! A small demonstration calculator.
//!
//! The kernel is a set of pure functions over `i32`/`f64`:
//! [`add`], [`subtract`], [`multiply`], [`divide`], [`power`],
//! [`sqrt_approx`], [`is_prime`] and [`gcd`]. Domain errors come back as
//! [`KernelError`]; the [`Reporter`] turns them into a console diagnostic
//! plus a sentinel `0` so the demo keeps going.
//!
//! ```
//! use reckon::{demo, NewtonParams, Reporter};
//!
//! let mut reporter = Reporter::new(Vec::new());
//! demo::run(&mut reporter, &NewtonParams::default()).unwrap();
//! let out = String::from_utf8(reporter.into_inner()).unwrap();
//! assert!(out.contains("Addition: 19\n"));
//! ```

pub mod arith;
pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod report;
pub mod sqrt;
pub mod utils;

pub use arith::{add, divide, multiply, power, subtract};
pub use config::{Config, LoggingConfig};
pub use error::{ConfigError, KernelError};
pub use report::{FloatRendering, Reporter, Value};
pub use sqrt::{sqrt_approx, sqrt_approx_with, NewtonParams};
pub use utils::{gcd, is_prime};
