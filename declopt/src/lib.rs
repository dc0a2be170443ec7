//! Declarative command-line option parsing.
//!
//! Options are declared once as an ordered table of descriptors; building a
//! [`Parser`] validates them, and every parse yields an [`Options`] table
//! with one typed slot per declaration:
//!
//! ```
//! use declopt::{Opt, OptionTable, Parser};
//!
//! let parser = Parser::builder("prog")
//!     .options(
//!         OptionTable::new()
//!             .option(Opt::new("verbose").short('v').description("Print more"))
//!             .option(Opt::typed::<u32>("jobs").short('j').default_val(1))
//!             .option(Opt::typed::<String>("include").short('I').array()),
//!     )
//!     .build()
//!     .expect("option declarations are valid");
//!
//! let opts = parser
//!     .parse_from(["prog", "-v", "--jobs=4", "-Isrc", "-I", "lib"])
//!     .unwrap();
//! assert!(opts.get::<bool>("verbose").unwrap());
//! assert_eq!(opts.get::<u32>("jobs").unwrap(), 4);
//! assert_eq!(opts.get_all::<String>("include").unwrap(), vec!["src", "lib"]);
//! ```
//!
//! Long options need `=` before their value (`--jobs=4`); short options
//! accept `-j4`, `-j=4` and `-j 4`. A boolean given without a value takes the
//! opposite of its default.

pub mod error;
pub mod options;
pub mod parser;
pub mod registry;
pub mod tokenizer;
pub mod usage;
pub mod value;

pub use error::{ConfigError, Error, OptionRef, ParseError, Result};
pub use options::{FromOptions, Options, Slot};
pub use parser::{Parser, ParserBuilder};
pub use registry::{Field, FieldTable, Opt, OptionTable, MAX_NAME_LEN};
pub use tokenizer::Tokenizer;
pub use usage::UsageStyle;
pub use value::{
    EnumValues, FloatWidth, FromValue, IntWidth, IntoValue, Kind, OptionEnum, OptionType, Value,
};
