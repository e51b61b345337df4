//! fldarklint – reader for the data files of Freelancer and its mods.
//!
//! The game keeps its content in an "extended INI" dialect:
//!
//! ```text
//! ; Universe
//! [Base]
//! nickname = Li01_01_Base
//! system = Li01
//! strid_name = 196609
//! file = Universe\Systems\Li01\Bases\Li01_01_Base.ini
//! ```
//!
//! Reading happens in two layers:
//! * [`inireader`] turns lines into an [`inireader::IniFile`]: ordered
//!   sections with ordered params, typed [`value::Value`]s and name indexes.
//!   It knows nothing about the game.
//! * [`universe`] walks such a file and decodes bases, systems and the time
//!   setting of `universe.ini` into a [`universe::UniverseConfig`],
//!   lower-casing nicknames and indexing records by them.
//!
//! Lines come from a [`source::LineSource`], so the reader itself never
//! touches the file system. Diagnostics are emitted as `tracing` events; the
//! binary installs a subscriber configured by [`settings::Settings`].
//!
//! ## Quick Start
//! ```
//! use fldarklint::source::TextSource;
//! use fldarklint::universe::UniverseConfig;
//! let source = TextSource::new("universe.ini", "[Time]\nseconds_per_day = 1800\n");
//! let (config, _document) = UniverseConfig::read(&source).unwrap();
//! assert_eq!(config.time().seconds_per_day, 1800);
//! ```
//!
//! ## Errors
//! Every failure is a [`error::LintError`]. Missing or unparseable mandatory
//! fields stop the decode; everything optional is skipped with a log event.

pub mod error;
pub mod grammar;
pub mod inireader;
pub mod keeper;
pub mod path;
pub mod settings;
pub mod source;
pub mod universe;
pub mod value;
