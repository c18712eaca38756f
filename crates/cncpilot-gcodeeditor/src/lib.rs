//! # CNC Pilot G-Code Viewer
//!
//! Read-only listing of generated programs with per-line syntax classes.
//!
//! ## Components
//!
//! - **classify**: ordered prefix rules mapping a line to a [`LineClass`]
//!   and its display colour
//! - **ProgramViewer**: numbered listing (`0001`, `0002`, ...) rendered as
//!   plain text, ANSI colour, or with class names
//!
//! ## Usage
//!
//! ```rust
//! use cncpilot_gcodeeditor::{classify, LineClass, ProgramViewer};
//!
//! assert_eq!(classify("G0 Z50."), LineClass::Rapid);
//!
//! let viewer = ProgramViewer::from_text("%\nT1 M6\n%");
//! assert_eq!(viewer.lines()[1].gutter(), "0002");
//! ```

pub mod error;
pub mod highlight;
pub mod viewer;

pub use error::{ViewerError, ViewerResult};
pub use highlight::{classify, LineClass};
pub use viewer::{ProgramViewer, ViewerLine};
