//! Render the output of an online code playground as HTML.
//!
//! The playground shows two kinds of server output that need markup:
//!
//! - compiler diagnostics containing
//!   [ANSI escape codes](https://en.wikipedia.org/wiki/ANSI_escape_code), see
//!   [`convert_ansi_to_html`] and [`CompilerOutput`],
//! - assembly and LLVM IR listings highlighted by pygments, whose token classes have to be
//!   translated for the editor's themes, see [`remap_token_classes`].
//!
//! The ANSI support is deliberately small and covers what rustc and ponyc print:
//!
//! - bold
//! - the 8 standard foreground colors (`ansi-black` ... `ansi-white` CSS classes)
//! - bold and colored at once
//!
//! Each styled run has to be terminated by a reset. Other escape codes are left in the
//! output untouched, stray resets are removed. Nothing in this crate ever fails on
//! malformed input.
//!
//! All functions are pure and may be called from any number of threads.
//!
//! ## Example
//! ```
//! use playground_html::{convert_ansi_to_html, remap_token_classes, LanguageTag};
//!
//! assert_eq!(
//!     convert_ansi_to_html("\x1b[33mwarning\x1b[0m: unused"),
//!     "<span class=\"ansi-yellow\">warning</span>: unused"
//! );
//! assert_eq!(
//!     remap_token_classes(r#"<span class="k">define</span>"#, LanguageTag::LlvmIr),
//!     r#"<span class="ace_keyword">define</span>"#
//! );
//! ```
//!
#![deny(unsafe_code)]

mod ansi;
mod color;
mod compiler_output;
mod error;
mod esc;
mod highlight;

pub use ansi::convert_ansi_to_html;
pub use color::AnsiColor;
pub use compiler_output::{CompilerOutput, JumpTarget};
pub use error::Error;
pub use esc::Esc;
pub use highlight::{remap_token_classes, remap_token_classes_for, token_classes, LanguageTag};
