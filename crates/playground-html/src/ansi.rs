use std::{fmt, sync::OnceLock};

use regex::{Captures, Regex};

use crate::{AnsiColor, Esc};

/// `ESC[1m ESC[3Nm run [ESC(B] ESC[0m`
const BOLD_COLOR_REGEX: &str = r"\x1b\[1m\x1b\[3([0-7])m([^\x1b]*)(?:\x1b\(B)?\x1b\[0?m";
/// `ESC[3Nm run [ESC(B] ESC[0m`
const COLOR_REGEX: &str = r"\x1b\[3([0-7])m([^\x1b]*)(?:\x1b\(B)?\x1b\[0?m";
/// `ESC[1m run [ESC(B] ESC[0m`
const BOLD_REGEX: &str = r"\x1b\[1m([^\x1b]*)(?:\x1b\(B)?\x1b\[0?m";
/// A reset that wasn't consumed by one of the runs above
const RESET_REGEX: &str = r"(?:\x1b\(B)?\x1b\[0?m";

struct Rules {
    bold_color: Regex,
    color: Regex,
    bold: Regex,
    reset: Regex,
}

fn rules() -> &'static Rules {
    static RULES: OnceLock<Rules> = OnceLock::new();
    RULES.get_or_init(|| Rules {
        bold_color: Regex::new(BOLD_COLOR_REGEX).unwrap(),
        color: Regex::new(COLOR_REGEX).unwrap(),
        bold: Regex::new(BOLD_REGEX).unwrap(),
        reset: Regex::new(RESET_REGEX).unwrap(),
    })
}

/// Converts the ANSI escape codes found in compiler output to HTML.
///
/// Only the small subset rustc and ponyc emit is understood: runs that are bold, colored
/// with one of the 8 standard foreground colors, or both, each terminated by a reset.
/// Special html characters (`&<>`) are escaped before anything else. Escape sequences that
/// don't form such a run are left in the output as they are; stray resets are removed.
///
/// This never fails: every input has a rendering.
///
/// ## Example
///
/// ```
/// // \x1b[1m : bold   \x1b[31m : red   \x1b[0m : reset
/// let input = "\x1b[1m\x1b[31merror\x1b[0m: expected `<T>`";
/// let converted = playground_html::convert_ansi_to_html(input);
///
/// assert_eq!(
///     converted,
///     "<span class=\"ansi-red\"><strong>error</strong></span>: expected `&lt;T&gt;`"
/// );
/// ```
pub fn convert_ansi_to_html(input: &str) -> String {
    let rules = rules();
    let html = Esc(input).to_string();

    // The bold+color rule has to run first, the color rule would eat its tail otherwise
    let html = rules
        .bold_color
        .replace_all(&html, |caps: &Captures<'_>| render_run(caps, true));
    let html = rules
        .color
        .replace_all(&html, |caps: &Captures<'_>| render_run(caps, false));
    let html = rules.bold.replace_all(&html, |caps: &Captures<'_>| {
        AnsiRun::new(&caps[1], None, true).to_string()
    });

    rules.reset.replace_all(&html, "").into_owned()
}

fn render_run(caps: &Captures<'_>, bold: bool) -> String {
    match caps[1].parse().ok().and_then(AnsiColor::from_selector) {
        Some(color) => AnsiRun::new(&caps[2], Some(color), bold).to_string(),
        // unreachable with the `[0-7]` selector class, keep the text verbatim regardless
        None => caps[0].to_owned(),
    }
}

/// A span of already escaped text with one flat style.
///
/// Runs never nest, so the rendered markup is at most `<span><strong>…</strong></span>`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct AnsiRun<'a> {
    text: &'a str,
    color: Option<AnsiColor>,
    bold: bool,
}

impl<'a> AnsiRun<'a> {
    pub(crate) fn new(text: &'a str, color: Option<AnsiColor>, bold: bool) -> Self {
        Self { text, color, bold }
    }
}

impl fmt::Display for AnsiRun<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(color) = self.color {
            write!(f, "<span class=\"{}\">", color.class())?;
        }
        if self.bold {
            write!(f, "<strong>{}</strong>", self.text)?;
        } else {
            f.write_str(self.text)?;
        }
        if self.color.is_some() {
            f.write_str("</span>")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_rendering() {
        let red = Some(AnsiColor::Red);
        assert_eq!(AnsiRun::new("x", None, false).to_string(), "x");
        assert_eq!(
            AnsiRun::new("x", None, true).to_string(),
            "<strong>x</strong>"
        );
        assert_eq!(
            AnsiRun::new("x", red, false).to_string(),
            "<span class=\"ansi-red\">x</span>"
        );
        assert_eq!(
            AnsiRun::new("x", red, true).to_string(),
            "<span class=\"ansi-red\"><strong>x</strong></span>"
        );
    }

    #[test]
    fn background_reset_marker_is_part_of_the_reset() {
        assert_eq!(
            convert_ansi_to_html("\x1b[32mok\x1b(B\x1b[m"),
            "<span class=\"ansi-green\">ok</span>"
        );
        assert_eq!(convert_ansi_to_html("a\x1b(B\x1b[mb"), "ab");
    }

    #[test]
    fn lone_background_marker_stays() {
        assert_eq!(convert_ansi_to_html("a\x1b(Bb"), "a\x1b(Bb");
    }
}
