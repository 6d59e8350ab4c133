use regex::{Captures, NoExpand, Regex};

use crate::{convert_ansi_to_html, Error, Esc};

/// Where in the editor a diagnostic location points to.
///
/// Rendered as an anchor whose handlers (`editGo`, `editShowPoint`, `editShowRegion`,
/// `editRestore`) are provided by the page hosting the editor.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum JumpTarget {
    Point {
        line: u32,
        column: u32,
    },
    Region {
        start_line: u32,
        start_column: u32,
        end_line: u32,
        end_column: u32,
    },
}

impl JumpTarget {
    /// Wraps `html` in a link that moves the editor cursor to this target when clicked and
    /// previews the target while hovered.
    ///
    /// `html` is inserted as is, it must already be escaped.
    ///
    /// ```
    /// # use playground_html::JumpTarget;
    /// let link = JumpTarget::Point { line: 3, column: 7 }.anchor("main.pony:3:7");
    /// assert_eq!(
    ///     link,
    ///     "<a onclick=\"javascript:editGo(3,7)\" onmouseover=\"javascript:editShowPoint(3,7)\" \
    ///      onmouseout=\"javascript:editRestore()\" class=\"linejump\">main.pony:3:7</a>"
    /// );
    /// ```
    pub fn anchor(&self, html: &str) -> String {
        let (line, column, preview) = match *self {
            JumpTarget::Point { line, column } => {
                (line, column, format!("editShowPoint({line},{column})"))
            }
            JumpTarget::Region {
                start_line,
                start_column,
                end_line,
                end_column,
            } => (
                start_line,
                start_column,
                format!("editShowRegion({start_line},{start_column}, {end_line},{end_column})"),
            ),
        };

        let mut s = format!("<a onclick=\"javascript:editGo({line},{column})\"");
        s.push_str(" onmouseover=\"javascript:");
        s.push_str(&preview);
        s.push_str("\" onmouseout=\"javascript:editRestore()\" class=\"linejump\">");
        s.push_str(html);
        s.push_str("</a>");
        s
    }
}

/// Formats compiler diagnostics for the result pane.
///
/// On top of [`convert_ansi_to_html`], this
///
/// - shortens the sandbox path of the user's file to just its name,
/// - strips the versioned standard library directory from library paths,
/// - turns `file:line:column` locations in the user's file into [`JumpTarget`] links.
///
/// ## Example
///
/// ```
/// let output = playground_html::CompilerOutput::new()
///     .format("/tmp/build-1/main.pony:2:5: syntax error")
///     .unwrap();
///
/// assert_eq!(
///     output,
///     "<a onclick=\"javascript:editGo(2,5)\" onmouseover=\"javascript:editShowPoint(2,5)\" \
///      onmouseout=\"javascript:editRestore()\" class=\"linejump\">main.pony:2:5</a>: \
///      syntax error"
/// );
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CompilerOutput {
    source_name: String,
    stdlib_dir: String,
}

impl Default for CompilerOutput {
    fn default() -> Self {
        Self {
            source_name: "main.pony".to_string(),
            stdlib_dir: "/usr/local/lib/pony".to_string(),
        }
    }
}

impl CompilerOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the user's source file, as it appears in diagnostics (default: `main.pony`).
    /// [`format`](Self::format) rejects an empty name.
    pub fn source_name(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = source_name.into();
        self
    }

    /// Directory holding the versioned standard library installs (default:
    /// `/usr/local/lib/pony`)
    pub fn stdlib_dir(mut self, stdlib_dir: impl Into<String>) -> Self {
        self.stdlib_dir = stdlib_dir.into();
        self
    }

    pub fn format(&self, text: &str) -> Result<String, Error> {
        if self.source_name.is_empty() {
            return Err(Error::EmptySourceName);
        }

        // Patterns match against escaped html, so the names are escaped the same way
        let short_name = Esc(&self.source_name).to_string();
        let name = regex::escape(&short_name);
        let stdlib = Esc(self.stdlib_dir.trim_end_matches('/')).to_string();
        let stdlib = regex::escape(&stdlib);

        let sandbox_path = Regex::new(&format!(r#"/[^\s<>"]*/{name}"#))?;
        let stdlib_path = if stdlib.is_empty() {
            None
        } else {
            Some(Regex::new(&format!(r"{stdlib}/[^/\s]*/"))?)
        };
        // No lookbehind in `regex`, so the character before the name is captured and re-emitted
        let location = Regex::new(&format!(
            r#"(?m)(^|[\s>('"`])({name}:(\d+):(\d+)(?:: (\d+):(\d+))?)"#
        ))?;

        let html = convert_ansi_to_html(text);
        let html = sandbox_path
            .replace_all(&html, NoExpand(&short_name))
            .into_owned();
        let html = match &stdlib_path {
            Some(stdlib_path) => stdlib_path.replace_all(&html, "").into_owned(),
            None => html,
        };
        let html = location.replace_all(&html, |caps: &Captures<'_>| match jump_target(caps) {
            Some(target) => format!("{}{}", &caps[1], target.anchor(&caps[2])),
            None => caps[0].to_owned(),
        });

        Ok(html.into_owned())
    }
}

fn jump_target(caps: &Captures<'_>) -> Option<JumpTarget> {
    let num = |i: usize| caps.get(i).map(|m| m.as_str().parse::<u32>());

    let line = num(3)?.ok()?;
    let column = num(4)?.ok()?;
    match (num(5), num(6)) {
        (Some(end_line), Some(end_column)) => Some(JumpTarget::Region {
            start_line: line,
            start_column: column,
            end_line: end_line.ok()?,
            end_column: end_column.ok()?,
        }),
        _ => Some(JumpTarget::Point { line, column }),
    }
}
