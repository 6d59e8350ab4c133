use std::fmt;

/// A formatting wrapper for escaping HTML in a string.
///
/// The `Display` implementation replaces
///   - `&` with `&amp;`
///   - `<` with `&lt;`
///   - `>` with `&gt;`
///
/// Quotes are left alone.
///
/// `Esc` is lazy: If you don't use it, it does nothing. Also, it
/// doesn't allocate a `String` unless you call `.to_string()`.
///
/// ## Examples
///
/// ```
/// # use playground_html::Esc;
/// assert_eq!(&format!("{}", Esc("<h1>")), "&lt;h1&gt;");
/// assert_eq!(&Esc("\"a\" & 'b'").to_string(), "\"a\" &amp; 'b'");
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Esc<T: AsRef<str>>(pub T);

impl<T: AsRef<str>> fmt::Display for Esc<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = self.0.as_ref();
        while let Some(pos) = s
            .as_bytes()
            .iter()
            .position(|b| [b'&', b'<', b'>'].contains(b))
        {
            f.write_str(&s[..pos])?;
            f.write_str(match s.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                _ => "&gt;",
            })?;
            s = &s[pos + 1..];
        }
        f.write_str(s)
    }
}
