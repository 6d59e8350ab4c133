use std::{error, fmt::Write, fs, io, io::Read, path::Path};

use log::debug;
use playground_html::{convert_ansi_to_html, remap_token_classes, CompilerOutput, LanguageTag};

mod opts;

use opts::{Mode, Opts, Theme};

pub type StdError = Box<dyn error::Error>;

fn main() {
    env_logger::init();

    match main_inner() {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn main_inner() -> Result<(), StdError> {
    let opts = Opts::load()?;
    debug!("{opts:?}");

    let input = read_input(opts.file.as_deref())?;
    debug!("read {} bytes of {:?} output", input.len(), opts.mode);

    let html = render(opts.mode, &input, &opts.compiler)?;
    debug!("rendered {} bytes of html", html.len());

    let mut buf = String::new();

    if opts.doc {
        writeln!(
            buf,
            "<html>
<head>
<meta charset=\"utf-8\">
<style>{}</style>
</head>
<body>",
            make_style(opts.theme),
        )?;
    }

    match opts.mode {
        Mode::Asm | Mode::LlvmIr => {
            write!(buf, "<pre class=\"highlight\"><code>{html}</code></pre>")?
        }
        Mode::Ansi | Mode::Compiler => {
            write!(buf, "<pre class=\"output\"><samp>{html}</samp></pre>")?
        }
    }

    if opts.doc {
        writeln!(buf, "\n</body>\n</html>")?;
    }

    println!("{buf}");

    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String, StdError> {
    match file {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()).into()),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn render(mode: Mode, input: &str, compiler: &CompilerOutput) -> Result<String, StdError> {
    Ok(match mode {
        Mode::Ansi => convert_ansi_to_html(input),
        Mode::Asm => remap_token_classes(input, LanguageTag::Assembly),
        Mode::LlvmIr => remap_token_classes(input, LanguageTag::LlvmIr),
        Mode::Compiler => compiler.format(input)?,
    })
}

fn make_style(theme: Theme) -> String {
    macro_rules! format_colors {
        ($s:literal $(, $name:ident)* $(,)?) => {
            format!($s, $( $name = get_color(Color::$name, theme) ),*)
        };
    }

    format_colors!(
        "
body {{
  background-color: {Bg};
  color: {Fg};
}}
pre {{
  overflow: auto;
  line-height: 120%;
}}

.ansi-black {{ color: {Black}; }}
.ansi-red {{ color: {Red}; }}
.ansi-green {{ color: {Green}; }}
.ansi-yellow {{ color: {Yellow}; }}
.ansi-blue {{ color: {Blue}; }}
.ansi-magenta {{ color: {Magenta}; }}
.ansi-cyan {{ color: {Cyan}; }}
.ansi-white {{ color: {White}; }}

.ace_comment {{
  color: {Comment};
  font-style: italic;
}}
.ace_keyword, .ace_storage {{
  color: {Keyword};
}}
.ace_function, .ace_identifier {{
  color: {Function};
}}
.ace_variable {{
  color: {Variable};
}}
.ace_constant {{
  color: {Constant};
}}
.ace_string {{
  color: {Str};
}}
.ace_punctuation {{
  color: {Punct};
}}
.linejump {{
  cursor: pointer;
  text-decoration: underline dotted;
}}
",
        Bg,
        Fg,
        Black,
        Red,
        Green,
        Yellow,
        Blue,
        Magenta,
        Cyan,
        White,
        Comment,
        Keyword,
        Function,
        Variable,
        Constant,
        Str,
        Punct,
    )
}

enum Color {
    Bg,
    Fg,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Comment,
    Keyword,
    Function,
    Variable,
    Constant,
    Str,
    Punct,
}

fn get_color(color: Color, theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => match color {
            Color::Bg => "#141414",
            Color::Fg => "white",
            Color::Black => "#555555",
            Color::Red => "#ff7167",
            Color::Green => "#32d132",
            Color::Yellow => "#ffba24",
            Color::Blue => "#419df3",
            Color::Magenta => "#d558f5",
            Color::Cyan => "#00ffff",
            Color::White => "white",
            Color::Comment => "#8a8a8a",
            Color::Keyword => "#d558f5",
            Color::Function => "#419df3",
            Color::Variable => "#ff7167",
            Color::Constant => "#ffba24",
            Color::Str => "#a2be00",
            Color::Punct => "#b2b2b2",
        },
        Theme::Light => match color {
            Color::Bg => "#eeeeee",
            Color::Fg => "black",
            Color::Black => "black",
            Color::Red => "#b33742",
            Color::Green => "#1fa21f",
            Color::Yellow => "#ce6a00",
            Color::Blue => "#1a71c1",
            Color::Magenta => "#9f1adb",
            Color::Cyan => "#00a0a0",
            Color::White => "#a0a0a0",
            Color::Comment => "#6c6c6c",
            Color::Keyword => "#9f1adb",
            Color::Function => "#1a71c1",
            Color::Variable => "#b33742",
            Color::Constant => "#ce6a00",
            Color::Str => "#819700",
            Color::Punct => "#444444",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_modes() {
        let compiler = CompilerOutput::new();
        assert_eq!(
            render(Mode::Ansi, "\x1b[32mok\x1b[0m", &compiler).unwrap(),
            "<span class=\"ansi-green\">ok</span>"
        );
        assert_eq!(
            render(Mode::Asm, "<span class=\"p\">,</span>", &compiler).unwrap(),
            "<span class=\"ace_punctuation\">,</span>"
        );
        assert_eq!(
            render(
                Mode::LlvmIr,
                "<span class=\"p\">,</span><span class=\"mh\">1</span>",
                &compiler
            )
            .unwrap(),
            "<span class=\"ace_punctuation\">,</span>1"
        );
        assert!(render(Mode::Compiler, "/x/main.pony:1:1", &compiler)
            .unwrap()
            .starts_with("<a onclick=\"javascript:editGo(1,1)\""));
    }

    #[test]
    fn style_covers_every_ansi_color() {
        for theme in [Theme::Light, Theme::Dark] {
            let style = make_style(theme);
            for color in playground_html::AnsiColor::ALL {
                assert!(style.contains(&format!(".{} {{", color.class())));
            }
        }
    }

    #[test]
    fn missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(Some(&dir.path().join("nope.txt"))).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }
}
