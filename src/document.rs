use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::{Context, Settings},
        scanner::{Block, Coordinate},
    },
    process_block,
};

/// Marker opening an interpreted block.
pub const BEGIN_MARKER: &str = r"\begin{preproc}";
/// Marker closing an interpreted block.
pub const END_MARKER: &str = r"\end{preproc}";

/// Renders a whole LaTeX document.
///
/// Lines outside `\begin{preproc}` ... `\end{preproc}` are copied verbatim.
/// Each block, from its opening line to its closing line, is run through
/// [`process_block`] and replaced by the result. A marker only counts when it
/// appears before the first `%` comment of its line. All blocks share `ctx`,
/// so later blocks see the names defined by earlier ones.
///
/// # Errors
/// - `UnterminatedBlock` if a block has no closing marker.
/// - The first error of any block.
///
/// # Example
/// ```
/// use texcalc::{interpreter::evaluator::core::Context, render};
///
/// let source = "\\section{Sum}\n\
///               \\begin{preproc} a := 2 \\\\ a + 3 = \\placeholder{} \\end{preproc}\n\
///               % \\begin{preproc} ignored\n";
///
/// let rendered = render(source, &mut Context::new()).unwrap();
/// assert_eq!(rendered,
///            "\\section{Sum}\n\
///             \\begin{preproc} a := 2 \\\\ a + 3 = \\placeholder{5} \\end{preproc}\n\
///             % \\begin{preproc} ignored\n");
/// ```
pub fn render(source: &str, ctx: &mut Context) -> Result<String, Error> {
    let mut out = String::with_capacity(source.len());
    let mut lines = source.split_inclusive('\n').zip(1..);

    while let Some((line, number)) = lines.next() {
        let Some(open) = find_marker(line, BEGIN_MARKER, 0) else {
            out.push_str(line);
            continue;
        };
        let opened = Coordinate::new(number, column_of(line, open));
        let begin = Coordinate::new(number, column_of(line, open + BEGIN_MARKER.len()));

        let mut text = String::from(line);
        let (mut current, mut current_number, mut from) = (line, number, open + BEGIN_MARKER.len());
        let end = loop {
            if let Some(close) = find_marker(current, END_MARKER, from) {
                break Coordinate::new(current_number, column_of(current, close));
            }
            let Some((next, next_number)) = lines.next() else {
                return Err(Error::UnterminatedBlock { coord: opened });
            };
            text.push_str(next);
            (current, current_number, from) = (next, next_number, 0);
        };

        debug!(%begin, %end, "processing block");
        out.push_str(&process_block(ctx, &Block::new(text, begin, end))?);
    }

    Ok(out)
}

/// Renders `input` and writes the result.
///
/// The result goes to `output` when it is given and differs from `input`.
/// Otherwise it is written to a temporary `_<name>` file next to the input,
/// which then replaces the input. If rendering fails, the file that was
/// being written is removed and the input is left untouched.
///
/// # Errors
/// Any rendering error, or an I/O error while reading or writing.
pub fn process_file(input: &Path, output: Option<&Path>, settings: Settings) -> Result<(), Error> {
    let source = fs::read_to_string(input)?;
    let in_place = output.is_none_or(|output| output == input);
    let target = match output {
        Some(output) if !in_place => output.to_path_buf(),
        _ => scratch_path(input),
    };

    let mut file = File::create(&target)?;
    let mut ctx = Context::with_settings(settings);
    let written = render(&source, &mut ctx).and_then(|rendered| {
                                                 file.write_all(rendered.as_bytes())?;
                                                 file.flush()?;
                                                 Ok(())
                                             });
    drop(file);

    if let Err(e) = written {
        if let Err(cleanup) = fs::remove_file(&target) {
            warn!(target = %target.display(), error = %cleanup, "could not remove partial output");
        }
        return Err(e);
    }

    if in_place {
        fs::rename(&target, input)?;
    }
    info!(input = %input.display(),
          output = %output.unwrap_or(input).display(),
          globals = ctx.env.global().len(),
          "document rendered");
    Ok(())
}

/// `dir/_name` for an input `dir/name`.
fn scratch_path(input: &Path) -> PathBuf {
    let name = input.file_name().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("_{name}"))
}

/// Byte offset of `marker` in `line`, searching from `from`, if it starts
/// before the line's first unescaped `%`.
fn find_marker(line: &str, marker: &str, from: usize) -> Option<usize> {
    let at = from + line.get(from..)?.find(marker)?;
    let comment = comment_start(line).unwrap_or(line.len());
    (at < comment).then_some(at)
}

/// Byte offset of the first `%` not escaped as `\%`.
fn comment_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    (0..bytes.len()).find(|&i| bytes[i] == b'%' && (i == 0 || bytes[i - 1] != b'\\'))
}

/// 1-based column of the character at byte offset `offset` of `line`.
fn column_of(line: &str, offset: usize) -> usize {
    line[..offset].chars().count() + 1
}
