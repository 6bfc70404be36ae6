use std::fs;

use texcalc::{
    Settings,
    error::{Error, EvalError},
    interpreter::{evaluator::core::Context, scanner::Coordinate},
    process_file, render,
};

const DOCUMENT: &str = r"\section{Motion}
\begin{preproc}
v := 3 \cdot \meter / \second \\
t := 4 \cdot \second
\end{preproc}
Distance: \begin{preproc} v \cdot t = \placeholder{} \end{preproc}
% \begin{preproc} v = \placeholder{} \end{preproc}
";

const RENDERED: &str = r"\section{Motion}
\begin{preproc}
v := 3 \cdot \meter / \second \\
t := 4 \cdot \second
\end{preproc}
Distance: \begin{preproc} v \cdot t = \placeholder{12\,\mathrm{m}} \end{preproc}
% \begin{preproc} v = \placeholder{} \end{preproc}
";

const BROKEN: &str = r"Intro
\begin{preproc}
x := 1 / 0
\end{preproc}
";

#[test]
fn blocks_share_names_and_text_outside_is_kept() {
    let rendered = render(DOCUMENT, &mut Context::new()).unwrap();
    assert_eq!(rendered, RENDERED);
}

#[test]
fn document_without_blocks_is_unchanged() {
    let source = "Plain text\nwith 50\\% less math\n";
    assert_eq!(render(source, &mut Context::new()).unwrap(), source);
}

#[test]
fn escaped_percent_does_not_hide_a_marker() {
    let source = r"50\% done \begin{preproc} 2 = \placeholder{} \end{preproc}";
    let rendered = render(source, &mut Context::new()).unwrap();
    assert_eq!(rendered, r"50\% done \begin{preproc} 2 = \placeholder{2} \end{preproc}");
}

#[test]
fn errors_carry_document_coordinates() {
    let err = render(BROKEN, &mut Context::new()).unwrap_err();
    assert!(matches!(err, Error::Eval(EvalError::DivisionByZero { coord }) if coord == Coordinate::new(3, 8)),
            "{err}");
}

#[test]
fn unterminated_block_is_an_error() {
    let err = render("Intro\n\\begin{preproc}\nx := 1\n", &mut Context::new()).unwrap_err();
    assert!(matches!(err, Error::UnterminatedBlock { coord } if coord == Coordinate::new(2, 1)),
            "{err}");
    assert_eq!(err.to_string(), "2:1: Block opened here is never closed with \\end{preproc}.");
}

#[test]
fn process_file_writes_the_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("motion.tex");
    let output = dir.path().join("motion.out.tex");
    fs::write(&input, DOCUMENT).unwrap();

    process_file(&input, Some(&output), Settings::default()).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), RENDERED);
    assert_eq!(fs::read_to_string(&input).unwrap(), DOCUMENT);
}

#[test]
fn process_file_rewrites_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("motion.tex");
    fs::write(&input, DOCUMENT).unwrap();

    process_file(&input, None, Settings::default()).unwrap();

    assert_eq!(fs::read_to_string(&input).unwrap(), RENDERED);
    assert!(!dir.path().join("_motion.tex").exists());
}

#[test]
fn failed_run_leaves_no_output_behind() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.tex");
    let output = dir.path().join("broken.out.tex");
    fs::write(&input, BROKEN).unwrap();

    assert!(process_file(&input, Some(&output), Settings::default()).is_err());
    assert!(!output.exists());

    assert!(process_file(&input, None, Settings::default()).is_err());
    assert!(!dir.path().join("_broken.tex").exists());
    assert_eq!(fs::read_to_string(&input).unwrap(), BROKEN);
}

#[test]
fn missing_input_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = process_file(&dir.path().join("absent.tex"), None, Settings::default()).unwrap_err();
    assert!(matches!(err, Error::Io(_)), "{err}");
}
