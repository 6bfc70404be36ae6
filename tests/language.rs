use texcalc::{
    Settings,
    error::{Error, EvalError, LexError, ParseError},
    interpreter::{
        evaluator::core::Context,
        lexer::tokenize,
        scanner::{Block, Coordinate},
        tag::Tag,
    },
    process_block,
};

fn run_with(settings: Settings, src: &str) -> Result<String, Error> {
    process_block(&mut Context::with_settings(settings), &Block::from_source(src))
}

fn run(src: &str) -> Result<String, Error> {
    run_with(Settings::default(), src)
}

fn assert_success(src: &str) -> String {
    match run(src) {
        Ok(out) => out,
        Err(e) => panic!("Block failed: {e}\n{src}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match run(src) {
        Ok(out) => panic!("Block succeeded but was expected to fail:\n{out}"),
        Err(e) => e,
    }
}

fn assert_renders(src: &str, expected: &str) {
    assert_eq!(assert_success(src), expected, "while rendering {src}");
}

/// Appends `= \placeholder{}` to `src` and returns what the placeholder was
/// filled with.
fn value_of(src: &str) -> String {
    let out = assert_success(&format!(r"{src} = \placeholder{{}}"));
    let (_, filled) = out.rsplit_once(r"\placeholder{").expect("placeholder vanished");
    filled.strip_suffix('}').expect("unbalanced placeholder").to_string()
}

#[test]
fn block_with_assignments_and_placeholder() {
    assert_renders(r"\begin{block} x := 3 \\ y := x + 2 \\ y = \placeholder{} \end{block}",
                   r"\begin{block} x := 3 \\ y := x + 2 \\ y = \placeholder{5} \end{block}");
}

#[test]
fn block_without_placeholders_is_unchanged() {
    let src = r"a := 2 \\ b := a \cdot a";
    assert_renders(src, src);
}

#[test]
fn placeholders_that_are_never_reached_keep_their_text() {
    let src = r"\ifexpr{0 > 1} 1 = \placeholder{old}";
    assert_renders(src, src);
}

#[test]
fn arithmetic_and_precedence() {
    assert_eq!(value_of("1 + 2 * 3"), "7");
    assert_eq!(value_of("(1 + 2) * 3"), "9");
    assert_eq!(value_of("8 - 5 - 1"), "2");
    assert_eq!(value_of(r"\frac{1}{4}"), "0.25");
    assert_eq!(value_of("2^10"), "1024");
    assert_eq!(value_of("2^3^2"), "512");
    assert_eq!(value_of("-2^2"), "-4");
    assert_eq!(value_of("-0"), "0");
    assert_eq!(value_of(r"6 \times 7"), "42");
}

#[test]
fn comparisons_and_logic() {
    assert_eq!(value_of("(3 = 3)"), "1");
    assert_eq!(value_of(r"(3 \neq 3)"), "0");
    assert_eq!(value_of(r"2 \leq 2"), "1");
    assert_eq!(value_of(r"(1 < 2 \land 3 > 4)"), "0");
    assert_eq!(value_of(r"(1 < 2 \lor 3 > 4)"), "1");
    assert_eq!(value_of(r"\lnot 0"), "1");
    assert_eq!(value_of(r"\lnot 5"), "0");
}

#[test]
fn functions_and_calls() {
    assert_renders(r"f(x) := x^2 \\ f(3) = \placeholder{}",
                   r"f(x) := x^2 \\ f(3) = \placeholder{9}");
    assert_eq!(value_of(r"add(a, b) := a + b \\ add(2, 5)"), "7");
    assert_eq!(value_of(r"k := 2 \\ scale(x) := k \cdot x \\ k := 10 \\ scale(3)"), "6");
}

#[test]
fn writes_inside_a_function_reach_existing_globals() {
    assert_eq!(value_of(r"n := 0 \\ bump(k) := n := n + k \\ bump(5) \\ n"), "5");

    let m = r"m := \begin{pmatrix} 1 & 2 \end{pmatrix}";
    assert_eq!(value_of(&format!(r"{m} \\ set(v) := m_{{0}} := v \\ set(9) \\ m_{{0}}")), "9");
    assert_eq!(value_of(r"w(v) := \begin{block} q := \begin{pmatrix} 0 & 0 \end{pmatrix} \\ q_{1} := v \\ q_{1} \end{block} \\ w(4)"),
               "4");
}

#[test]
fn placeholders_inside_function_bodies_leave_caller_text_alone() {
    let mut ctx = Context::new();
    let define = r"f(x) := x = \placeholder{} \\ g(x) := \graphic{f}{\range[1]{0}{1}}{}";
    assert_eq!(process_block(&mut ctx, &Block::from_source(define)).unwrap(), define);

    let call = r"y := 1 \\ f(777) \\ g(0) \\ z := 2 \\ w := 3";
    assert_eq!(process_block(&mut ctx, &Block::from_source(call)).unwrap(), call);

    let same_block = r"h(x) := x = \placeholder{} \\ h(5) \\ h(5) = \placeholder{}";
    assert_eq!(process_block(&mut ctx, &Block::from_source(same_block)).unwrap(),
               r"h(x) := x = \placeholder{} \\ h(5) \\ h(5) = \placeholder{1}");
}

#[test]
fn locals_of_a_call_do_not_leak() {
    let mut ctx = Context::new();
    let out = process_block(&mut ctx, &Block::from_source(r"g(a) := t := a \cdot 2 \\ g(4) = \placeholder{}")).unwrap();
    assert_eq!(out, r"g(a) := t := a \cdot 2 \\ g(4) = \placeholder{8}");

    let err = process_block(&mut ctx, &Block::from_source("t + 1")).unwrap_err();
    assert!(matches!(&err, Error::Eval(EvalError::UndefinedVariable { name, .. }) if name == "t"),
            "{err}");
}

#[test]
fn recursion_through_cases() {
    let src = r"fact(n) := \begin{caseblock}
                    1 \when n < 1 \\
                    n \cdot fact(n - 1) \otherwise
                \end{caseblock} \\
                fact(5)";
    assert_eq!(value_of(src), "120");
}

#[test]
fn recursion_limit_is_enforced() {
    let settings = Settings { max_call_depth: 16,
                              ..Settings::default() };
    let err = run_with(settings, r"f(x) := f(x) \\ f(1)").unwrap_err();
    assert!(matches!(err, Error::Eval(EvalError::RecursionLimit { limit: 16, .. })), "{err}");
}

#[test]
fn conditionals() {
    assert_eq!(value_of(r"x := 5 \\ r := \ifexpr{x > 3} 1 \otherwise 2 \\ r"), "1");
    assert_eq!(value_of(r"x := 1 \\ r := \ifexpr{x > 3} 1 \otherwise 2 \\ r"), "2");
    assert_eq!(value_of(r"r := \ifexpr{0} 7 \\ r"), "0");

    let err = assert_failure(r"\begin{caseblock} 1 \when 0 > 1 \end{caseblock}");
    assert!(matches!(err, Error::Eval(EvalError::NoMatchingCase { .. })), "{err}");
}

#[test]
fn while_and_product_loops() {
    let sum = r"i := 0 \\ s := 0 \\
                \while i < 4 \\ \begin{block} i := i + 1 \\ s := s + i \end{block} \\
                s";
    assert_eq!(value_of(sum), "10");
    assert_eq!(value_of(r"i := 1 \\ p := \product i < 5 \\ i := i + 1 \\ p"), "120");
    assert_eq!(value_of(r"p := \product 0 \\ 5 \\ p"), "1");
}

#[test]
fn loop_keeps_the_last_placeholder_value() {
    assert_renders(r"i := 0 \\ \while i < 3 \\ \begin{block} i := i + 1 \\ i = \placeholder{} \end{block}",
                   r"i := 0 \\ \while i < 3 \\ \begin{block} i := i + 1 \\ i = \placeholder{3} \end{block}");
}

#[test]
fn iteration_limit_is_enforced() {
    let settings = Settings { max_iterations: 10,
                              ..Settings::default() };
    let err = run_with(settings, r"\while 1 < 2 \\ 0").unwrap_err();
    assert!(matches!(err, Error::Eval(EvalError::IterationLimit { limit: 10, .. })), "{err}");
}

#[test]
fn units_and_dimensions() {
    assert_eq!(value_of(r"v := 10 \cdot \meter / \second \\ v"), r"10\,\mathrm{\frac{m}{s}}");
    assert_eq!(value_of(r"\newton"), r"1\,\mathrm{\frac{m\cdot kg}{s^{2}}}");
    assert_eq!(value_of(r"(2 \cdot \meter)^2"), r"4\,\mathrm{m^{2}}");
    assert_eq!(value_of(r"\sqrt{16 \cdot \meter^2}"), r"4\,\mathrm{m}");
    assert_eq!(value_of(r"\val{5 \cdot \minute}"), "300");
    assert_eq!(value_of(r"\kilogram \cdot \ampere / \kelvin"), r"1\,\mathrm{\frac{kg\cdot A}{K}}");
    assert_eq!(value_of(r"\joule / \watt"), r"1\,\mathrm{s}");
    assert_eq!(value_of(r"\mole \cdot \candela / \mole"), r"1\,\mathrm{cd}");

    let err = assert_failure(r"\meter + 1");
    assert!(matches!(err, Error::Eval(EvalError::DimensionMismatch { .. })), "{err}");
    let err = assert_failure(r"\meter < \second");
    assert!(matches!(err, Error::Eval(EvalError::DimensionMismatch { .. })), "{err}");
    let err = assert_failure(r"\meter^{0.5}");
    assert!(matches!(err, Error::Eval(EvalError::FractionalPowerOfDimensioned { .. })), "{err}");
    let err = assert_failure(r"2^{\meter}");
    assert!(matches!(err, Error::Eval(EvalError::DimensionedExponent { .. })), "{err}");

    let err = assert_failure(r"x := \meter^{2147483647} \\ x \cdot \meter");
    assert!(matches!(err, Error::Eval(EvalError::Overflow { .. })), "{err}");
    let err = assert_failure(r"x := \meter^{-2147483647} \\ x / \meter / \meter");
    assert!(matches!(err, Error::Eval(EvalError::Overflow { .. })), "{err}");
}

#[test]
fn annotated_placeholder_shows_value_in_given_unit() {
    assert_renders(r"t := 2 \cdot \hour \\ t = \placeholder{} \cdot \minute",
                   r"t := 2 \cdot \hour \\ t = \placeholder{120} \cdot \minute");
    assert_eq!(value_of(r"t := 2 \cdot \hour \\ t"), r"7200\,\mathrm{s}");

    assert_renders(r"v := 10 \cdot \meter / \second \\ v = \placeholder{} \cdot \meter / \second",
                   r"v := 10 \cdot \meter / \second \\ v = \placeholder{10} \cdot \meter / \second");
    assert_renders(r"f := 5 / \second \\ f = \placeholder{} / \second",
                   r"f := 5 / \second \\ f = \placeholder{5} / \second");
}

#[test]
fn builtins_and_constants() {
    assert_eq!(value_of(r"\sqrt{16}"), "4");
    assert_eq!(value_of(r"\max(2, 7)"), "7");
    assert_eq!(value_of(r"\min{2}{7}"), "2");
    assert_eq!(value_of(r"\abs{-3}"), "3");
    assert_eq!(value_of(r"\sin{0}"), "0");
    assert_eq!(value_of(r"\mod{7}{3}"), "1");
    assert_eq!(value_of(r"\sign{-4 \cdot \second}"), "-1");
    assert_eq!(value_of(r"\max(2 \cdot \meter, 3 \cdot \meter)"), r"3\,\mathrm{m}");
    assert_eq!(value_of(r"\pi"), "3.141592653589793");

    let err = assert_failure(r"\sin{\meter}");
    assert!(matches!(err, Error::Eval(EvalError::DimensionedArgument { .. })), "{err}");
    let err = assert_failure(r"\sqrt{\meter}");
    assert!(matches!(err, Error::Eval(EvalError::FractionalPowerOfDimensioned { .. })), "{err}");
    let err = assert_failure(r"\sqrt{1}{2}");
    assert!(matches!(err,
                     Error::Eval(EvalError::ArgumentCountMismatch { expected: 1,
                                                                    found: 2,
                                                                    .. })),
            "{err}");
    let err = assert_failure(r"\pi{2}");
    assert!(matches!(err, Error::Eval(EvalError::ArgumentCountMismatch { expected: 0, .. })), "{err}");
    let err = assert_failure(r"\foo");
    assert!(matches!(&err, Error::Eval(EvalError::UndefinedKeyword { name, .. }) if name == r"\foo"),
            "{err}");
}

#[test]
fn matrices_render_and_multiply() {
    assert_eq!(value_of(r"\transp{\begin{pmatrix} 1 & 2 \end{pmatrix}}"),
               "\\begin{pmatrix}\n1\\\\\n2\\end{pmatrix}");
    assert_eq!(value_of(r"A := \begin{pmatrix} 1 & 2 \\ 3 & 4 \end{pmatrix} \\
                         B := \begin{pmatrix} 5 \\ 6 \end{pmatrix} \\
                         p := A \cdot B \\
                         p_1"),
               "39");
    assert_eq!(value_of(r"2 \cdot \begin{pmatrix} 1 & 2 \end{pmatrix}"),
               "\\begin{pmatrix}\n2 & 4\\end{pmatrix}");

    let err = assert_failure(r"\begin{pmatrix} 1 & 2 \end{pmatrix} + \begin{pmatrix} 1 \\ 2 \end{pmatrix}");
    assert!(matches!(err,
                     Error::Eval(EvalError::ShapeMismatch { left: (1, 2),
                                                            right: (2, 1),
                                                            .. })),
            "{err}");

    assert_eq!(value_of(r"\begin{pmatrix} 1 \\ 2 \end{pmatrix} \cdot \begin{pmatrix} 3 \\ 4 \end{pmatrix}"), "11");
    assert_eq!(value_of(r"\begin{pmatrix} 1 & 2 \end{pmatrix} \cdot \begin{pmatrix} 3 & 4 \end{pmatrix}"), "11");
    let err = assert_failure(r"\begin{pmatrix} 1 & 2 \end{pmatrix} \cdot \begin{pmatrix} 1 & 2 & 3 \end{pmatrix}");
    assert!(matches!(err,
                     Error::Eval(EvalError::ShapeMismatch { left: (1, 2),
                                                            right: (1, 3),
                                                            .. })),
            "{err}");
}

#[test]
fn matrix_division_by_zero_reports_operator_position() {
    let src = r"\begin{pmatrix} 1 & 2 \\ 3 & 4 \end{pmatrix} / 0";
    let column = src.find('/').unwrap() + 1;

    let err = assert_failure(src);
    assert!(matches!(err, Error::Eval(EvalError::DivisionByZero { coord }) if coord == Coordinate::new(1, column)),
            "{err}");
    assert_eq!(err.to_string(), format!("1:{column}: Division by zero."));
}

#[test]
fn indexing_and_indexed_assignment() {
    let m = r"m := \begin{pmatrix} 1 & 2 \\ 3 & 4 \end{pmatrix}";
    assert_eq!(value_of(r"v := \begin{pmatrix} 1 & 2 & 3 \end{pmatrix} \\ v_1"), "2");
    assert_eq!(value_of(&format!(r"{m} \\ m_{{1, 0}}")), "3");
    assert_eq!(value_of(&format!(r"{m} \\ m_{{0, 1}} := 7 \\ m_{{0, 1}}")), "7");
    assert_eq!(value_of(&format!(r"{m} \\ a := m \\ m_{{0, 1}} := 7 \\ a_{{0, 1}}")), "2");

    let err = assert_failure(r"v := \begin{pmatrix} 1 & 2 & 3 \end{pmatrix} \\ v_3");
    assert!(matches!(err, Error::Eval(EvalError::IndexOutOfRange { index: 3, len: 3, .. })), "{err}");
    let err = assert_failure(&format!(r"{m} \\ m_1"));
    assert!(matches!(err, Error::Eval(EvalError::VectorIndexOnMatrix { shape: (2, 2), .. })), "{err}");
    let err = assert_failure(r"v := \begin{pmatrix} 1 & 2 \end{pmatrix} \\ v_{-1}");
    assert!(matches!(err, Error::Eval(EvalError::NegativeIndex { .. })), "{err}");
}

#[test]
fn ranges() {
    assert_eq!(value_of(r"\range[2]{0}{10}"),
               "\\begin{pmatrix}\n0 & 2 & 4 & 6 & 8 & 10\\end{pmatrix}");
    assert_eq!(value_of(r"r := \range{0}{1} \\ r_{10}"), "1");

    let err = assert_failure(r"r := \range{0}{1} \\ r_{11}");
    assert!(matches!(err, Error::Eval(EvalError::IndexOutOfRange { .. })), "{err}");
    let err = assert_failure(r"\range{5}{1}");
    assert!(matches!(err, Error::Eval(EvalError::EmptyRange { .. })), "{err}");
    let err = assert_failure(r"\range[0]{0}{1}");
    assert!(matches!(err, Error::Eval(EvalError::InvalidRangeStep { .. })), "{err}");
    let err = assert_failure(r"\range{0}{\meter}");
    assert!(matches!(err, Error::Eval(EvalError::DimensionMismatch { .. })), "{err}");
}

#[test]
fn graphic_replaces_plot_points() {
    assert_renders(r"f(x) := 2 \cdot x \\ \graphic{f}{\range[1]{0}{2}}{(9,9)}",
                   "f(x) := 2 \\cdot x \\\\ \\graphic{f}{\\range[1]{0}{2}}{(0,0)\n(1,2)\n(2,4)\n}");

    let err = assert_failure(r"f(x) := x \\ \graphic{f}{1}{}");
    assert!(matches!(err, Error::Eval(EvalError::PlotRange { found: 0, .. })), "{err}");
    let err = assert_failure(r"f(x, y) := x + y \\ \graphic{f}{\range{0}{1}, \range{0}{1}}{}");
    assert!(matches!(err, Error::Eval(EvalError::PlotRange { found: 2, .. })), "{err}");
}

#[test]
fn runtime_errors() {
    let err = assert_failure(r"y + 1 = \placeholder{}");
    assert!(matches!(&err, Error::Eval(EvalError::UndefinedVariable { name, .. }) if name == "y"), "{err}");
    let err = assert_failure(r"\placeholder{} + 1");
    assert!(matches!(err, Error::Eval(EvalError::PlaceholderOutsideEquality { .. })), "{err}");
    let err = assert_failure("1 := 2");
    assert!(matches!(err, Error::Eval(EvalError::InvalidAssignmentTarget { .. })), "{err}");
    let err = assert_failure("f(x, x) := x");
    assert!(matches!(&err, Error::Eval(EvalError::DuplicateParameter { name, .. }) if name == "x"), "{err}");
    let err = assert_failure(r"f(x) := x \\ f(1, 2)");
    assert!(matches!(err,
                     Error::Eval(EvalError::ArgumentCountMismatch { expected: 1,
                                                                    found: 2,
                                                                    .. })),
            "{err}");
    let err = assert_failure(r"x := 1 \\ x(2)");
    assert!(matches!(err, Error::Eval(EvalError::Type(_))), "{err}");
}

#[test]
fn parse_errors() {
    let err = assert_failure("x := (1 + 2");
    assert!(matches!(err, Error::Parse(ParseError::UnexpectedEndOfBlock { .. })), "{err}");
    let err = assert_failure("x := 1 )");
    assert!(matches!(err, Error::Parse(ParseError::UnexpectedToken { .. })), "{err}");
    let err = assert_failure(r"\begin{pmatrix} 1 & 2 \\ 3 \end{pmatrix}");
    assert!(matches!(err, Error::Parse(ParseError::MatrixNotRectangular { .. })), "{err}");
    let err = assert_failure(r"\begin{caseblock} 1 \end{caseblock}");
    assert!(matches!(err, Error::Parse(ParseError::MalformedCase { .. })), "{err}");
    let err = assert_failure("f(1, 2");
    assert!(matches!(err, Error::Parse(ParseError::ListNotClosed { .. })), "{err}");
    let err = assert_failure("x_{1, 2, 3}");
    assert!(matches!(err, Error::Parse(ParseError::BadIndex { count: 3, .. })), "{err}");
    let err = assert_failure(r"\graphic{f}{\range{0}{1}}");
    assert!(matches!(err, Error::Parse(ParseError::ExpectedPlotData { .. })), "{err}");
}

#[test]
fn lex_errors() {
    let err = assert_failure("x := 3 $");
    assert!(matches!(&err, Error::Lex(LexError::UnexpectedSymbol { symbol, .. }) if symbol == "$"),
            "{err}");
    let err = assert_failure(r"x = \placeholder");
    assert!(matches!(err, Error::Lex(LexError::ExpectedAttribute { .. })), "{err}");
    let err = assert_failure(r"v_\alpha := 1");
    assert!(matches!(err, Error::Lex(LexError::ExpectedTextAttribute { .. })), "{err}");
}

#[test]
fn comments_spacing_and_foreign_environments_are_skipped() {
    assert_eq!(value_of("x := 1 % x := 2\nx"), "1");
    assert_eq!(value_of(r"x := 1 \, + \; 2 \\ x"), "3");
    assert_eq!(value_of(r"\begin{align} a &= b \end{align} x := 4 \\ x"), "4");
    assert_eq!(value_of(r"v_\text{max} := 12 \\ v_\text{max}"), "12");
    assert_eq!(value_of(r"x := 3. \\ x"), "3");
}

#[test]
fn token_text_lexes_back_to_the_same_token() {
    let src = r"\begin{block} v_\text{max} := \frac{x}{2} \cdot \sqrt{16} \\ m_{0, 1} \leq 10.5 = \placeholder{} \end{block}";
    let tokens = tokenize(&Block::from_source(src)).unwrap();
    assert_eq!(tokens.last().map(|t| t.tag), Some(Tag::None));

    for token in tokens.iter().filter(|t| t.tag != Tag::None) {
        let again = tokenize(&Block::from_source(token.raw.clone())).unwrap();
        assert_eq!(again.len(), 2, "{} split into several tokens", token.raw);
        assert_eq!(again[0].tag, token.tag);
        assert_eq!(again[0].raw, token.raw);
    }
}

#[test]
fn context_is_shared_between_blocks() {
    let mut ctx = Context::new();
    process_block(&mut ctx, &Block::from_source("a := 4")).unwrap();
    let out = process_block(&mut ctx, &Block::from_source(r"a \cdot 2 = \placeholder{}")).unwrap();
    assert_eq!(out, r"a \cdot 2 = \placeholder{8}");

    assert!(process_block(&mut ctx, &Block::from_source(r"a = \placeholder{} \\ 1 / 0")).is_err());
    assert!(ctx.replacements.is_empty());
}
