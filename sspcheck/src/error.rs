use sspcheck_validator::Diagnostic;

/// Render an engine diagnostic against the stylesheet source.
pub(crate) fn render_diagnostic(src: &str, diagnostic: &Diagnostic) {
    let red = ariadne::Color::Red;

    let mut report = ariadne::Report::build(ariadne::ReportKind::Error, "source", 0)
        .with_code(&diagnostic.code);

    if let Some(span) = &diagnostic.span {
        report = report.with_label(
            ariadne::Label::new(("source", span.clone()))
                .with_message(&diagnostic.message)
                .with_color(red),
        )
    }
    report
        .finish()
        .eprint(("source", ariadne::Source::from(src)))
        .unwrap();
    if !diagnostic.note.is_empty() {
        eprintln!("{}", diagnostic.note);
    }
}
