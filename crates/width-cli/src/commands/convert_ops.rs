use std::io::{self, BufRead, BufWriter, Write};

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use width_engine::Converter;

use super::{die, open_table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ToFullwidth,
    ToHalfwidth,
}

impl Direction {
    pub fn apply(self, conv: &Converter, text: &str) -> String {
        match self {
            Direction::ToFullwidth => conv.to_fullwidth(text),
            Direction::ToHalfwidth => conv.to_halfwidth(text),
        }
    }
}

#[derive(Debug, Serialize)]
struct ConvertRecord<'a> {
    input: &'a str,
    output: &'a str,
}

/// Render one converted line, either plain or as a JSON object.
pub fn format_line(conv: &Converter, direction: Direction, line: &str, json: bool) -> String {
    let output = direction.apply(conv, line);
    if json {
        let record = ConvertRecord {
            input: line,
            output: &output,
        };
        serde_json::to_string(&record).expect("JSON serialization failed")
    } else {
        output
    }
}

/// Convert the argument, or every line of stdin when no text is given.
pub fn convert_cmd(direction: Direction, text: Option<&str>, table: Option<&str>, json: bool) {
    let source = open_table(table);
    let conv = source.converter();

    if let Some(text) = text {
        println!("{}", format_line(conv, direction, text, json));
        return;
    }

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    for line in stdin.lock().lines() {
        let line = die!(line, "Failed to read line: {}");
        die!(
            writeln!(out, "{}", format_line(conv, direction, &line, json)),
            "Failed to write: {}"
        );
    }
    die!(out.flush(), "Failed to write: {}");
}

/// Column widths of `text` as given, as fullwidth and as halfwidth.
#[derive(Debug, PartialEq, Eq)]
pub struct WidthReport {
    pub input: usize,
    pub fullwidth: usize,
    pub halfwidth: usize,
}

pub fn width_report(conv: &Converter, text: &str) -> WidthReport {
    WidthReport {
        input: text.width(),
        fullwidth: conv.to_fullwidth(text).width(),
        halfwidth: conv.to_halfwidth(text).width(),
    }
}

pub fn width_cmd(text: &str, table: Option<&str>) {
    let source = open_table(table);
    let report = width_report(source.converter(), text);
    println!("input:     {:>4} columns", report.input);
    println!("fullwidth: {:>4} columns", report.fullwidth);
    println!("halfwidth: {:>4} columns", report.halfwidth);
}
