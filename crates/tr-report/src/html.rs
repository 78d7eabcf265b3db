//! Chart-options HTML page.
//!
//! A static descriptive form for choosing chart types, served as a
//! download. No request state flows in, so the output is byte-identical
//! across calls.

use askama::Template;
use tr_chart::ChartKind;
use tr_common::{Error, Result};

#[derive(Template)]
#[template(path = "chart_form.html")]
struct ChartFormPage<'a> {
    choices: &'a [ChartChoice],
}

struct ChartChoice {
    value: &'static str,
    title: &'static str,
    description: &'static str,
}

/// Render the chart-options page.
pub fn chart_options_page() -> Result<String> {
    let choices = [
        ChartChoice {
            value: ChartKind::Line.label(),
            title: ChartKind::Line.title(),
            description: "Flow readings plotted against their timestamps.",
        },
        ChartChoice {
            value: ChartKind::Scatter.label(),
            title: ChartKind::Scatter.title(),
            description: "Each reading's flow against its percentage of capacity.",
        },
        ChartChoice {
            value: ChartKind::Bar.label(),
            title: ChartKind::Bar.title(),
            description: "Counter value for every record, in fetch order.",
        },
    ];
    ChartFormPage { choices: &choices }
        .render()
        .map_err(|e| Error::Template(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_chart_kind() {
        let page = chart_options_page().unwrap();
        for kind in [ChartKind::Line, ChartKind::Scatter, ChartKind::Bar] {
            assert!(page.contains(kind.label()));
            assert!(page.contains(kind.title()));
        }
    }

    #[test]
    fn output_is_stable_across_calls() {
        assert_eq!(
            chart_options_page().unwrap(),
            chart_options_page().unwrap()
        );
    }
}
