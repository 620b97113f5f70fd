//! HTML for the two-column calculator page.

use std::fmt::{self, Write};

use confmat_core::svg::{escape_text, write_svg};
use confmat_core::{ConfusionCounts, Evaluation};

pub const PAGE_TITLE: &str = "Sensitivity and Specificity Calculator";

/// Path the side-panel image is served from.
pub const SIDE_IMAGE_PATH: &str = "/images/CM.png";
pub const SIDE_IMAGE_CAPTION: &str = "Confusion Matrix";
pub const SIDE_IMAGE_WIDTH: u32 = 500;

const STYLE: &str = "body{font-family:'Source Sans Pro',Helvetica,Arial,sans-serif;margin:2rem 3rem;color:#262730}\
.columns{display:grid;grid-template-columns:2fr 1fr;gap:2rem;align-items:start}\
label{display:block;margin-top:.8rem;font-size:.9rem}\
input[type=number]{width:100%;max-width:24rem;padding:.4rem;font-size:1rem}\
button{margin-top:1rem;padding:.5rem 1.2rem;font-size:1rem;cursor:pointer}\
.results p{font-size:1.05rem;margin:.4rem 0}\
figure{margin:0}figcaption{text-align:center;color:#808495;font-size:.85rem}\
.side img{max-width:100%}";

/// `(field name, label)` for each input, in form order.
const FIELDS: [(&str, &str); 4] = [
    ("tp", "True Positives (TP)"),
    ("fn", "False Negatives (FN)"),
    ("tn", "True Negatives (TN)"),
    ("fp", "False Positives (FP)"),
];

fn field_values(counts: &ConfusionCounts) -> [u64; 4] {
    [
        counts.true_positive,
        counts.false_negative,
        counts.true_negative,
        counts.false_positive,
    ]
}

/// Render the calculator page; `evaluation` is present after a submission.
pub fn render_page(counts: &ConfusionCounts, evaluation: Option<&Evaluation>) -> String {
    let mut html = String::new();
    // Formatting into a String cannot fail.
    let _ = write_page(&mut html, counts, evaluation);
    html
}

fn write_page<W: Write>(
    html: &mut W,
    counts: &ConfusionCounts,
    evaluation: Option<&Evaluation>,
) -> fmt::Result {
    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang='en'>")?;
    writeln!(html, "<head>")?;
    writeln!(html, "  <meta charset='utf-8'>")?;
    writeln!(html, "  <title>{}</title>", escape_text(PAGE_TITLE))?;
    writeln!(html, "  <style>{STYLE}</style>")?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(html, "  <h1>{}</h1>", escape_text(PAGE_TITLE))?;
    writeln!(
        html,
        "  <p>This app calculates the sensitivity and specificity based on the following inputs:</p>"
    )?;
    writeln!(html, "  <ul>")?;
    for (_, label) in FIELDS {
        writeln!(html, "    <li>{}</li>", escape_text(label))?;
    }
    writeln!(html, "  </ul>")?;

    writeln!(html, "  <div class='columns'>")?;
    writeln!(html, "    <section class='main'>")?;
    writeln!(html, "      <form method='get' action='/calculate'>")?;
    for ((name, label), value) in FIELDS.iter().zip(field_values(counts)) {
        writeln!(
            html,
            "        <label for='{name}'>{}</label>",
            escape_text(label)
        )?;
        writeln!(
            html,
            "        <input type='number' id='{name}' name='{name}' min='0' step='1' value='{value}'>"
        )?;
    }
    writeln!(html, "        <button type='submit'>Calculate</button>")?;
    writeln!(html, "      </form>")?;

    if let Some(evaluation) = evaluation {
        writeln!(html, "      <div class='results'>")?;
        writeln!(
            html,
            "        <p>Sensitivity: {:.2}</p>",
            evaluation.rates.sensitivity
        )?;
        writeln!(
            html,
            "        <p>Specificity: {:.2}</p>",
            evaluation.rates.specificity
        )?;
        writeln!(html, "      </div>")?;
        writeln!(html, "      <figure class='matrix'>")?;
        write_svg(html, &evaluation.grid)?;
        writeln!(html, "      </figure>")?;
    }

    writeln!(html, "    </section>")?;
    writeln!(html, "    <aside class='side'>")?;
    writeln!(html, "      <figure>")?;
    writeln!(
        html,
        "        <img src='{SIDE_IMAGE_PATH}' alt='{caption}' width='{SIDE_IMAGE_WIDTH}'>",
        caption = escape_text(SIDE_IMAGE_CAPTION)
    )?;
    writeln!(
        html,
        "        <figcaption>{}</figcaption>",
        escape_text(SIDE_IMAGE_CAPTION)
    )?;
    writeln!(html, "      </figure>")?;
    writeln!(html, "    </aside>")?;
    writeln!(html, "  </div>")?;
    writeln!(html, "</body>")?;
    writeln!(html, "</html>")
}
