use ns_core::model::TIMESTAMP_FORMAT;
use ns_core::ArticleRow;

pub const DISPLAY_COLUMNS: [&str; 5] = [
    "Published At",
    "Source Name",
    "Sentiment",
    "Title",
    "Description",
];

const PAGE_HEAD: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>News Sentiment Dashboard</title>
<style>
    body { font-family: sans-serif; margin: 1rem; }
    h1 { text-align: center; }
    table.dataframe { width: 100%; border-collapse: collapse; }
    table.dataframe th { text-align: center; vertical-align: middle; border-bottom: 2px solid #444; padding: 6px; }
    table.dataframe td { border-bottom: 1px solid #ccc; padding: 6px; }
</style>
</head>
<body>
<h1>News Sentiment Dashboard</h1>
"#;

const PAGE_FOOT: &str = "</body>\n</html>\n";

/// Inline style for the Sentiment cell, matched case-insensitively against
/// the stored label. Anything unrecognized gets no style.
pub fn sentiment_style(label: &str) -> &'static str {
    match label.to_lowercase().as_str() {
        "positive" => "background-color: green; color: black;",
        "negative" => "background-color: red; color: black;",
        "neutral" => "background-color: lightgray; color: black;",
        _ => "",
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Full-width table, no row-index column.
pub fn page(rows: &[ArticleRow]) -> String {
    let mut html = String::from(PAGE_HEAD);
    html.push_str("<table class=\"dataframe\">\n<thead><tr>");
    for column in DISPLAY_COLUMNS {
        html.push_str(&format!("<th>{}</th>", column));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for row in rows {
        html.push_str("<tr>");
        html.push_str(&format!(
            "<td>{}</td>",
            row.published_at.format(TIMESTAMP_FORMAT)
        ));
        html.push_str(&format!("<td>{}</td>", escape(&row.source)));
        html.push_str(&format!(
            "<td style=\"text-align: center; {}\">{}</td>",
            sentiment_style(&row.sentiment_label),
            escape(&row.sentiment_label)
        ));
        html.push_str(&format!("<td>{}</td>", escape(&row.title)));
        html.push_str(&format!("<td>{}</td>", escape(&row.description)));
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n");
    html.push_str(PAGE_FOOT);
    html
}

pub fn error_page(message: &str) -> String {
    let mut html = String::from(PAGE_HEAD);
    html.push_str(&format!(
        "<p style=\"color: red; text-align: center;\">{}</p>\n",
        escape(message)
    ));
    html.push_str(PAGE_FOOT);
    html
}
