//! Static page rendering.
//!
//! `render_page` is a pure function from a selection (plus optional APOD) to a
//! self-contained HTML document. Writing the result to disk is a separate
//! boundary operation so the renderer stays testable offline.

use std::fmt::Write as FmtWrite;
use std::path::Path;

use tokio::fs;
use tracing::info;

use crate::apod::Apod;
use crate::error::RenderError;
use crate::select::Selection;
use crate::store::Entry;

/// Escape text for safe interpolation into HTML body or attribute positions.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn images_block(entry: &Entry) -> String {
    if entry.images.is_empty() {
        return String::new();
    }
    let imgs: String = entry
        .images
        .iter()
        .map(|url| format!(r#"<img src="{}" alt="Entry image">"#, escape_html(url)))
        .collect();
    format!(r#"<div class="images">{}</div>"#, imgs)
}

fn history_block(entry: &Entry) -> String {
    let Some(history) = &entry.history else {
        return String::new();
    };
    format!(
        concat!(
            r#"<button class="history-toggle" onclick="toggleHistory(this)">History</button>"#,
            r#"<div class="history-content">{}</div>"#
        ),
        escape_html(history)
    )
}

fn quote_block(quote: &Entry) -> String {
    format!(
        r#"<div class="entry">
    <p class="entry-text">&quot;{}&quot;</p>
    <p class="entry-author">&mdash; {}</p>
    {}{}
</div>"#,
        escape_html(&quote.text),
        escape_html(&quote.author),
        images_block(quote),
        history_block(quote),
    )
}

fn poem_block(poem: &Entry) -> String {
    // Poems keep their line breaks.
    let text = escape_html(&poem.text).replace('\n', "<br>");
    format!(
        r#"<div class="entry">
    <p class="entry-text">{}</p>
    <p class="entry-author">&mdash; {}</p>
    {}{}
</div>"#,
        text,
        escape_html(&poem.author),
        images_block(poem),
        history_block(poem),
    )
}

fn apod_media_block(apod: &Apod) -> String {
    let title = escape_html(apod.title.as_deref().unwrap_or_default());
    let media = if apod.is_video() {
        format!(
            r#"<iframe src="{}" frameborder="0" allowfullscreen></iframe>"#,
            escape_html(apod.url.as_deref().unwrap_or_default())
        )
    } else {
        format!(
            r#"<a href="{}" target="_blank"><img src="{}" alt="{}"></a>"#,
            escape_html(apod.best_image_url().unwrap_or_default()),
            escape_html(apod.url.as_deref().unwrap_or_default()),
            title,
        )
    };
    format!(
        r#"<section class="apod-section">
    <h2>Astronomy Picture of the Day</h2>
    <div class="apod-media">{}</div>
    <p class="apod-title">{}</p>
</section>"#,
        media, title
    )
}

fn apod_description_block(apod: &Apod) -> String {
    let copyright = apod
        .copyright
        .as_deref()
        .map(|c| format!(r#"<p class="apod-copyright">Image Credit: {}</p>"#, escape_html(c)))
        .unwrap_or_default();
    format!(
        r#"<section class="apod-description">
    <h2>About Today's Astronomy Picture</h2>
    <p class="apod-explanation">{}</p>
    {}
    <p class="apod-credit">Image courtesy of <a href="https://apod.nasa.gov/apod/astropix.html" target="_blank">NASA APOD</a></p>
</section>"#,
        escape_html(apod.explanation.as_deref().unwrap_or_default()),
        copyright,
    )
}

const PAGE_STYLE: &str = r#"
:root {
    --bg-color: #ffffff;
    --text-color: #2d3436;
    --secondary-color: #636e72;
    --border-color: #dfe6e9;
    --accent-color: #6c5ce7;
}
@media (prefers-color-scheme: dark) {
    :root {
        --bg-color: #0d1117;
        --text-color: #e6edf3;
        --secondary-color: #8b949e;
        --border-color: #21262d;
        --accent-color: #a29bfe;
    }
}
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    background-color: var(--bg-color);
    color: var(--text-color);
    line-height: 1.8;
    min-height: 100vh;
}
.container { max-width: 680px; margin: 0 auto; padding: 3rem 2rem; }
header { text-align: center; margin-bottom: 3rem; }
h1 { font-weight: 600; font-size: 1.8rem; }
h2 {
    font-weight: 500;
    font-size: 1.1rem;
    color: var(--secondary-color);
    margin: 2.5rem 0 1rem;
    text-transform: uppercase;
    letter-spacing: 0.08em;
}
.date { color: var(--secondary-color); margin-top: 0.5rem; }
.entry {
    border: 1px solid var(--border-color);
    border-radius: 12px;
    padding: 1.5rem;
    margin-bottom: 1.25rem;
}
.entry-text { font-size: 1.05rem; }
.entry-author { color: var(--secondary-color); margin-top: 0.75rem; }
.images { margin-top: 1rem; }
.images img { max-width: 100%; border-radius: 8px; }
.history-toggle {
    margin-top: 1rem;
    background: none;
    border: none;
    color: var(--accent-color);
    cursor: pointer;
    font-size: 0.85rem;
}
.history-content { display: none; margin-top: 0.75rem; color: var(--secondary-color); font-size: 0.9rem; }
.history-content.open { display: block; }
.empty { color: var(--secondary-color); text-align: center; }
.apod-section { margin-bottom: 2rem; text-align: center; }
.apod-media img, .apod-media iframe { max-width: 100%; border-radius: 12px; }
.apod-media iframe { width: 100%; aspect-ratio: 16 / 9; }
.apod-title { color: var(--secondary-color); margin-top: 0.5rem; font-size: 0.9rem; }
.apod-description { margin-top: 3rem; border-top: 1px solid var(--border-color); padding-top: 2rem; }
.apod-explanation { font-size: 0.95rem; }
.apod-copyright, .apod-credit { color: var(--secondary-color); font-size: 0.85rem; margin-top: 0.75rem; }
"#;

const PAGE_SCRIPT: &str = r#"
function toggleHistory(btn) {
    btn.nextElementSibling.classList.toggle('open');
}
"#;

/// Render the full daily page for a selection.
pub fn render_page(selection: &Selection, apod: Option<&Apod>) -> String {
    let date_heading = selection.date.format("%B %-d, %Y").to_string();

    let mut body = String::new();

    if let Some(apod) = apod {
        body.push_str(&apod_media_block(apod));
    }

    body.push_str("<h2>Today's Quotes</h2>\n");
    if selection.quotes.is_empty() {
        body.push_str(r#"<p class="empty">No quotes available</p>"#);
    } else {
        for quote in &selection.quotes {
            let _ = writeln!(body, "{}", quote_block(quote));
        }
    }

    body.push_str("<h2>Today's Poem</h2>\n");
    match &selection.poem {
        Some(poem) => {
            let _ = writeln!(body, "{}", poem_block(poem));
        }
        None => body.push_str(r#"<p class="empty">No poem available</p>"#),
    }

    if let Some(apod) = apod {
        body.push_str(&apod_description_block(apod));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Daily Inspiration</title>
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600&display=swap" rel="stylesheet">
    <style>{style}</style>
</head>
<body>
    <div class="container">
        <header>
            <h1>Daily Inspiration</h1>
            <p class="date">{date}</p>
        </header>
        {body}
    </div>
    <script>{script}</script>
</body>
</html>
"#,
        style = PAGE_STYLE,
        date = date_heading,
        body = body,
        script = PAGE_SCRIPT,
    )
}

/// Overwrite the destination file with the rendered page, creating parent
/// directories as needed.
pub async fn write_page(path: &Path, html: &str) -> Result<(), RenderError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|source| RenderError::Write {
                path: path.to_path_buf(),
                source,
            })?;
    }
    fs::write(path, html)
        .await
        .map_err(|source| RenderError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), bytes = html.len(), "Page written");
    Ok(())
}
