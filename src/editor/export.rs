//! Text exports of a project: JSON, a standalone HTML page, and an iframe embed snippet.

use std::fmt::Write as _;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD};

use crate::foundation::error::CracktroResult;
use crate::scene::project::Project;

pub const EMBED_BASE_URL: &str = "https://cracktro.app/embed";

/// Pretty-printed project JSON (two-space indent).
pub fn export_json(project: &Project) -> CracktroResult<String> {
    Ok(serde_json::to_string_pretty(project)?)
}

/// Self-contained HTML page embedding the project as a `PROJECT` constant.
pub fn standalone_html(project: &Project) -> CracktroResult<String> {
    let json = script_safe(&serde_json::to_string_pretty(project)?);
    let title = html_escape(&project.name);
    let bg = project.background_color.to_hex();
    let (w, h) = (project.width, project.height);

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title} - Cracktro</title>
  <style>
    * {{ margin: 0; padding: 0; box-sizing: border-box; }}
    html, body {{
      width: 100%;
      height: 100%;
      overflow: hidden;
      background: {bg};
    }}
    #container {{
      width: 100%;
      height: 100%;
      display: flex;
      align-items: center;
      justify-content: center;
    }}
    #cracktro {{
      width: {w}px;
      height: {h}px;
      max-width: 100%;
      max-height: 100%;
      position: relative;
      overflow: hidden;
      background: {bg};
    }}
    canvas {{
      position: absolute;
      top: 0;
      left: 0;
    }}
    .scanlines {{
      position: absolute;
      inset: 0;
      pointer-events: none;
      background: repeating-linear-gradient(
        0deg,
        rgba(0, 0, 0, 0.1),
        rgba(0, 0, 0, 0.1) 1px,
        transparent 1px,
        transparent 2px
      );
      z-index: 1000;
    }}
  </style>
</head>
<body>
  <div id="container">
    <div id="cracktro">
      <div class="scanlines"></div>
    </div>
  </div>
  <script>
    const PROJECT = {json};

    const container = document.getElementById('cracktro');
    const width = PROJECT.width;
    const height = PROJECT.height;

    console.log('Cracktro loaded!', PROJECT.name);
    console.log('Effects:', PROJECT.effects.length);
  </script>
</body>
</html>
"#
    ))
}

/// `<iframe>` snippet pointing at [`EMBED_BASE_URL`] with the project in the `p` parameter.
///
/// The parameter is base64 over the URI-component-encoded JSON, so it is plain ASCII.
pub fn embed_code(project_json: &str, width: u32, height: u32) -> String {
    let encoded = BASE64_STANDARD.encode(uri_component_encode(project_json));
    format!(
        "<iframe \n  src=\"{EMBED_BASE_URL}?p={encoded}\"\n  width=\"{width}\"\n  height=\"{height}\"\n  frameborder=\"0\"\n  allowfullscreen>\n</iframe>"
    )
}

/// Inverse of the `p` parameter encoding used by [`embed_code`].
pub fn decode_embed_param(param: &str) -> Option<String> {
    let ascii = BASE64_STANDARD.decode(param).ok()?;
    uri_component_decode(std::str::from_utf8(&ascii).ok()?)
}

// `</` would end the script element early; `<\/` is the same string to JavaScript.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn is_uri_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&b)
}

pub(crate) fn uri_component_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        if is_uri_unreserved(b) {
            out.push(b as char);
        } else {
            let _ = write!(out, "%{b:02X}");
        }
    }
    out
}

pub(crate) fn uri_component_decode(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = s.get(i + 1..i + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

#[cfg(test)]
#[path = "../../tests/unit/editor/export.rs"]
mod tests;
