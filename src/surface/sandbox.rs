//! HTML documents for the sandboxed preview.
//!
//! The buffer is dropped verbatim into a module script inside a try/catch.
//! Anything thrown while it runs replaces the body with the error in red
//! monospace text. When the script leaves `React`/`ReactDOM` globals behind,
//! mounting `App` into `#app` is attempted inside the same try, so a failed
//! mount looks exactly like any other script error.
//!
//! The text is not escaped. A literal `</script>` in the buffer closes the
//! inline script early, and whatever follows it is parsed as HTML. The iframe
//! sandbox still applies to that markup.

/// Only script execution; no same-origin, forms or popups.
pub const SANDBOX_PERMISSIONS: &str = "allow-scripts";

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
  <style>
    body { font-family: system-ui, sans-serif; margin: 0; padding: 16px; }
  </style>
</head>
<body>
  <div id="app"></div>
  <script type="module">
    try {
"#;

const DOCUMENT_TAIL: &str = r#"
      if (typeof React !== 'undefined' && typeof ReactDOM !== 'undefined') {
        ReactDOM.render(React.createElement(App), document.getElementById('app'));
      }
    } catch (error) {
      document.body.innerHTML = '<div style="color: red; font-family: monospace; white-space: pre-wrap;">' + error + '</div>';
      console.error(error);
    }
  </script>
</body>
</html>
"#;

/// The document loaded inside the iframe.
pub fn document(code: &str) -> String {
    let mut out = String::with_capacity(DOCUMENT_HEAD.len() + code.len() + DOCUMENT_TAIL.len());
    out.push_str(DOCUMENT_HEAD);
    out.push_str(code);
    out.push_str(DOCUMENT_TAIL);
    out
}

/// Standalone page hosting the sandboxed iframe, ready to open in a browser.
pub fn host_page(code: &str, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <style>
    html, body {{ height: 100%; margin: 0; }}
    iframe {{ width: 100%; height: 100%; min-height: 500px; border: 0; }}
  </style>
</head>
<body>
  <iframe title="{title}" sandbox="{perms}" srcdoc="{srcdoc}"></iframe>
</body>
</html>
"#,
        title = escape_attr(title),
        perms = SANDBOX_PERMISSIONS,
        srcdoc = escape_attr(&document(code)),
    )
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
