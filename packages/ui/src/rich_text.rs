//! Rich-text input: a TinyMCE editor layered over a plain `textarea`.
//!
//! The `textarea` is always rendered and works on its own. Once the TinyMCE
//! script loads, the editor attaches to it and reports its HTML through an
//! eval bridge, so callers see one `on_change` stream either way.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

const TINYMCE_JS: &str = "https://cdn.jsdelivr.net/npm/tinymce@7/tinymce.min.js";

static FIELD_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Quote `s` as a double-quoted JS string literal.
fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Keeps "</script>" and friends inert
            '<' => out.push_str("\\u003c"),
            c if c < '\x20' => out.push_str(&format!("\\u{:04x}", c as u32)),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Script switching the editor for `id` between read-only and editable.
fn editor_mode_js(id: &str, disabled: bool) -> String {
    let mode = if disabled { "readonly" } else { "design" };
    format!(
        "if (window.tinymce && tinymce.get({0})) tinymce.get({0}).mode.set('{mode}');",
        js_string(id)
    )
}

#[component]
pub fn RichTextField(
    value: String,
    on_change: EventHandler<String>,
    #[props(default)] label: String,
    #[props(default = "Write here...".to_string())] placeholder: String,
    #[props(default = 8)] rows: u32,
    /// Locks both the textarea and the editor, e.g. while the form is sending.
    #[props(default)]
    disabled: bool,
) -> Element {
    let field_id = use_signal(|| {
        let n = FIELD_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("rich-text-{n}")
    });
    let mut script_loaded = use_signal(|| false);
    let mut mounted = use_signal(|| false);
    // Last value seen from either side, to avoid echoing edits back
    let mut last_seen = use_signal(|| value.clone());
    let mut locked = use_signal(|| disabled);

    // ── Load the TinyMCE script once per page ──
    use_effect(move || {
        let js = format!(
            r#"(function() {{
                if (window.tinymce) {{ dioxus.send(true); return; }}
                var existing = document.getElementById('tinymce-js');
                var script = existing || document.createElement('script');
                script.addEventListener('load', function() {{ dioxus.send(true); }});
                script.addEventListener('error', function() {{ dioxus.send(false); }});
                if (!existing) {{
                    script.id = 'tinymce-js';
                    script.src = '{TINYMCE_JS}';
                    script.referrerPolicy = 'origin';
                    document.head.appendChild(script);
                }}
            }})();"#
        );
        spawn(async move {
            let mut eval = document::eval(&js);
            match eval.recv::<bool>().await {
                Ok(true) => script_loaded.set(true),
                _ => tracing::warn!("Rich-text editor unavailable, using plain text input"),
            }
        });
    });

    // ── Attach the editor and bridge its events ──
    use_effect(move || {
        if !script_loaded() {
            return;
        }
        let id = field_id.peek().clone();
        let js = format!(
            r#"(function() {{
                var target = document.getElementById({id_js});
                if (!target || !window.tinymce || tinymce.get({id_js})) return;
                tinymce.init({{
                    target: target,
                    menubar: false,
                    promotion: false,
                    plugins: 'link lists',
                    toolbar: 'undo redo | bold italic | bullist numlist | link',
                    setup: function(editor) {{
                        editor.on('init', function() {{ dioxus.send(['ready', '']); }});
                        editor.on('input change undo redo', function() {{
                            dioxus.send(['change', editor.getContent()]);
                        }});
                    }}
                }});
            }})();"#,
            id_js = js_string(&id),
        );
        spawn(async move {
            let mut eval = document::eval(&js);
            while let Ok((kind, html)) = eval.recv::<(String, String)>().await {
                match kind.as_str() {
                    "ready" => {
                        mounted.set(true);
                        if *locked.peek() {
                            let id = field_id.peek().clone();
                            document::eval(&editor_mode_js(&id, true));
                        }
                    }
                    _ => {
                        last_seen.set(html.clone());
                        on_change.call(html);
                    }
                }
            }
        });
    });

    use_drop(move || {
        let id = field_id.peek().clone();
        document::eval(&format!(
            "if (window.tinymce && tinymce.get({0})) tinymce.get({0}).remove();",
            js_string(&id)
        ));
    });

    // A value set from outside (e.g. the form was cleared) goes into the editor
    if *last_seen.peek() != value {
        last_seen.set(value.clone());
        if *mounted.peek() {
            let id = field_id.peek().clone();
            document::eval(&format!(
                "if (window.tinymce && tinymce.get({0})) tinymce.get({0}).setContent({1});",
                js_string(&id),
                js_string(&value)
            ));
        }
    }

    if *locked.peek() != disabled {
        locked.set(disabled);
        if *mounted.peek() {
            let id = field_id.peek().clone();
            document::eval(&editor_mode_js(&id, disabled));
        }
    }

    let id = field_id();
    rsx! {
        div {
            class: "rich-text",
            if !label.is_empty() {
                label { r#for: "{id}", "{label}" }
            }
            textarea {
                id: "{id}",
                rows: "{rows}",
                placeholder: "{placeholder}",
                value: "{value}",
                disabled,
                oninput: move |evt: FormEvent| {
                    let text = evt.value();
                    last_seen.set(text.clone());
                    on_change.call(text);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes() {
        assert_eq!(js_string("plain"), "\"plain\"");
        assert_eq!(js_string("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(js_string("line\nbreak"), "\"line\\nbreak\"");
        assert_eq!(js_string("</script>"), "\"\\u003c/script>\"");
        assert_eq!(js_string("\u{1}"), "\"\\u0001\"");
    }

    #[test]
    fn test_editor_mode_script() {
        let locked = editor_mode_js("rich-text-3", true);
        assert!(locked.contains("tinymce.get(\"rich-text-3\").mode.set('readonly')"));
        let open = editor_mode_js("rich-text-3", false);
        assert!(open.contains("mode.set('design')"));
    }
}
