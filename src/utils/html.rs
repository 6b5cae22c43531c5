// src/utils/html.rs

/// Sanitizes generated text before it is stored and later rendered by the
/// dashboard.
///
/// Plain prose is stored exactly as generated; escaping it is the renderer's
/// job. Only text that contains markup (tags, comments) goes through the
/// whitelist, which keeps harmless formatting (`<b>`, `<p>`, lists) and drops
/// `<script>`, `<iframe>` and event-handler attributes.
pub fn clean_html(input: &str) -> String {
    if ammonia::is_html(input) {
        ammonia::clean(input)
    } else {
        input.to_string()
    }
}
