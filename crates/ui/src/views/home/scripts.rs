pub(super) const TRANSCRIPT_ID: &str = "qa-transcript";

/// Pins the transcript panel to its newest line.
pub(super) fn scroll_to_end_script(container_id: &str) -> String {
    format!(
        r"(function() {{
            const el = document.getElementById({container_id:?});
            if (el) el.scrollTop = el.scrollHeight;
        }})();"
    )
}
