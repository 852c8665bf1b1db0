use crate::{CursorAgentError, Result};

/// Extract the chat id from `cursor-agent create-chat` output.
///
/// The tool prints something like `Created chat: <id>` (or just the id), so
/// the last whitespace-delimited token of the trimmed output is taken as the
/// id. The token is not validated; if the tool's output format changes this
/// is the only place that needs to follow it.
pub fn parse_chat_id(output: &str) -> Result<String> {
    output
        .split_whitespace()
        .next_back()
        .map(str::to_owned)
        .ok_or_else(|| CursorAgentError::MissingChatId {
            output: output.to_owned(),
        })
}
