use anyhow::Context;
use cursor_agent::CursorAgentClient;

use crate::output::print_value;

pub fn create(client: &CursorAgentClient, json: bool) -> anyhow::Result<()> {
    let chat_id = client.create_chat().context("failed to create chat")?;
    print_value("chat_id", &chat_id, json)
}
