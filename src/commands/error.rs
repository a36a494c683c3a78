/// Centralized error mapping for commands.
///
/// Renders the whole context chain on one line, e.g.
/// `Could not register the orphanage: server error: 500`.
pub fn map_err(err: anyhow::Error) -> String {
    format!("{err:#}")
}
