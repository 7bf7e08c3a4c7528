#[derive(Debug, Clone)]
pub struct Config {
    /// Dump the tree as JSON instead of unparsing it.
    pub emit_ast: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { emit_ast: false }
    }
}
