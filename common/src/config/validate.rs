/// Checked after a config is loaded and before one is saved.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
