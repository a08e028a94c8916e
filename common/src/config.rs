pub struct Config {
    /// Skips the banner printed before every command.
    pub no_banner: bool,
    /// `1` hides banners and headers, `2` also hides informational narration.
    pub quiet: u8,
    /// Replaces narration pauses with no-ops.
    pub no_pause: bool,
    /// Fixed seed for every random stream. Fresh entropy when absent.
    pub seed: Option<u64>,
    /// Enters the text menu after the scripted devices demonstration.
    pub interactive: bool,
}
