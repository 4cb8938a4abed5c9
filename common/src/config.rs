/// Runtime options collected from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    /// Skips the banner printed at startup.
    pub no_banner: bool,
    /// Quiet level.
    ///
    /// `1` hides the banner and section headers, `2` also hides item
    /// descriptions.
    pub quiet: u8,
    /// Symbol printed in front of every amount.
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            currency: String::from("R"),
        }
    }
}
