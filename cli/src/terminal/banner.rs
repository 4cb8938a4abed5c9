use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
                 ___ __ _ _ __| |_ ___
                / __/ _` | '__| __/ _ \
               | (_| (_| | |  | ||  __/
                \___\__,_|_|   \__\___|
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.truecolor(160, 82, 45)));
}
