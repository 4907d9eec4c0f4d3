use colored::*;

use super::print;

const BANNER: &str = r#"
                     _____ ___ _     _
                    |_   _|_ _| |   | |
                      | |  | || |   | |
                      | |  | || |___| |___
                      |_| |___|_____|_____|
"#;

pub fn print() {
    for line in BANNER.lines().filter(|line| !line.trim().is_empty()) {
        print::print(&format!("{}", line.bright_green()));
    }
}
